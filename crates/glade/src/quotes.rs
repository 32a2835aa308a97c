//! Motivational quotes shown under the stopwatch.

use rand::Rng;

/// A quote and who said it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub content: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// Attribution line, or `None` for anonymous quotes.
    pub fn attribution(&self) -> Option<String> {
        (!self.author.is_empty()).then(|| format!("— {}", self.author))
    }
}

/// Quotes the rotator picks from.
pub const QUOTES: [Quote; 10] = [
    Quote {
        content: "The best way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        content: "Don’t let yesterday take up too much of today.",
        author: "Will Rogers",
    },
    Quote {
        content: "It’s not whether you get knocked down, it’s whether you get up.",
        author: "Vince Lombardi",
    },
    Quote {
        content: "If you are working on something exciting, it will keep you motivated.",
        author: "Steve Jobs",
    },
    Quote {
        content: "Success is not in what you have, but who you are.",
        author: "Bo Bennett",
    },
    Quote {
        content: "The harder you work for something, the greater you’ll feel when you achieve it.",
        author: "Unknown",
    },
    Quote {
        content: "Dream bigger. Do bigger.",
        author: "Unknown",
    },
    Quote {
        content: "Don’t watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
    Quote {
        content: "Great things never come from comfort zones.",
        author: "Unknown",
    },
    Quote {
        content: "Push yourself, because no one else is going to do it for you.",
        author: "Unknown",
    },
];

/// Pick a quote uniformly at random.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    &QUOTES[rng.gen_range(0..QUOTES.len())]
}
