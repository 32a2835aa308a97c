//! Block fonts for the glade stopwatch readout.

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Block digits (5 lines tall, 5 chars wide).
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

/// Colon separator (5 lines tall, 1 char wide).
pub const COLON: [&str; GLYPH_HEIGHT] = [" ", "█", " ", "█", " "];

/// Placeholder for characters the font does not cover.
const BLANK: [&str; GLYPH_HEIGHT] = ["     "; GLYPH_HEIGHT];

fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        ':' => &COLON,
        _ => &BLANK,
    }
}

/// Format elapsed seconds as `MM:SS`.
///
/// Minutes are zero-padded to two digits and keep growing past 99.
pub fn format_elapsed(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render `text` in the block font, one string per row.
///
/// Glyphs are separated by a single space column.
pub fn build_art(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|ch| glyph(ch)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Big `MM:SS` readout for the stopwatch.
pub fn build_stopwatch_art(total_seconds: u64) -> Vec<String> {
    build_art(&format_elapsed(total_seconds))
}

/// Display width in terminal columns of the art for `text`.
pub fn art_width(text: &str) -> usize {
    build_art(text)
        .first()
        .map(|row| row.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(125), "02:05");
        assert_eq!(format_elapsed(100 * 60 + 7), "100:07");
    }

    #[test]
    fn test_build_art_has_fixed_height() {
        let art = build_stopwatch_art(3599);
        assert_eq!(art.len(), GLYPH_HEIGHT);
        let width = art[0].chars().count();
        assert!(art.iter().all(|row| row.chars().count() == width));
    }

    #[test]
    fn test_art_width() {
        // Four digits, one colon and four separating spaces.
        assert_eq!(art_width("12:34"), 4 * 5 + 1 + 4);
    }

    #[test]
    fn test_colon_column() {
        let art = build_art(":");
        assert_eq!(art, vec![" ", "█", " ", "█", " "]);
    }

    #[test]
    fn test_unknown_characters_render_blank() {
        let art = build_art("x");
        assert!(art.iter().all(|row| row.trim().is_empty()));
    }
}
