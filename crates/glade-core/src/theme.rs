//! Color themes for the stopwatch readout.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the stopwatch display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Moss,
    Sunflower,
    Sky,
    Bark,
    Blossom,
    Snow,
}

impl ColorTheme {
    /// All themes in cycling order.
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::Moss,
        ColorTheme::Sunflower,
        ColorTheme::Sky,
        ColorTheme::Bark,
        ColorTheme::Blossom,
        ColorTheme::Snow,
    ];

    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Moss => ColorTheme::Sunflower,
            ColorTheme::Sunflower => ColorTheme::Sky,
            ColorTheme::Sky => ColorTheme::Bark,
            ColorTheme::Bark => ColorTheme::Blossom,
            ColorTheme::Blossom => ColorTheme::Snow,
            ColorTheme::Snow => ColorTheme::Moss,
        }
    }

    /// Foreground color for the readout.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Moss => Color::Rgb(0x7e, 0xc8, 0x50),
            ColorTheme::Sunflower => Color::Rgb(0xff, 0xd6, 0x00),
            ColorTheme::Sky => Color::Rgb(0xb3, 0xe6, 0xff),
            ColorTheme::Bark => Color::Rgb(0xbc, 0xa3, 0x7f),
            ColorTheme::Blossom => Color::Rgb(0xff, 0xa8, 0xc5),
            ColorTheme::Snow => Color::Rgb(0xe6, 0xff, 0xe6),
        }
    }

    /// Lowercase theme name, as written in the config file.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Moss => "moss",
            ColorTheme::Sunflower => "sunflower",
            ColorTheme::Sky => "sky",
            ColorTheme::Bark => "bark",
            ColorTheme::Blossom => "blossom",
            ColorTheme::Snow => "snow",
        }
    }

    /// Look a theme up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }
}
