//! Palettes and color helpers for the park.

use ratatui::style::Color;

/// Build an RGB color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Leaf colors.
pub const FOLIAGE_PALETTE: [Color; 4] = [
    rgb(0x7ec850),
    rgb(0xb6e388),
    rgb(0xaee9c5),
    rgb(0xe6ffe6),
];

/// Insect colors.
pub const FLYER_PALETTE: [Color; 4] = [
    rgb(0xffd600),
    rgb(0xffb347),
    rgb(0xffecb3),
    rgb(0xb3e6ff),
];

/// Mouse fur.
pub const GROUNDER_BODY: Color = rgb(0xbca37f);

/// Mouse tail.
pub const GROUNDER_TAIL: Color = rgb(0xd8b48a);

/// Insect wings.
pub const WING: Color = rgb(0xffffff);

/// Ripple around an entity pushed away by the cursor.
pub const RIPPLE: Color = rgb(0xb3e6ff);

/// Glow around an entity following the cursor.
pub const FOLLOW_GLOW: Color = rgb(0xffd600);

/// Core of a close-range glow.
pub const VIVID_CORE: Color = rgb(0xfffbe6);

/// Dark green night sky behind the park.
pub const BACKDROP: Color = rgb(0x101a14);

/// Mix `color` over `background` with the given opacity.
///
/// Terminals have no translucency, so alpha is flattened against the
/// backdrop. Non-RGB colors are returned unchanged.
pub fn blend(color: Color, alpha: f32, background: Color) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, background) else {
        return color;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * alpha).round() as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
