use std::sync::OnceLock;

use crate::foundation::core::Rgb;
use crate::palette::table::Palette;

/// Name of the palette used when a configuration names none.
pub const DEFAULT_PALETTE: &str = "Gameboy";

fn rgb8(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::from_rgb8(r, g, b)
}

fn build() -> Vec<Palette> {
    vec![
        Palette::new("1-bit B&W", vec![Rgb::BLACK, Rgb::WHITE]),
        Palette::new(
            "Gameboy",
            vec![
                rgb8(15, 56, 15),
                rgb8(48, 98, 48),
                rgb8(139, 172, 15),
                rgb8(155, 188, 15),
            ],
        ),
        Palette::new(
            "CGA (Mode 4 Palette 1 High)",
            vec![
                Rgb::BLACK,
                Rgb::new(1.0, 0.33, 1.0),
                Rgb::new(0.33, 1.0, 1.0),
                Rgb::WHITE,
            ],
        ),
        Palette::new(
            "Macintosh II",
            vec![
                Rgb::WHITE,
                Rgb::new(1.0, 1.0, 0.0),
                Rgb::new(1.0, 0.6, 0.0),
                Rgb::new(0.86, 0.08, 0.23),
                Rgb::new(1.0, 0.0, 1.0),
                Rgb::new(0.4, 0.0, 0.8),
                Rgb::new(0.0, 0.0, 1.0),
                Rgb::new(0.0, 0.6, 1.0),
                Rgb::new(0.0, 1.0, 0.0),
                Rgb::new(0.0, 0.6, 0.0),
                Rgb::new(0.6, 0.4, 0.2),
                Rgb::new(0.4, 0.2, 0.0),
                Rgb::new(0.8, 0.8, 0.8),
                Rgb::new(0.5, 0.5, 0.5),
                Rgb::BLACK,
            ],
        ),
        Palette::new(
            "Cyberpunk Neon",
            vec![
                Rgb::new(0.05, 0.05, 0.1),
                Rgb::new(1.0, 0.0, 0.5),
                Rgb::new(0.0, 1.0, 1.0),
                Rgb::new(0.5, 0.0, 1.0),
                Rgb::new(1.0, 0.9, 0.0),
            ],
        ),
        Palette::new("Monochrome", vec![Rgb::BLACK, Rgb::WHITE]),
    ]
}

/// All built-in palettes, in menu order.
pub fn presets() -> &'static [Palette] {
    static PRESETS: OnceLock<Vec<Palette>> = OnceLock::new();
    PRESETS.get_or_init(build)
}

/// Look up a built-in palette by name (ASCII case-insensitive).
pub fn preset(name: &str) -> Option<&'static Palette> {
    presets()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// The palette used when a configuration names none.
pub fn default_palette() -> Palette {
    preset(DEFAULT_PALETTE)
        .cloned()
        .unwrap_or_else(|| Palette::new("1-bit B&W", vec![Rgb::BLACK, Rgb::WHITE]))
}
