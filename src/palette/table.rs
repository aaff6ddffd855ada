use crate::foundation::core::Rgb;
use crate::foundation::error::{DitherError, DitherResult};

/// Maximum number of palette entries the quantizer considers.
pub const MAX_PALETTE_SIZE: usize = 16;

/// Named, ordered set of colors.
///
/// Order matters: the quantizer resolves distance ties in favour of the earlier entry. Palettes
/// longer than [`MAX_PALETTE_SIZE`] are accepted but only the leading entries are used.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Display name; also the lookup key for presets.
    pub name: String,
    /// Colors in priority order, channels in `[0, 1]`.
    pub colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from colors.
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Build a palette from `#rrggbb` (or `rrggbb`) strings.
    pub fn from_hex<S: AsRef<str>>(name: impl Into<String>, hex: &[S]) -> DitherResult<Self> {
        let colors = hex
            .iter()
            .map(|s| parse_hex(s.as_ref()))
            .collect::<DitherResult<Vec<_>>>()?;
        Ok(Self::new(name, colors))
    }

    /// The entries the quantizer scans: at most [`MAX_PALETTE_SIZE`].
    pub fn active_colors(&self) -> &[Rgb] {
        &self.colors[..self.colors.len().min(MAX_PALETTE_SIZE)]
    }

    /// Whether the palette has no colors (quantization becomes a pass-through).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Copy with entries beyond [`MAX_PALETTE_SIZE`] dropped and channels clamped to `[0, 1]`.
    pub fn sanitized(&self) -> Self {
        let colors = self
            .active_colors()
            .iter()
            .map(|c| {
                c.map(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 })
            })
            .collect();
        Self {
            name: self.name.clone(),
            colors,
        }
    }
}

fn parse_hex(s: &str) -> DitherResult<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(DitherError::validation(format!(
            "palette color '{s}' must be #rrggbb"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| DitherError::validation(format!("palette color '{s}': {e}")))
    };
    Ok(Rgb::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
#[path = "../../tests/unit/palette/table.rs"]
mod tests;
