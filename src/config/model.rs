use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{DitherError, DitherResult};
use crate::palette::presets::{default_palette, preset};
use crate::palette::table::Palette;

/// Largest accepted pixel block edge, in output pixels.
pub const MAX_PIXEL_SCALE: i64 = 512;
/// Largest accepted fBm octave count for the noise generator.
pub const MAX_NOISE_OCTAVES: u32 = 8;

/// Where per-pixel colors come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// The decoded user image (mid gray until one is available).
    #[default]
    Image,
    /// A procedural pattern.
    Generator,
}

/// Which perturbation is added before palette quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DitherMethod {
    /// 4x4 Bayer threshold matrix.
    #[default]
    Ordered,
    /// Position-hashed white noise, stable over time.
    Random,
    /// Diagonal sine lines.
    Lines,
    /// Diagonal dot screen whose dots grow with luma.
    Halftone,
}

/// Procedural pattern used when [`SourceKind::Generator`] is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Rings around the center, twisted by `direction`.
    #[default]
    Spiral,
    /// Drifting simplex fBm with a lower cutoff.
    Noise,
    /// Drifting checker cells.
    Grid,
}

/// Line-based dither parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Line frequency for the Lines and Halftone methods.
    pub lines: f64,
    /// Line weight in `[0, 1]`; widens halftone dots.
    pub weight: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lines: 50.0,
            weight: 0.5,
        }
    }
}

/// Procedural source parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Pattern kind.
    #[serde(alias = "type")]
    pub kind: GeneratorKind,
    /// Animation speed multiplier on elapsed time.
    pub speed: f64,
    /// Spiral angular frequency (UI labels it in degrees, but it multiplies the angle in radians).
    pub direction: f64,
    /// Spatial frequency.
    pub scale: f64,
    /// Noise fBm octave count.
    pub octaves: u32,
    /// Noise cutoff: raw values below `threshold - 1` are zeroed.
    pub threshold: f64,
    /// Domain warp applied to the generator's own coordinate.
    pub warp: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::Spiral,
            speed: 1.0,
            direction: 0.0,
            scale: 10.0,
            octaves: 4,
            threshold: 0.5,
            warp: 0.0,
        }
    }
}

/// Post effects and pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Radial darkening in `[0, 1]`; 0 disables.
    pub vignette: f64,
    /// Flat bright-area boost in `[0, 2]`; 0 disables.
    pub glow: f64,
    /// Sampling coordinate distortion in `[0, 5]`; 0 disables.
    pub warp: f64,
    /// Pointer influence on warp, `0` (off) or `1` (on).
    #[serde(alias = "mouse_influence")]
    pub mouse: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            vignette: 0.2,
            glow: 0.0,
            warp: 0.0,
            mouse: 0.0,
        }
    }
}

/// Complete per-frame configuration, supplied by whatever UI drives the renderer.
///
/// Values are taken as-is from the outside world; [`Configuration::sanitized`] is what the
/// pipeline actually consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Color source.
    #[serde(alias = "sourceType")]
    pub source: SourceKind,
    /// Pixel block edge in output pixels (clamped to `1..=512`).
    #[serde(alias = "pixelScale")]
    pub pixel_scale: i64,
    /// Dither pattern.
    #[serde(alias = "ditherMethod")]
    pub dither_method: DitherMethod,
    /// Dither strength in `[0, 1]`.
    #[serde(alias = "ditherAmount")]
    pub dither_amount: f64,
    /// Line dither parameters.
    pub render: RenderConfig,
    /// Quantization palette; JSON accepts a preset name or an inline palette.
    #[serde(deserialize_with = "deserialize_palette")]
    pub palette: Palette,
    /// Additive brightness in `[-0.5, 0.5]`.
    pub brightness: f64,
    /// Contrast around mid gray in `[0, 2]`.
    pub contrast: f64,
    /// Saturation in `[0, 2]`; 0 is grayscale.
    pub saturation: f64,
    /// Procedural source parameters.
    pub generator: GeneratorConfig,
    /// Post effects.
    pub effects: EffectsConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            source: SourceKind::Image,
            pixel_scale: 6,
            dither_method: DitherMethod::Ordered,
            dither_amount: 0.5,
            render: RenderConfig::default(),
            palette: default_palette(),
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            generator: GeneratorConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PaletteRef {
    Named(String),
    Inline(Palette),
}

fn deserialize_palette<'de, D>(de: D) -> Result<Palette, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    match PaletteRef::deserialize(de)? {
        PaletteRef::Inline(p) => Ok(p),
        PaletteRef::Named(name) => preset(&name)
            .cloned()
            .ok_or_else(|| serde::de::Error::custom(format!("unknown palette preset '{name}'"))),
    }
}

fn finite_or(v: f64, default: f64) -> f64 {
    if v.is_finite() { v } else { default }
}

fn clamp_or(v: f64, lo: f64, hi: f64, default: f64) -> f64 {
    finite_or(v, default).clamp(lo, hi)
}

impl Configuration {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DitherResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DitherError::validation(format!("parse configuration JSON: {e}")))
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> DitherResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| DitherError::validation(format!("parse configuration JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DitherResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DitherError::validation(format!("open configuration JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> DitherResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DitherError::validation(format!("serialize configuration: {e}")))
    }

    /// Pixel block edge the pipeline uses; never zero.
    pub fn pixel_block(&self) -> u32 {
        self.pixel_scale.clamp(1, MAX_PIXEL_SCALE) as u32
    }

    /// Copy with every field clamped to the range the per-pixel math expects.
    ///
    /// Non-finite numbers fall back to the field's default.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let g = &self.generator;
        let e = &self.effects;
        Self {
            source: self.source,
            pixel_scale: i64::from(self.pixel_block()),
            dither_method: self.dither_method,
            dither_amount: clamp_or(self.dither_amount, 0.0, 1.0, d.dither_amount),
            render: RenderConfig {
                lines: finite_or(self.render.lines, d.render.lines).max(0.0),
                weight: clamp_or(self.render.weight, 0.0, 1.0, d.render.weight),
            },
            palette: self.palette.sanitized(),
            brightness: clamp_or(self.brightness, -0.5, 0.5, d.brightness),
            contrast: clamp_or(self.contrast, 0.0, 2.0, d.contrast),
            saturation: clamp_or(self.saturation, 0.0, 2.0, d.saturation),
            generator: GeneratorConfig {
                kind: g.kind,
                speed: finite_or(g.speed, d.generator.speed),
                direction: finite_or(g.direction, d.generator.direction),
                scale: finite_or(g.scale, d.generator.scale),
                octaves: g.octaves.clamp(1, MAX_NOISE_OCTAVES),
                threshold: finite_or(g.threshold, d.generator.threshold),
                warp: clamp_or(g.warp, 0.0, 5.0, d.generator.warp),
            },
            effects: EffectsConfig {
                vignette: clamp_or(e.vignette, 0.0, 1.0, d.effects.vignette),
                glow: clamp_or(e.glow, 0.0, 2.0, d.effects.glow),
                warp: clamp_or(e.warp, 0.0, 5.0, d.effects.warp),
                mouse: clamp_or(e.mouse, 0.0, 1.0, d.effects.mouse),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
