use crate::foundation::error::{DitherError, DitherResult};

pub use kurbo::{Point, Vec2};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels (> 0).
    pub width: u32,
    /// Height in pixels (> 0).
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> DitherResult<Self> {
        if width == 0 || height == 0 {
            return Err(DitherError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Square canvas of `side` pixels.
    pub fn square(side: u32) -> DitherResult<Self> {
        Self::new(side, side)
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Normalized coordinate of the center of pixel `(x, y)`; row 0 is the top row.
    pub fn pixel_center_uv(self, x: u32, y: u32) -> Point {
        Point::new(
            (f64::from(x) + 0.5) / f64::from(self.width),
            (f64::from(y) + 0.5) / f64::from(self.height),
        )
    }
}

/// Linear RGB color with channels nominally in `[0, 1]`.
///
/// Intermediate pipeline values may leave the unit range (brightness, contrast and dither all
/// push channels outside it); only [`Rgb::to_rgba8`] clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::gray(0.0);
    /// White.
    pub const WHITE: Self = Self::gray(1.0);
    /// Mid gray, used whenever a source has nothing to offer.
    pub const MID_GRAY: Self = Self::gray(0.5);

    /// Construct from channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same value in every channel.
    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Construct from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Apply `f` to every channel.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Add `v` to every channel.
    pub fn offset(self, v: f64) -> Self {
        self.map(|c| c + v)
    }

    /// Multiply every channel by `v`.
    pub fn scale(self, v: f64) -> Self {
        self.map(|c| c * v)
    }

    /// `a + (b - a) * t` per channel; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
        )
    }

    /// Rec. 601 luma: `0.299 R + 0.587 G + 0.114 B`.
    pub fn luma(self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Whether all channels are finite.
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Clamp to `[0, 1]` and convert to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f64) -> u8 {
            if c.is_nan() {
                return 0;
            }
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

/// Live, per-frame inputs that are not part of the configuration.
///
/// Read-only for every pipeline stage; the frame driver builds a fresh value per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Seconds since the pipeline started.
    pub time: f64,
    /// Last observed pointer position, normalized to `[0, 1]` with `y = 0` at the bottom edge.
    pub pointer: Point,
}

impl FrameState {
    /// Frame state at `time` with the pointer at the origin.
    pub fn at(time: f64) -> Self {
        Self {
            time,
            pointer: Point::ORIGIN,
        }
    }

    /// Same frame state with the pointer moved.
    pub fn with_pointer(self, x: f64, y: f64) -> Self {
        Self {
            pointer: Point::new(x, y),
            ..self
        }
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::at(0.0)
    }
}
