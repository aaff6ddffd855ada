use std::sync::Arc;

use crate::foundation::core::{Point, Rgb};
use crate::foundation::error::{DitherError, DitherResult};

/// Decoded source raster, straight (non-premultiplied) RGBA8, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 bytes.
    pub rgba8: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap raw RGBA8 bytes, checking the length against the dimensions.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> DitherResult<Self> {
        if width == 0 || height == 0 {
            return Err(DitherError::decode("image dimensions must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| DitherError::decode("image buffer size overflow"))?;
        if rgba8.len() != expected {
            return Err(DitherError::decode(format!(
                "expected {expected} RGBA8 bytes for {width}x{height}, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Nearest-neighbor lookup with clamp-to-edge addressing. Alpha is ignored.
    pub fn sample_nearest(&self, uv: Point) -> Rgb {
        let x = texel_index(uv.x, self.width);
        let y = texel_index(uv.y, self.height);
        let idx = (y * self.width as usize + x) * 4;
        let px = &self.rgba8[idx..idx + 3];
        Rgb::from_rgb8(px[0], px[1], px[2])
    }
}

fn texel_index(t: f64, len: u32) -> usize {
    let max = len.saturating_sub(1) as usize;
    if !t.is_finite() {
        return if t > 0.0 { max } else { 0 };
    }
    let i = (t * f64::from(len)).floor();
    if i <= 0.0 { 0 } else { (i as usize).min(max) }
}

/// Decode PNG/JPEG/WEBP (or any format `image` was built with) into a [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> DitherResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| DitherError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
