use std::path::Path;

use image::ImageEncoder;

use crate::foundation::core::{Canvas, Rgb};
use crate::foundation::error::{DitherError, DitherResult};

/// One rendered frame: straight RGBA8, row-major, row 0 at the top, alpha always 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 bytes.
    pub data: Vec<u8>,
}

impl OutputFrame {
    /// Opaque black frame covering `canvas`.
    pub fn blank(canvas: Canvas) -> Self {
        let mut data = vec![0u8; canvas.pixel_count() * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Frame dimensions as a canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// RGBA of pixel `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub(crate) fn write_pixel(row: &mut [u8], x: u32, color: Rgb) {
        let i = x as usize * 4;
        row[i..i + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Encode the frame as a PNG file in memory.
    pub fn encode_png(&self) -> DitherResult<Vec<u8>> {
        if self.data.len() != self.canvas().pixel_count() * 4 {
            return Err(DitherError::encode(format!(
                "frame buffer holds {} bytes, expected {} for {}x{}",
                self.data.len(),
                self.canvas().pixel_count() * 4,
                self.width,
                self.height
            )));
        }
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(
                &self.data,
                self.width,
                self.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| DitherError::encode(format!("png encode failed: {e}")))?;
        Ok(out)
    }

    /// Encode as PNG and write it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> DitherResult<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|e| {
            DitherError::encode(format!("failed to write '{}': {e}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
