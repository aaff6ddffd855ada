use crate::assets::decode::SourceImage;
use crate::config::model::Configuration;
use crate::foundation::core::{Canvas, FrameState, Rgb};
use crate::palette::quantize::nearest_color;
use crate::shade::color::preprocess;
use crate::shade::dither::{BlockPos, dither_value};
use crate::shade::effects::{effective_warp, glow, vignette, warp_uv};
use crate::shade::sampler::pixelate;
use crate::shade::source::sample_source;

/// Everything one frame's pixels share: a sanitized configuration, the output canvas, the
/// frame's time and pointer, and the source image snapshot.
///
/// Built once per frame; [`FrameContext::shade_pixel`] is then a pure function of the pixel
/// position and safe to call from any number of threads.
#[derive(Clone, Debug)]
pub struct FrameContext<'a> {
    config: Configuration,
    canvas: Canvas,
    state: FrameState,
    image: Option<&'a SourceImage>,
    block: u32,
    warp: f64,
}

impl<'a> FrameContext<'a> {
    /// Prepare a frame. Out-of-range configuration values are clamped here.
    pub fn new(
        config: &Configuration,
        canvas: Canvas,
        state: FrameState,
        image: Option<&'a SourceImage>,
    ) -> Self {
        let config = config.sanitized();
        let block = config.pixel_block();
        let warp = effective_warp(&config.effects, state.pointer);
        Self {
            config,
            canvas,
            state,
            image,
            block,
            warp,
        }
    }

    /// Output canvas for this frame.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Sanitized configuration in effect for this frame.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Run the full per-pixel pipeline for output pixel `(x, y)`, row 0 at the top.
    ///
    /// Order: warp, pixelate, source, preprocess, dither, quantize, vignette, glow.
    pub fn shade_pixel(&self, x: u32, y: u32) -> Rgb {
        let cfg = &self.config;
        let uv = self.canvas.pixel_center_uv(x, y);

        let warped = warp_uv(uv, self.state.time, self.warp);
        let coord = pixelate(warped, self.block, self.canvas);

        let color = sample_source(cfg.source, self.image, coord, self.state.time, &cfg.generator);
        let color = preprocess(color, cfg.brightness, cfg.contrast, cfg.saturation);

        let pos = BlockPos::of_pixel(x, y, self.block);
        let d = dither_value(cfg.dither_method, pos, &cfg.render, color.luma());
        let color = color.offset(d * cfg.dither_amount);

        let color = nearest_color(color, cfg.palette.active_colors());

        let color = vignette(color, uv, cfg.effects.vignette);
        glow(color, cfg.effects.glow)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shade/pixel.rs"]
mod tests;
