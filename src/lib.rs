//! dithershade renders retro-styled frames on the CPU: pixelation, ordered/random/line/halftone
//! dithering and nearest-color palette quantization over either a decoded image or a procedural
//! pattern, with vignette, glow and noise warp on top.
//!
//! The core is a pure function of configuration, frame state and source image:
//!
//! - Load a [`Configuration`] (JSON or built in code)
//! - Call [`render_frame`] (or a [`Renderer`] with a rayon pool) for one [`OutputFrame`]
//! - Or hand a [`Surface`] to a [`FrameDriver`] and tick it from a [`Ticker`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod driver;
mod foundation;
mod palette;
mod render;
mod shade;

pub use crate::foundation::core::{Canvas, FrameState, Point, Rgb, Vec2};
pub use crate::foundation::error::{DitherError, DitherResult};

pub use crate::assets::decode::{SourceImage, decode_image};
pub use crate::assets::source::{ImageSource, ImageStatus};
pub use crate::config::model::{
    Configuration, DitherMethod, EffectsConfig, GeneratorConfig, GeneratorKind, MAX_NOISE_OCTAVES,
    MAX_PIXEL_SCALE, RenderConfig, SourceKind,
};
pub use crate::driver::clock::{IntervalTicker, ManualTicker, Ticker};
pub use crate::driver::frame_driver::{
    DriverHandles, DriverOpts, DriverState, DriverStats, FrameDriver, RunningDriver,
    SnapshotHandle,
};
pub use crate::driver::input::{ConfigHandle, PointerInput, from_surface_px};
pub use crate::driver::surface::{InMemorySurface, PngSequenceSurface, Surface};
pub use crate::palette::presets::{DEFAULT_PALETTE, default_palette, preset, presets};
pub use crate::palette::quantize::nearest_color;
pub use crate::palette::table::{MAX_PALETTE_SIZE, Palette};
pub use crate::render::cpu::{RenderThreading, Renderer, output_canvas, render_frame};
pub use crate::render::frame::OutputFrame;
pub use crate::shade::dither::{BAYER_4X4, BlockPos, dither_value};
pub use crate::shade::generators::generate;
pub use crate::shade::pixel::FrameContext;
pub use crate::shade::sampler::pixelate;
pub use crate::shade::source::IMAGE_FALLBACK;
