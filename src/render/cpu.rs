use rayon::prelude::*;

use crate::assets::decode::SourceImage;
use crate::config::model::{Configuration, SourceKind};
use crate::foundation::core::{Canvas, FrameState};
use crate::foundation::error::{DitherError, DitherResult};
use crate::render::frame::OutputFrame;
use crate::shade::pixel::FrameContext;

/// How a [`Renderer`] spreads a frame's rows across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Shade rows in parallel on a rayon pool.
    pub parallel: bool,
    /// Worker count for the dedicated pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Frame renderer. Holds the optional thread pool so it is built once, not per frame.
pub struct Renderer {
    threading: RenderThreading,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("threading", &self.threading)
            .field("pool_threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}

impl Renderer {
    /// Renderer for `threading`; builds the rayon pool when `parallel` is set.
    pub fn new(threading: RenderThreading) -> DitherResult<Self> {
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };
        Ok(Self { threading, pool })
    }

    /// Single-threaded renderer; never fails.
    pub fn sequential() -> Self {
        Self {
            threading: RenderThreading::default(),
            pool: None,
        }
    }

    /// Threading options in effect.
    pub fn threading(&self) -> &RenderThreading {
        &self.threading
    }

    /// Render one frame. Output is identical whether or not a pool is in use.
    #[tracing::instrument(
        skip(self, config, image),
        fields(width = canvas.width, height = canvas.height, parallel = self.pool.is_some())
    )]
    pub fn render(
        &self,
        config: &Configuration,
        canvas: Canvas,
        state: FrameState,
        image: Option<&SourceImage>,
    ) -> OutputFrame {
        let mut frame = OutputFrame::blank(canvas);
        let stride = frame.stride();
        if stride == 0 || canvas.height == 0 {
            return frame;
        }
        let ctx = FrameContext::new(config, canvas, state, image);
        match &self.pool {
            Some(pool) => pool.install(|| {
                frame
                    .data
                    .par_chunks_mut(stride)
                    .enumerate()
                    .for_each(|(y, row)| shade_row(&ctx, y as u32, row));
            }),
            None => {
                for (y, row) in frame.data.chunks_mut(stride).enumerate() {
                    shade_row(&ctx, y as u32, row);
                }
            }
        }
        frame
    }
}

/// Pure single-frame render on the calling thread.
pub fn render_frame(
    config: &Configuration,
    state: FrameState,
    image: Option<&SourceImage>,
    canvas: Canvas,
) -> OutputFrame {
    Renderer::sequential().render(config, canvas, state, image)
}

/// Output size for a frame: the image's own size when the image branch has an image,
/// otherwise a `generator_side` square.
pub fn output_canvas(
    config: &Configuration,
    image: Option<&SourceImage>,
    generator_side: u32,
) -> DitherResult<Canvas> {
    match (config.source, image) {
        (SourceKind::Image, Some(img)) => Canvas::new(img.width, img.height),
        _ => Canvas::square(generator_side),
    }
}

fn shade_row(ctx: &FrameContext<'_>, y: u32, row: &mut [u8]) {
    for x in 0..ctx.canvas().width {
        OutputFrame::write_pixel(row, x, ctx.shade_pixel(x, y));
    }
}

fn build_thread_pool(threads: Option<usize>) -> DitherResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DitherError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("dithershade-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DitherError::init(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
