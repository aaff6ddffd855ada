use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use crate::assets::decode::SourceImage;
use crate::assets::source::ImageSource;
use crate::config::model::{Configuration, SourceKind};
use crate::driver::clock::Ticker;
use crate::driver::input::{ConfigHandle, PointerInput};
use crate::driver::surface::Surface;
use crate::foundation::core::{Canvas, FrameState};
use crate::foundation::error::{DitherError, DitherResult};
use crate::render::cpu::{RenderThreading, Renderer, output_canvas};
use crate::render::frame::OutputFrame;

/// Lifecycle of a [`FrameDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed; no surface or renderer yet.
    Uninitialized,
    /// Initialized, no frame rendered yet.
    Ready,
    /// At least one frame rendered.
    Rendering,
    /// Torn down; no further frames.
    Stopped,
}

/// Options for [`FrameDriver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverOpts {
    /// Side of the square canvas used when no source image sets the size.
    pub generator_resolution: u32,
    /// Row parallelism for the renderer.
    pub threading: RenderThreading,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            generator_resolution: 800,
            threading: RenderThreading::default(),
        }
    }
}

/// Counters reported by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriverStats {
    /// Frames rendered and presented so far.
    pub frames_rendered: u64,
    /// Elapsed time of the last rendered frame.
    pub last_time: Option<f64>,
    /// Canvas of the last rendered frame.
    pub last_canvas: Option<Canvas>,
}

/// Read side of the most recently presented frame.
#[derive(Clone, Debug, Default)]
pub struct SnapshotHandle {
    latest: Arc<Mutex<Option<Arc<OutputFrame>>>>,
}

impl SnapshotHandle {
    /// The last presented frame, if any.
    pub fn latest(&self) -> Option<Arc<OutputFrame>> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// PNG bytes of the last presented frame. The lock is released before encoding, so the
    /// loop keeps running.
    pub fn export_png(&self) -> DitherResult<Vec<u8>> {
        let frame = self
            .latest()
            .ok_or_else(|| DitherError::validation("no frame has been presented yet"))?;
        frame.encode_png()
    }

    /// Write [`SnapshotHandle::export_png`] output to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> DitherResult<()> {
        let path = path.as_ref();
        let bytes = self.export_png()?;
        std::fs::write(path, bytes).map_err(|e| {
            DitherError::encode(format!("failed to write '{}': {e}", path.display()))
        })
    }

    fn publish(&self, frame: Arc<OutputFrame>) {
        *self
            .latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(frame);
    }
}

/// Handles the outside world uses to steer a driver. All are cheap clones of shared slots.
#[derive(Clone, Debug, Default)]
pub struct DriverHandles {
    /// Configuration slot read once per frame.
    pub config: ConfigHandle,
    /// Latest pointer position.
    pub pointer: PointerInput,
    /// Source image slot.
    pub image: ImageSource,
    /// Last presented frame.
    pub snapshot: SnapshotHandle,
}

impl DriverHandles {
    /// Handles around `config` with an origin pointer, no image and no snapshot.
    pub fn new(config: Configuration) -> Self {
        Self {
            config: ConfigHandle::new(config),
            ..Self::default()
        }
    }
}

/// Runs the per-frame pipeline against a [`Surface`].
///
/// `Uninitialized -> Ready` on [`FrameDriver::initialize`], `Ready -> Rendering` on the first
/// tick, and `Stopped` only on [`FrameDriver::stop`]. Each tick reads the configuration, image
/// and pointer exactly once.
#[derive(Debug)]
pub struct FrameDriver<S: Surface> {
    state: DriverState,
    opts: DriverOpts,
    surface: S,
    renderer: Option<Renderer>,
    handles: DriverHandles,
    stats: DriverStats,
    last_source: Option<SourceKind>,
}

impl<S: Surface> FrameDriver<S> {
    /// Uninitialized driver with fresh handles around `config`.
    pub fn new(surface: S, config: Configuration, opts: DriverOpts) -> Self {
        Self::with_handles(surface, DriverHandles::new(config), opts)
    }

    /// Uninitialized driver sharing existing handles.
    pub fn with_handles(surface: S, handles: DriverHandles, opts: DriverOpts) -> Self {
        Self {
            state: DriverState::Uninitialized,
            opts,
            surface,
            renderer: None,
            handles,
            stats: DriverStats::default(),
            last_source: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Handles for steering the driver from other threads.
    pub fn handles(&self) -> &DriverHandles {
        &self.handles
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the driver and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Build the renderer and initialize the surface. Every error from here is fatal
    /// ([`DitherError::is_fatal`]); a failed driver stays `Uninitialized`.
    #[tracing::instrument(skip(self), fields(resolution = self.opts.generator_resolution))]
    pub fn initialize(&mut self) -> DitherResult<()> {
        if self.state != DriverState::Uninitialized {
            return Err(DitherError::validation(format!(
                "initialize called in state {:?}",
                self.state
            )));
        }
        let renderer = Renderer::new(self.opts.threading.clone()).map_err(as_init)?;
        let config = self.handles.config.snapshot();
        if config.palette.is_empty() {
            tracing::warn!(palette = %config.palette.name, "starting with an empty palette");
        }
        let image = self.adopt_image(&config);
        let canvas = output_canvas(&config, image.as_deref(), self.opts.generator_resolution)
            .map_err(as_init)?;
        self.surface.init(canvas).map_err(as_init)?;
        self.renderer = Some(renderer);
        self.state = DriverState::Ready;
        tracing::info!(width = canvas.width, height = canvas.height, "frame driver ready");
        Ok(())
    }

    /// Render and present one frame at elapsed `time` seconds.
    pub fn tick(&mut self, time: f64) -> DitherResult<Arc<OutputFrame>> {
        let live = matches!(self.state, DriverState::Ready | DriverState::Rendering);
        if !live || self.renderer.is_none() {
            return Err(DitherError::validation(format!(
                "cannot render a frame in state {:?}",
                self.state
            )));
        }
        if self.state == DriverState::Ready {
            self.state = DriverState::Rendering;
            tracing::info!("frame driver rendering");
        }

        let started = Instant::now();
        let config = self.handles.config.snapshot();
        let image = self.adopt_image(&config);
        let state = FrameState {
            time,
            pointer: self.handles.pointer.get(),
        };
        let canvas = output_canvas(&config, image.as_deref(), self.opts.generator_resolution)?;
        let renderer = self
            .renderer
            .as_ref()
            .ok_or_else(|| DitherError::validation("renderer not initialized"))?;
        let frame = Arc::new(renderer.render(&config, canvas, state, image.as_deref()));
        self.surface.present(&frame)?;
        self.handles.snapshot.publish(frame.clone());

        self.stats.frames_rendered += 1;
        self.stats.last_time = Some(time);
        self.stats.last_canvas = Some(canvas);
        tracing::debug!(
            frame = self.stats.frames_rendered,
            time,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "frame presented"
        );
        Ok(frame)
    }

    /// Tick until `ticker` runs out or `stop` is raised. The flag is checked before and after
    /// each wait, never inside a frame.
    pub fn run(&mut self, ticker: &mut dyn Ticker, stop: &AtomicBool) -> DitherResult<()> {
        while !stop.load(Ordering::Acquire) {
            let Some(time) = ticker.wait_tick() else {
                break;
            };
            if stop.load(Ordering::Acquire) {
                break;
            }
            self.tick(time)?;
        }
        Ok(())
    }

    /// Tear down: end the surface and move to `Stopped`. Stopping twice is a no-op.
    pub fn stop(&mut self) -> DitherResult<DriverStats> {
        if self.state == DriverState::Stopped {
            return Ok(self.stats);
        }
        let was_initialized = self.state != DriverState::Uninitialized;
        self.state = DriverState::Stopped;
        self.renderer = None;
        if was_initialized {
            self.surface.end()?;
        }
        tracing::info!(frames = self.stats.frames_rendered, "frame driver stopped");
        Ok(self.stats)
    }

    /// The image for this frame. Switching from Image to Generator releases the held image;
    /// uploads made while Generator is selected are kept for a later switch back.
    fn adopt_image(&mut self, config: &Configuration) -> Option<Arc<SourceImage>> {
        let previous = self.last_source.replace(config.source);
        match config.source {
            SourceKind::Image => self.handles.image.current(),
            SourceKind::Generator => {
                if previous == Some(SourceKind::Image) {
                    tracing::debug!("releasing source image for generator source");
                    self.handles.image.clear();
                }
                None
            }
        }
    }
}

impl<S: Surface + 'static> FrameDriver<S> {
    /// Initialize if needed, then drive `ticker` on a dedicated thread.
    pub fn spawn<T: Ticker + 'static>(mut self, ticker: T) -> DitherResult<RunningDriver<S>> {
        if self.state == DriverState::Uninitialized {
            self.initialize()?;
        }
        let stop = Arc::new(AtomicBool::new(false));
        let handles = self.handles.clone();
        let flag = stop.clone();
        let join = std::thread::Builder::new()
            .name("dithershade-driver".to_string())
            .spawn(move || {
                let mut ticker = ticker;
                let run = self.run(&mut ticker, &flag);
                let end = self.stop().map(|_| ());
                let result = run.and(end);
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "frame driver loop ended with an error");
                }
                (self, result)
            })
            .map_err(|e| DitherError::init(format!("failed to spawn driver thread: {e}")))?;
        Ok(RunningDriver {
            stop,
            join,
            handles,
        })
    }
}

/// A driver running on its own thread.
#[derive(Debug)]
pub struct RunningDriver<S: Surface> {
    stop: Arc<AtomicBool>,
    join: JoinHandle<(FrameDriver<S>, DitherResult<()>)>,
    handles: DriverHandles,
}

impl<S: Surface> RunningDriver<S> {
    /// Handles for steering the driver from other threads.
    pub fn handles(&self) -> &DriverHandles {
        &self.handles
    }

    /// True once the loop has exited on its own (ticker exhausted or frame error).
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Raise the stop flag and join the render thread. No frame is evaluated after this
    /// returns. Returns the stopped driver so its surface and stats can be inspected.
    pub fn stop(self) -> DitherResult<FrameDriver<S>> {
        self.stop.store(true, Ordering::Release);
        let (driver, result) = self
            .join
            .join()
            .map_err(|_| DitherError::Other(anyhow::anyhow!("frame driver thread panicked")))?;
        result?;
        Ok(driver)
    }
}

fn as_init(e: DitherError) -> DitherError {
    match e {
        DitherError::Init(_) => e,
        other => DitherError::init(other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame_driver.rs"]
mod tests;
