use std::path::{Path, PathBuf};

use crate::foundation::core::Canvas;
use crate::foundation::error::{DitherError, DitherResult};
use crate::render::frame::OutputFrame;

/// Display target for the frame driver.
///
/// Later frames may differ in size from the `init` canvas when the source image changes.
pub trait Surface: Send {
    /// Called once before the first frame, with the canvas the driver expects to render.
    fn init(&mut self, canvas: Canvas) -> DitherResult<()>;
    /// Show one finished frame.
    fn present(&mut self, frame: &OutputFrame) -> DitherResult<()>;
    /// Called once on teardown.
    fn end(&mut self) -> DitherResult<()>;
}

/// Surface that keeps presented frames in memory.
///
/// [`InMemorySurface::new`] retains every frame, which grows without bound under a live loop;
/// use [`InMemorySurface::keep_last`] there.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    canvas: Option<Canvas>,
    frames: Vec<OutputFrame>,
    keep_last: Option<usize>,
    presented: u64,
    ended: bool,
}

impl InMemorySurface {
    /// Surface retaining every presented frame. Meant for scripted runs with a known tick count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain only the newest `n` frames (at least one).
    pub fn keep_last(n: usize) -> Self {
        Self {
            keep_last: Some(n.max(1)),
            ..Self::default()
        }
    }

    /// Canvas passed to `init`, if it has been called.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> &[OutputFrame] {
        &self.frames
    }

    /// Total frames presented, including any no longer retained.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl Surface for InMemorySurface {
    fn init(&mut self, canvas: Canvas) -> DitherResult<()> {
        self.canvas = Some(canvas);
        self.frames.clear();
        self.presented = 0;
        self.ended = false;
        Ok(())
    }

    fn present(&mut self, frame: &OutputFrame) -> DitherResult<()> {
        if let Some(n) = self.keep_last
            && self.frames.len() >= n
        {
            let excess = self.frames.len() + 1 - n;
            self.frames.drain(..excess);
        }
        self.frames.push(frame.clone());
        self.presented += 1;
        Ok(())
    }

    fn end(&mut self) -> DitherResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Surface writing every `every`-th presented frame to `dir/frame_NNNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSurface {
    dir: PathBuf,
    every: u64,
    presented: u64,
    written: u64,
}

impl PngSequenceSurface {
    /// Surface writing into `dir`; `every` of 0 is treated as 1.
    pub fn new(dir: impl Into<PathBuf>, every: u32) -> Self {
        Self {
            dir: dir.into(),
            every: u64::from(every.max(1)),
            presented: 0,
            written: 0,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of PNG files written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    fn frame_path(&self, n: u64) -> PathBuf {
        self.dir.join(format!("frame_{n:05}.png"))
    }
}

impl Surface for PngSequenceSurface {
    fn init(&mut self, canvas: Canvas) -> DitherResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DitherError::init(format!(
                "failed to create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        tracing::info!(
            dir = %self.dir.display(),
            width = canvas.width,
            height = canvas.height,
            every = self.every,
            "png sequence surface ready"
        );
        self.presented = 0;
        self.written = 0;
        Ok(())
    }

    fn present(&mut self, frame: &OutputFrame) -> DitherResult<()> {
        let n = self.presented;
        self.presented += 1;
        if n % self.every != 0 {
            return Ok(());
        }
        frame.save_png(self.frame_path(self.written))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> DitherResult<()> {
        tracing::info!(written = self.written, presented = self.presented, "png sequence finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/surface.rs"]
mod tests;
