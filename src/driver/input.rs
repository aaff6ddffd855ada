use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::model::Configuration;
use crate::foundation::core::Point;

/// Latest pointer position, normalized to `[0, 1]` with `y = 0` at the bottom edge.
///
/// Writers and the frame loop never block each other: both coordinates are packed as `f32`
/// bits into one atomic word, so a reader sees one complete update. Before any update the
/// position is `(0, 0)`.
#[derive(Clone, Debug, Default)]
pub struct PointerInput {
    packed: Arc<AtomicU64>,
}

impl PointerInput {
    /// Pointer at `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a normalized position; values are clamped to `[0, 1]` and NaN becomes 0.
    pub fn set(&self, x: f64, y: f64) {
        self.packed.store(pack(x, y), Ordering::Release);
    }

    /// Publish a position given in surface pixels with a top-left origin.
    pub fn set_surface_px(&self, px: f64, py: f64, width: u32, height: u32) {
        let p = from_surface_px(px, py, width, height);
        self.set(p.x, p.y);
    }

    /// Latest published position.
    pub fn get(&self) -> Point {
        unpack(self.packed.load(Ordering::Acquire))
    }
}

/// Convert top-left-origin surface pixels to normalized bottom-origin coordinates.
pub fn from_surface_px(px: f64, py: f64, width: u32, height: u32) -> Point {
    let w = f64::from(width.max(1));
    let h = f64::from(height.max(1));
    Point::new(unit(px / w), unit(1.0 - py / h))
}

fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn pack(x: f64, y: f64) -> u64 {
    let xb = (unit(x) as f32).to_bits() as u64;
    let yb = (unit(y) as f32).to_bits() as u64;
    (xb << 32) | yb
}

fn unpack(bits: u64) -> Point {
    let x = f32::from_bits((bits >> 32) as u32);
    let y = f32::from_bits(bits as u32);
    Point::new(f64::from(x), f64::from(y))
}

/// Replace-whole configuration slot shared between the UI side and the frame loop.
///
/// The loop takes one [`ConfigHandle::snapshot`] per frame; edits never show up mid-frame.
#[derive(Clone, Debug, Default)]
pub struct ConfigHandle {
    current: Arc<RwLock<Arc<Configuration>>>,
}

impl ConfigHandle {
    /// Slot holding `config`.
    pub fn new(config: Configuration) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Install `config`; the next frame picks it up.
    pub fn replace(&self, config: Configuration) {
        warn_if_degenerate(&config);
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Arc::new(config);
    }

    /// Copy the current configuration, apply `f`, and install the result.
    pub fn update(&self, f: impl FnOnce(&mut Configuration)) {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut next = Configuration::clone(&slot);
        f(&mut next);
        warn_if_degenerate(&next);
        *slot = Arc::new(next);
    }

    /// The configuration currently installed.
    pub fn snapshot(&self) -> Arc<Configuration> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

fn warn_if_degenerate(config: &Configuration) {
    if config.palette.is_empty() {
        tracing::warn!(
            palette = %config.palette.name,
            "palette has no colors; quantization is a pass-through"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/input.rs"]
mod tests;
