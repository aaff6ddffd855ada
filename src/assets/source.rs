use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::assets::decode::{SourceImage, decode_image};
use crate::foundation::error::DitherResult;

/// Observable state of the image slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    /// Nothing submitted (or cleared).
    Empty,
    /// A decode is in flight; any previous image stays current until it finishes.
    Decoding,
    /// The current image.
    Ready {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// The latest decode failed. The previous image, if any, is kept.
    Failed(String),
}

#[derive(Debug)]
struct Slot {
    current: Option<Arc<SourceImage>>,
    status: ImageStatus,
    generation: u64,
}

#[derive(Debug)]
struct Shared {
    slot: Mutex<Slot>,
    changed: Condvar,
}

/// Shared handle to the decoded source image.
///
/// Uploads decode off-thread; the frame driver reads [`ImageSource::current`] once per frame, so
/// a finished decode replaces the old image between frames, never during one. Newer submissions
/// supersede older in-flight decodes.
#[derive(Clone, Debug)]
pub struct ImageSource {
    shared: Arc<Shared>,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource {
    /// Create an empty image slot.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    current: None,
                    status: ImageStatus::Empty,
                    generation: 0,
                }),
                changed: Condvar::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.shared
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Decode `bytes` on a background thread. Returns immediately.
    pub fn submit(&self, bytes: Vec<u8>) {
        let generation = self.begin_decode();
        let this = self.clone();
        let spawned = std::thread::Builder::new()
            .name("dithershade-decode".to_string())
            .spawn(move || {
                let result = decode_image(&bytes).map_err(|e| e.to_string());
                this.finish_decode(generation, result);
            });
        if let Err(e) = spawned {
            self.finish_decode(generation, Err(format!("spawn decode thread: {e}")));
        }
    }

    /// Decode `bytes` on the calling thread and install the result.
    pub fn load_blocking(&self, bytes: &[u8]) -> DitherResult<()> {
        let generation = self.begin_decode();
        match decode_image(bytes) {
            Ok(image) => {
                self.finish_decode(generation, Ok(image));
                Ok(())
            }
            Err(e) => {
                self.finish_decode(generation, Err(e.to_string()));
                Err(e)
            }
        }
    }

    /// Install an already decoded image.
    pub fn set(&self, image: SourceImage) {
        let generation = self.begin_decode();
        self.finish_decode(generation, Ok(image));
    }

    /// Drop the current image and forget any in-flight decode.
    pub fn clear(&self) {
        let mut slot = self.lock();
        slot.generation = slot.generation.wrapping_add(1);
        slot.current = None;
        slot.status = ImageStatus::Empty;
        drop(slot);
        self.shared.changed.notify_all();
    }

    /// Snapshot of the current image, if any.
    pub fn current(&self) -> Option<Arc<SourceImage>> {
        self.lock().current.clone()
    }

    /// Current status.
    pub fn status(&self) -> ImageStatus {
        self.lock().status.clone()
    }

    /// Block until no decode is in flight or `timeout` elapses; returns the status at that point.
    pub fn wait_settled(&self, timeout: Duration) -> ImageStatus {
        let deadline = Instant::now() + timeout;
        let mut slot = self.lock();
        while slot.status == ImageStatus::Decoding {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            slot = match self.shared.changed.wait_timeout(slot, deadline - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
        slot.status.clone()
    }

    fn begin_decode(&self) -> u64 {
        let mut slot = self.lock();
        slot.generation = slot.generation.wrapping_add(1);
        slot.status = ImageStatus::Decoding;
        slot.generation
    }

    fn finish_decode(&self, generation: u64, result: Result<SourceImage, String>) {
        let mut slot = self.lock();
        if slot.generation != generation {
            tracing::debug!(generation, "discarding superseded image decode");
            return;
        }
        match result {
            Ok(image) => {
                tracing::info!(width = image.width, height = image.height, "source image ready");
                slot.status = ImageStatus::Ready {
                    width: image.width,
                    height: image.height,
                };
                slot.current = Some(Arc::new(image));
            }
            Err(e) => {
                tracing::warn!(error = %e, "source image decode failed");
                slot.status = ImageStatus::Failed(e);
            }
        }
        drop(slot);
        self.shared.changed.notify_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
