//! Lock-free cells shared between the control thread and the render thread.
//!
//! Writers are control-side setters; readers are the audio thread. A torn
//! read across two cells (e.g. left and right volume) is tolerated, the value
//! settles before the next buffer.

use atomic_float::{AtomicF32, AtomicF64};
use std::sync::atomic::{AtomicU8, Ordering};

/// Cache-line aligned atomic f32.
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicFloat {
    value: AtomicF32,
}

impl AtomicFloat {
    pub fn new(value: f32) -> Self {
        Self {
            value: AtomicF32::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Acquire)
    }

    /// Render-path read. Ordering against other cells is not needed.
    #[inline]
    pub fn get_relaxed(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.value.store(value, Ordering::Release);
    }

    #[inline]
    pub fn swap(&self, value: f32) -> f32 {
        self.value.swap(value, Ordering::AcqRel)
    }
}

impl Clone for AtomicFloat {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl Default for AtomicFloat {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Atomic f64, used for the engine-wide sample rate.
#[derive(Debug)]
pub struct AtomicDouble {
    value: AtomicF64,
}

impl AtomicDouble {
    pub fn new(value: f64) -> Self {
        Self {
            value: AtomicF64::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, value: f64) {
        self.value.store(value, Ordering::Release);
    }
}

impl Default for AtomicDouble {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Atomic discriminant for small `#[repr(u8)]` selector enums
/// (wave shapes, modulation algorithms).
#[derive(Debug, Default)]
pub struct AtomicSelector {
    value: AtomicU8,
}

impl AtomicSelector {
    pub fn new(value: u8) -> Self {
        Self {
            value: AtomicU8::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, value: u8) {
        self.value.store(value, Ordering::Release);
    }
}
