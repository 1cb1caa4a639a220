//! Fixed-capacity pool of scratch stereo buffers.
//!
//! Buffers are allocated up front. `alloc` and `free` only move them in and
//! out of a pre-sized free list, so neither touches the allocator on the
//! render thread.

use crate::frame::{clear_frames, StereoBuffer, DEFAULT_CHANNELS};
use crate::{Error, Result};

#[derive(Debug)]
pub struct BufferPool {
    free: Vec<StereoBuffer>,
    capacity: usize,
    frames: usize,
}

impl BufferPool {
    pub fn new(capacity: usize, frames: usize) -> Self {
        let mut free = Vec::with_capacity(capacity);
        free.extend((0..capacity).map(|_| vec![[0.0; DEFAULT_CHANNELS]; frames]));
        Self {
            free,
            capacity,
            frames,
        }
    }

    /// Take a zeroed buffer of `frames()` frames.
    pub fn alloc(&mut self) -> Result<StereoBuffer> {
        self.free.pop().ok_or_else(|| {
            tracing::warn!(capacity = self.capacity, "scratch buffer pool exhausted");
            Error::BufferPoolExhausted {
                capacity: self.capacity,
            }
        })
    }

    /// Return a buffer. Buffers of the wrong size, or beyond capacity, are dropped.
    pub fn free(&mut self, mut buffer: StereoBuffer) {
        if buffer.len() != self.frames || self.free.len() >= self.capacity {
            return;
        }
        clear_frames(&mut buffer);
        self.free.push(buffer);
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }
}
