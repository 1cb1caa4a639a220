//! Engine configuration.

use crate::{Error, Result};

/// Largest host buffer the engine accepts.
pub const MAX_FRAMES_PER_BUFFER: usize = 8192;

/// Configuration for the host side of the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub sample_rate: f64,
    /// Frames rendered per audio callback.
    pub frames_per_buffer: usize,
    /// Scratch buffers allocated up front; the pool never grows on the render thread.
    pub buffer_pool_size: usize,
    /// Length of the linear fade applied after note-off.
    pub release_frames: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            frames_per_buffer: 256,
            buffer_pool_size: 4,
            release_frames: 64,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate)?;
        if self.frames_per_buffer == 0 || self.frames_per_buffer > MAX_FRAMES_PER_BUFFER {
            return Err(Error::InvalidConfig(format!(
                "frames_per_buffer {} out of range (1-{})",
                self.frames_per_buffer, MAX_FRAMES_PER_BUFFER
            )));
        }
        if self.buffer_pool_size == 0 {
            return Err(Error::InvalidConfig(
                "buffer_pool_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

pub fn validate_sample_rate(sample_rate: f64) -> Result<()> {
    if !(8000.0..=384000.0).contains(&sample_rate) {
        return Err(Error::InvalidConfig(format!(
            "sample_rate {} out of range (8000-384000 Hz)",
            sample_rate
        )));
    }
    Ok(())
}
