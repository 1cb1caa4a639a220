//! Builder for configuring and constructing a `TerzettoEngine`.

use crate::{Result, TerzettoEngine};
use terzetto_core::{EngineConfig, Instrument};

#[cfg(feature = "synth")]
use terzetto_synth::TripleOscillator;

/// Configures the offline host. Every setting is validated on `build()`.
///
/// # Example
///
/// ```
/// use terzetto::prelude::*;
///
/// let mut engine = TerzettoEngine::builder()
///     .sample_rate(48000.0)
///     .frames_per_buffer(128)
///     .build()?;
///
/// let note = engine.note_on(440.0);
/// let buffer = engine.render_buffer();
/// assert_eq!(buffer.len(), 128);
/// engine.note_off(note)?;
/// # Ok::<(), terzetto::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerzettoEngineBuilder {
    config: EngineConfig,
}

impl TerzettoEngineBuilder {
    /// Default: 44100 Hz
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Default: 256
    pub fn frames_per_buffer(mut self, frames: usize) -> Self {
        self.config.frames_per_buffer = frames;
        self
    }

    /// Scratch buffers in the pool. Each note borrows one only while it
    /// renders, so a single buffer serves any number of notes. Must be at
    /// least 1. Default: 4
    pub fn buffer_pool_size(mut self, size: usize) -> Self {
        self.config.buffer_pool_size = size;
        self
    }

    /// Fade length after note-off. Default: 64
    pub fn release_frames(mut self, frames: usize) -> Self {
        self.config.release_frames = frames;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build with a fresh [`TripleOscillator`].
    #[cfg(feature = "synth")]
    pub fn build(self) -> Result<TerzettoEngine<TripleOscillator>> {
        let instrument = TripleOscillator::new(self.config.sample_rate);
        self.build_with(instrument)
    }

    /// Build around any instrument.
    pub fn build_with<I: Instrument>(self, instrument: I) -> Result<TerzettoEngine<I>> {
        TerzettoEngine::new(self.config, instrument)
    }
}
