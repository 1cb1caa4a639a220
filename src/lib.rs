//! # Terzetto - Three-Oscillator Synthesizer Engine
//!
//! ## Architecture
//!
//! Terzetto is an umbrella crate that coordinates:
//! - **terzetto-core** - Host/instrument seam (notes, buffer pool, lock-free cells, WAV loading)
//! - **terzetto-synth** - The three-oscillator instrument (waveforms, modulation chains, voice graphs)
//!
//! On top of those it provides [`TerzettoEngine`], a small offline host that
//! owns the active notes, renders them buffer by buffer and mixes the result.
//!
//! ## Quick Start
//!
//! ```
//! use terzetto::prelude::*;
//!
//! let mut engine = TerzettoEngine::builder().sample_rate(44100.0).build()?;
//!
//! let synth = engine.handle();
//! synth.set_wave_shape(0, WaveShape::Saw)?;
//! synth.set_modulation_algo(1, ModulationAlgo::FrequencyModulation)?;
//!
//! let note = engine.note_on(220.0);
//! let audio = engine.render(4);
//! engine.note_off(note)?;
//! # assert_eq!(audio.len(), 4 * 256);
//! # Ok::<(), terzetto::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `synth` and `wav`
//! - `synth` - The three-oscillator instrument
//! - `wav` - Load user waveforms from WAV files

/// Re-export of terzetto-core for direct access
pub use terzetto_core as core;

pub use terzetto_core::{
    AtomicDouble, AtomicFloat, AtomicSelector, AudioHost, BufferPool, EngineConfig, Instrument,
    Note, NoteId, NotePlayHandle, ParameterRange, SampleBuffer, StereoBuffer, StereoFrame,
};

// Synth subsystem
#[cfg(feature = "synth")]
pub use terzetto_synth as synth;

#[cfg(feature = "synth")]
pub use terzetto_synth::{
    Knob, ModulationAlgo, TripleOscillator, TripleOscillatorHandle, TripleOscillatorSettings,
    VoiceGraph, WaveShape,
};

mod error;
pub use error::{Error, Result};

mod builder;
mod engine;

pub use builder::TerzettoEngineBuilder;
pub use engine::{Mixer, TerzettoEngine};

/// Convenience prelude for common imports
pub mod prelude {
    // Main engine
    pub use crate::{TerzettoEngine, TerzettoEngineBuilder};

    // Host seam
    pub use crate::core::{AudioHost, Instrument, NoteId, StereoFrame};

    // Synth
    #[cfg(feature = "synth")]
    pub use crate::synth::{
        Knob, ModulationAlgo, TripleOscillator, TripleOscillatorHandle, TripleOscillatorSettings,
        WaveShape,
    };
}
