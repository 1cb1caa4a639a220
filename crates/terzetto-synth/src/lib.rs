//! Three-oscillator synthesizer for Terzetto.
//!
//! - **[`TripleOscillator`]** - the instrument; implements [`terzetto_core::Instrument`]
//! - **[`TripleOscillatorHandle`]** - control-side knobs, shapes, routing and settings
//! - **[`VoiceGraph`]** - per-note pair of oscillator chains, built on the first buffer
//! - **[`Oscillator`]** - single-channel waveform stream with modulator chaining
//! - **[`WaveShape`]** / **[`ModulationAlgo`]** - the eight shapes and five routings
//!
//! # Quick Start
//!
//! ```
//! use terzetto_synth::{ModulationAlgo, TripleOscillator, WaveShape};
//!
//! let synth = TripleOscillator::new(44100.0);
//! let handle = synth.handle();
//! handle.set_wave_shape(0, WaveShape::Square)?;
//! handle.set_volume(0, 80.0)?;
//! handle.set_modulation_algo(1, ModulationAlgo::AmplitudeModulation)?;
//! # Ok::<(), terzetto_synth::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `wav` | Load user waveforms from WAV files (default) |

pub mod error;
pub use error::{Error, Result};

mod waveform;

pub use waveform::{
    exp_sample, moog_saw_sample, saw_sample, sine_sample, square_sample, triangle_sample,
    NoiseSource, WaveShape,
};

mod modulation;

pub use modulation::ModulationAlgo;

mod params;

pub use params::{
    detuning_ratio, panning_factors, phase_fraction, Channel, Knob, OscillatorSlot,
    DEFAULT_PANNING, DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME, NUM_OF_OSCILLATORS, PANNING_LEFT,
    PANNING_RIGHT,
};

mod oscillator;

pub use oscillator::{render_chain, Oscillator};

mod voice;

pub use voice::{OscillatorChain, Routing, VoiceGraph};

mod instrument;

pub use instrument::{TripleOscillator, TripleOscillatorParams};

mod handle;

pub use handle::{TripleOscillatorHandle, SAMPLE_FILE_PARAMETER};

mod settings;

pub use settings::{OscillatorSettings, TripleOscillatorSettings};
