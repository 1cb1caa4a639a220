//! Runtime pieces shared by Terzetto instruments and hosts.
//!
//! # Primary API
//!
//! - [`AudioHost`] / [`Instrument`]: the seam between a mixing engine and a
//!   note-driven instrument
//! - [`Note`] / [`NotePlayHandle`]: a playing note and its typed per-note slot
//! - [`BufferPool`]: fixed-capacity scratch buffers for the render thread
//! - [`AtomicFloat`] and friends: lock-free parameter cells
//! - [`ParameterRange`]: knob ranges and normalized automation mapping
//! - [`SampleBuffer`]: user waveforms (WAV loading behind the `"wav"` feature)

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{validate_sample_rate, EngineConfig, MAX_FRAMES_PER_BUFFER};

mod buffer_pool;
pub use buffer_pool::BufferPool;

pub mod frame;
pub use frame::{StereoBuffer, StereoFrame, DEFAULT_CHANNELS};

mod host;
pub use host::{AudioHost, Instrument};

pub(crate) mod lockfree;
pub use lockfree::{AtomicDouble, AtomicFloat, AtomicSelector};

mod note;
pub use note::{Note, NoteId, NotePlayHandle};

pub mod parameter;
pub use parameter::{ParameterRange, ParameterScale};

mod wave;
pub use wave::SampleBuffer;
