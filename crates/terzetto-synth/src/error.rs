//! Error types for terzetto-synth.

use thiserror::Error;

/// Result type alias for terzetto-synth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in terzetto-synth.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] terzetto_core::Error),

    /// Oscillator slot index outside `0..NUM_OF_OSCILLATORS`.
    #[error("Invalid oscillator index {0}")]
    InvalidOscillator(usize),

    /// Modulation selectors are numbered 1 and 2.
    #[error("Invalid modulation selector {0}")]
    InvalidModulationSelector(usize),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
