//! Centralized error type for the terzetto umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] terzetto_core::Error),

    #[cfg(feature = "synth")]
    #[error("Synth: {0}")]
    Synth(#[from] terzetto_synth::Error),

    /// Note id not known to the engine.
    #[error("Unknown note {0}")]
    UnknownNote(terzetto_core::NoteId),
}

pub type Result<T> = std::result::Result<T, Error>;
