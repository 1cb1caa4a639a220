//! Error types for terzetto-core.

use crate::note::NoteId;
use thiserror::Error;

/// Error type for terzetto-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Buffer pool exhausted (capacity {capacity})")]
    BufferPoolExhausted { capacity: usize },

    #[error("Note {0} has no voice data")]
    NoteDataMissing(NoteId),

    #[error("Empty audio file: {0}")]
    EmptyAudioFile(String),

    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
