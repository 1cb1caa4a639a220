//! Seams between instruments and the host engine.

use crate::frame::{StereoBuffer, StereoFrame};
use crate::note::{Note, NotePlayHandle};
use crate::Result;

/// What an instrument needs from the mixing engine while rendering a note.
pub trait AudioHost {
    fn frames_per_buffer(&self) -> usize;

    fn sample_rate(&self) -> f64;

    /// Borrow a zeroed scratch buffer of `frames_per_buffer()` frames.
    fn alloc_buffer(&mut self) -> Result<StereoBuffer>;

    fn free_buffer(&mut self, buffer: StereoBuffer);

    /// Sink for a rendered note buffer. Envelope and mixing happen here.
    fn process_audio_buffer(&mut self, buffer: &[StereoFrame], note: &Note);
}

/// A note-driven sound source.
pub trait Instrument {
    /// Per-note state kept in the note's data slot between buffers.
    type NoteData: Send;

    fn name(&self) -> &'static str;

    /// Render one host buffer for `note` and hand it to `host`.
    ///
    /// Called once per audio cycle per active note. An error drops this note
    /// only.
    fn play_note<H: AudioHost>(
        &mut self,
        note: &mut NotePlayHandle<Self::NoteData>,
        host: &mut H,
    ) -> Result<()>;

    /// Release the note's data. Must tolerate an empty slot and repeated calls.
    fn delete_note_plugin_data(&mut self, note: &mut NotePlayHandle<Self::NoteData>);

    /// Host sample rate changed.
    fn sample_rate_changed(&mut self, _sample_rate: f64) {}
}
