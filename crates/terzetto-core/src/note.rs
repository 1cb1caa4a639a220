//! Notes as seen by instruments.
//!
//! A [`Note`] carries what the host knows about a playing note: identity,
//! live frequency, how far it has been rendered, and whether it was
//! released. [`NotePlayHandle`] pairs it with a typed per-note slot owned by
//! the instrument.

use crate::lockfree::AtomicFloat;
use std::sync::Arc;

/// Host-assigned note identifier.
pub type NoteId = u64;

#[derive(Debug)]
pub struct Note {
    id: NoteId,
    frequency: Arc<AtomicFloat>,
    total_frames_played: u64,
    released_at: Option<u64>,
}

impl Note {
    pub fn new(id: NoteId, frequency: f32) -> Self {
        Self {
            id,
            frequency: Arc::new(AtomicFloat::new(frequency)),
            total_frames_played: 0,
            released_at: None,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Current frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency.get_relaxed()
    }

    /// Shared frequency cell. Writers (pitch bend) and oscillators reading it
    /// see the same value without rebuilding anything.
    pub fn frequency_cell(&self) -> Arc<AtomicFloat> {
        Arc::clone(&self.frequency)
    }

    pub fn set_frequency(&self, frequency: f32) {
        self.frequency.set(frequency);
    }

    /// Frames rendered so far. Zero until the first buffer has been played.
    #[inline]
    pub fn total_frames_played(&self) -> u64 {
        self.total_frames_played
    }

    pub fn advance(&mut self, frames: usize) {
        self.total_frames_played += frames as u64;
    }

    /// Mark the note released at the current play position. Repeated calls
    /// keep the first release point.
    pub fn release(&mut self) {
        if self.released_at.is_none() {
            self.released_at = Some(self.total_frames_played);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released_at.is_some()
    }

    /// Frame position of the note-off, if any.
    pub fn released_at(&self) -> Option<u64> {
        self.released_at
    }
}

/// A [`Note`] plus the instrument's typed per-note data.
#[derive(Debug)]
pub struct NotePlayHandle<D> {
    note: Note,
    plugin_data: Option<D>,
}

impl<D> NotePlayHandle<D> {
    pub fn new(note: Note) -> Self {
        Self {
            note,
            plugin_data: None,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn note_mut(&mut self) -> &mut Note {
        &mut self.note
    }

    pub fn plugin_data(&self) -> Option<&D> {
        self.plugin_data.as_ref()
    }

    /// Borrow the note and its data slot together.
    pub fn split_mut(&mut self) -> (&Note, Option<&mut D>) {
        (&self.note, self.plugin_data.as_mut())
    }

    pub fn has_plugin_data(&self) -> bool {
        self.plugin_data.is_some()
    }

    /// Store per-note data, returning whatever was there before.
    pub fn set_plugin_data(&mut self, data: D) -> Option<D> {
        self.plugin_data.replace(data)
    }

    /// Move the per-note data out. `None` on every call after the first.
    pub fn take_plugin_data(&mut self) -> Option<D> {
        self.plugin_data.take()
    }
}

impl<D> std::ops::Deref for NotePlayHandle<D> {
    type Target = Note;

    fn deref(&self) -> &Note {
        &self.note
    }
}
