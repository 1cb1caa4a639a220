//! Offline host that drives an instrument buffer by buffer.

use crate::{Error, Result};
use std::sync::Arc;
use terzetto_core::frame::clear_frames;
use terzetto_core::{
    validate_sample_rate, AtomicFloat, AudioHost, BufferPool, EngineConfig, Instrument, Note,
    NoteId, NotePlayHandle, StereoBuffer, StereoFrame,
};

#[cfg(feature = "synth")]
use terzetto_synth::{TripleOscillator, TripleOscillatorHandle};

/// The [`AudioHost`] side of the engine: scratch pool, master bus and the
/// post-release fade.
#[derive(Debug)]
pub struct Mixer {
    pool: BufferPool,
    sample_rate: f64,
    release_frames: u64,
    master: StereoBuffer,
}

impl Mixer {
    fn new(config: &EngineConfig) -> Self {
        Self {
            pool: BufferPool::new(config.buffer_pool_size, config.frames_per_buffer),
            sample_rate: config.sample_rate,
            release_frames: config.release_frames as u64,
            master: vec![[0.0; 2]; config.frames_per_buffer],
        }
    }

    /// Linear fade gain for frame `position` of a note released at `released_at`.
    #[inline]
    fn release_gain(release_frames: u64, released_at: Option<u64>, position: u64) -> f32 {
        match released_at {
            None => 1.0,
            Some(at) => {
                let elapsed = position.saturating_sub(at);
                if elapsed >= release_frames {
                    0.0
                } else {
                    1.0 - elapsed as f32 / release_frames as f32
                }
            }
        }
    }

    pub fn master(&self) -> &[StereoFrame] {
        &self.master
    }

    pub fn available_buffers(&self) -> usize {
        self.pool.available()
    }
}

impl AudioHost for Mixer {
    fn frames_per_buffer(&self) -> usize {
        self.pool.frames()
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn alloc_buffer(&mut self) -> terzetto_core::Result<StereoBuffer> {
        self.pool.alloc()
    }

    fn free_buffer(&mut self, buffer: StereoBuffer) {
        self.pool.free(buffer);
    }

    fn process_audio_buffer(&mut self, buffer: &[StereoFrame], note: &Note) {
        let start = note.total_frames_played();
        let released_at = note.released_at();
        let release_frames = self.release_frames;
        for (k, (out, frame)) in self.master.iter_mut().zip(buffer).enumerate() {
            let gain = Self::release_gain(release_frames, released_at, start + k as u64);
            out[0] += frame[0] * gain;
            out[1] += frame[1] * gain;
        }
    }
}

/// Polyphonic offline engine around one instrument.
///
/// Notes are rendered in the order they were started. A note whose render
/// fails is torn down and removed; the others keep playing.
pub struct TerzettoEngine<I: Instrument> {
    instrument: I,
    mixer: Mixer,
    notes: Vec<NotePlayHandle<I::NoteData>>,
    next_note_id: NoteId,
    config: EngineConfig,
}

impl<I: Instrument> TerzettoEngine<I> {
    pub(crate) fn new(config: EngineConfig, mut instrument: I) -> Result<Self> {
        config.validate()?;
        instrument.sample_rate_changed(config.sample_rate);
        tracing::debug!(
            instrument = instrument.name(),
            sample_rate = config.sample_rate,
            frames_per_buffer = config.frames_per_buffer,
            "engine created"
        );
        Ok(Self {
            mixer: Mixer::new(&config),
            instrument,
            notes: Vec::new(),
            next_note_id: 1,
            config,
        })
    }

    pub fn sample_rate(&self) -> f64 {
        self.mixer.sample_rate
    }

    pub fn frames_per_buffer(&self) -> usize {
        self.mixer.frames_per_buffer()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn instrument(&self) -> &I {
        &self.instrument
    }

    pub fn instrument_mut(&mut self) -> &mut I {
        &mut self.instrument
    }

    /// Start a note. It renders from the next [`render_buffer`](Self::render_buffer).
    pub fn note_on(&mut self, frequency: f32) -> NoteId {
        let id = self.next_note_id;
        self.next_note_id += 1;
        self.notes.push(NotePlayHandle::new(Note::new(id, frequency)));
        id
    }

    /// Release a note. Notes that never rendered are torn down at once;
    /// others fade out over `release_frames`.
    pub fn note_off(&mut self, id: NoteId) -> Result<()> {
        let index = self.note_index(id)?;
        if self.notes[index].total_frames_played() == 0 {
            let mut note = self.notes.remove(index);
            self.instrument.delete_note_plugin_data(&mut note);
            tracing::debug!(note = id, "note released before first buffer");
        } else {
            self.notes[index].note_mut().release();
        }
        Ok(())
    }

    /// Pitch bend: the running voice picks the new frequency up on its next buffer.
    pub fn set_note_frequency(&self, id: NoteId, frequency: f32) -> Result<()> {
        self.notes[self.note_index(id)?].set_frequency(frequency);
        Ok(())
    }

    pub fn note_frequency_cell(&self, id: NoteId) -> Option<Arc<AtomicFloat>> {
        self.note_index(id)
            .ok()
            .map(|index| self.notes[index].frequency_cell())
    }

    pub fn is_active(&self, id: NoteId) -> bool {
        self.note_index(id).is_ok()
    }

    pub fn active_notes(&self) -> usize {
        self.notes.len()
    }

    pub fn available_buffers(&self) -> usize {
        self.mixer.available_buffers()
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<()> {
        validate_sample_rate(sample_rate)?;
        self.mixer.sample_rate = sample_rate;
        self.config.sample_rate = sample_rate;
        self.instrument.sample_rate_changed(sample_rate);
        Ok(())
    }

    /// Render one buffer of every active note into the master bus.
    pub fn render_buffer(&mut self) -> &[StereoFrame] {
        let frames = self.mixer.frames_per_buffer();
        clear_frames(&mut self.mixer.master);

        let instrument = &mut self.instrument;
        let mixer = &mut self.mixer;
        self.notes.retain_mut(|note| {
            if let Err(e) = instrument.play_note(note, &mut *mixer) {
                tracing::warn!(note = note.id(), error = %e, "dropping note");
                instrument.delete_note_plugin_data(note);
                return false;
            }
            note.note_mut().advance(frames);

            let faded = note
                .released_at()
                .is_some_and(|at| note.total_frames_played() >= at + mixer.release_frames);
            if faded {
                instrument.delete_note_plugin_data(note);
            }
            !faded
        });

        &self.mixer.master
    }

    /// Render `buffers` consecutive buffers into one contiguous block.
    pub fn render(&mut self, buffers: usize) -> StereoBuffer {
        let mut out = Vec::with_capacity(buffers * self.frames_per_buffer());
        for _ in 0..buffers {
            out.extend_from_slice(self.render_buffer());
        }
        out
    }

    fn note_index(&self, id: NoteId) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| note.id() == id)
            .ok_or(Error::UnknownNote(id))
    }
}

#[cfg(feature = "synth")]
impl TerzettoEngine<TripleOscillator> {
    /// Create a new engine builder
    pub fn builder() -> crate::TerzettoEngineBuilder {
        crate::TerzettoEngineBuilder::default()
    }

    /// Control handle of the engine's synth.
    pub fn handle(&self) -> TripleOscillatorHandle {
        self.instrument.handle()
    }
}

impl<I: Instrument> Drop for TerzettoEngine<I> {
    fn drop(&mut self) {
        for note in &mut self.notes {
            self.instrument.delete_note_plugin_data(note);
        }
    }
}
