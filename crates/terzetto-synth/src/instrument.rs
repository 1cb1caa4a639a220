//! The three-oscillator instrument and its per-note render driver.

use crate::handle::TripleOscillatorHandle;
use crate::modulation::ModulationAlgo;
use crate::params::{OscillatorSlot, NUM_OF_OSCILLATORS};
use crate::voice::{Routing, VoiceGraph};
use crate::{Error, Result};
use std::sync::Arc;
use terzetto_core::{
    validate_sample_rate, AtomicDouble, AtomicSelector, AudioHost, Instrument, NotePlayHandle,
};

/// Instrument-wide state shared between the control handle and the render
/// thread.
#[derive(Debug)]
pub struct TripleOscillatorParams {
    slots: [Arc<OscillatorSlot>; NUM_OF_OSCILLATORS],
    modulation: [AtomicSelector; NUM_OF_OSCILLATORS - 1],
    sample_rate: AtomicDouble,
}

impl TripleOscillatorParams {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            slots: std::array::from_fn(|_| Arc::new(OscillatorSlot::new(sample_rate))),
            modulation: std::array::from_fn(|_| {
                AtomicSelector::new(ModulationAlgo::default() as u8)
            }),
            sample_rate: AtomicDouble::new(sample_rate),
        }
    }

    pub fn slots(&self) -> &[Arc<OscillatorSlot>; NUM_OF_OSCILLATORS] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&Arc<OscillatorSlot>> {
        self.slots.get(index).ok_or(Error::InvalidOscillator(index))
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate.get()
    }

    /// Store a new sample rate and recompute every detuning ratio.
    pub fn set_sample_rate(&self, sample_rate: f64) -> Result<()> {
        validate_sample_rate(sample_rate)?;
        self.sample_rate.set(sample_rate);
        self.update_all_detuning();
        Ok(())
    }

    pub fn update_all_detuning(&self) {
        let sample_rate = self.sample_rate();
        for slot in &self.slots {
            slot.update_detuning_left(sample_rate);
            slot.update_detuning_right(sample_rate);
        }
    }

    fn selector(&self, selector: usize) -> Result<&AtomicSelector> {
        selector
            .checked_sub(1)
            .and_then(|i| self.modulation.get(i))
            .ok_or(Error::InvalidModulationSelector(selector))
    }

    /// Algorithm of selector 1 (oscillators 1 and 2) or 2 (oscillators 2 and 3).
    pub fn modulation_algo(&self, selector: usize) -> Result<ModulationAlgo> {
        Ok(ModulationAlgo::from_u8(self.selector(selector)?.get()))
    }

    pub fn set_modulation_algo(&self, selector: usize, algo: ModulationAlgo) -> Result<()> {
        self.selector(selector)?.set(algo as u8);
        Ok(())
    }

    /// Current routing of both selectors.
    pub fn routing(&self) -> Routing {
        std::array::from_fn(|i| ModulationAlgo::from_u8(self.modulation[i].get()))
    }
}

/// Three-oscillator subtractive-style synthesizer.
///
/// Each note gets its own [`VoiceGraph`], built on the note's first buffer
/// and kept in the note's data slot until the host tears the note down.
#[derive(Debug)]
pub struct TripleOscillator {
    params: Arc<TripleOscillatorParams>,
}

impl TripleOscillator {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            params: Arc::new(TripleOscillatorParams::new(sample_rate)),
        }
    }

    /// Control-side handle for knobs, shapes and settings.
    pub fn handle(&self) -> TripleOscillatorHandle {
        TripleOscillatorHandle::new(Arc::clone(&self.params))
    }

    pub fn params(&self) -> &Arc<TripleOscillatorParams> {
        &self.params
    }
}

impl Instrument for TripleOscillator {
    type NoteData = VoiceGraph;

    fn name(&self) -> &'static str {
        "TripleOscillator"
    }

    fn play_note<H: AudioHost>(
        &mut self,
        note: &mut NotePlayHandle<VoiceGraph>,
        host: &mut H,
    ) -> terzetto_core::Result<()> {
        if note.total_frames_played() == 0 && !note.has_plugin_data() {
            let frequency = note.frequency_cell();
            let graph = VoiceGraph::build(
                self.params.slots(),
                self.params.routing(),
                &frequency,
                note.id(),
            );
            note.set_plugin_data(graph);
            tracing::debug!(note = note.id(), "built voice graph");
        }

        let frames = host.frames_per_buffer();
        let (note, graph) = note.split_mut();
        let graph = graph.ok_or(terzetto_core::Error::NoteDataMissing(note.id()))?;

        let mut buffer = host.alloc_buffer()?;
        let frames = frames.min(buffer.len());
        graph.render(&mut buffer, frames);
        host.process_audio_buffer(&buffer[..frames], note);
        host.free_buffer(buffer);
        Ok(())
    }

    fn delete_note_plugin_data(&mut self, note: &mut NotePlayHandle<VoiceGraph>) {
        if let Some(graph) = note.take_plugin_data() {
            let released = graph.release();
            tracing::debug!(note = note.id(), "released voice graph");
            tracing::trace!(note = note.id(), released, "oscillators released");
        }
    }

    fn sample_rate_changed(&mut self, sample_rate: f64) {
        match self.params.set_sample_rate(sample_rate) {
            Ok(()) => tracing::debug!(sample_rate, "sample rate changed, detuning updated"),
            Err(e) => tracing::warn!(sample_rate, error = %e, "ignoring sample rate change"),
        }
    }
}
