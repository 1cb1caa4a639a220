//! Per-note voice graph: one three-oscillator chain per stereo channel.

use crate::modulation::ModulationAlgo;
use crate::oscillator::{render_chain, Oscillator};
use crate::params::{Channel, OscillatorSlot, NUM_OF_OSCILLATORS};
use std::sync::Arc;
use terzetto_core::{AtomicFloat, NoteId, StereoFrame};

/// Routing selectors: `routing[0]` combines oscillators 1 and 2,
/// `routing[1]` combines oscillators 2 and 3.
pub type Routing = [ModulationAlgo; NUM_OF_OSCILLATORS - 1];

/// Noise seed for one oscillator of one voice. Distinct for every
/// (note, oscillator, channel) triple, so simultaneous voices decorrelate and
/// a note renders the same noise every time it is replayed.
fn noise_seed(note: NoteId, oscillator: usize, channel: Channel) -> u32 {
    let lane = ((oscillator as u64) << 1) | channel.index() as u64;
    let key = note.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (lane + 1).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    (key ^ (key >> 32)) as u32
}

/// Fixed-size oscillator chain for one channel. Element `i` is modulated by
/// element `i + 1`; the last element is terminal.
#[derive(Debug)]
pub struct OscillatorChain {
    oscillators: [Oscillator; NUM_OF_OSCILLATORS],
}

impl OscillatorChain {
    /// Build the chain innermost first: terminal, middle, head.
    pub fn build(
        slots: &[Arc<OscillatorSlot>; NUM_OF_OSCILLATORS],
        routing: Routing,
        channel: Channel,
        frequency: &Arc<AtomicFloat>,
        note: NoteId,
    ) -> Self {
        let terminal = Oscillator::new(Arc::clone(&slots[2]), channel, Arc::clone(frequency), None)
            .with_noise_seed(noise_seed(note, 2, channel));
        let middle = Oscillator::new(
            Arc::clone(&slots[1]),
            channel,
            Arc::clone(frequency),
            Some(routing[1]),
        )
        .with_noise_seed(noise_seed(note, 1, channel));
        let head = Oscillator::new(
            Arc::clone(&slots[0]),
            channel,
            Arc::clone(frequency),
            Some(routing[0]),
        )
        .with_noise_seed(noise_seed(note, 0, channel));
        Self {
            oscillators: [head, middle, terminal],
        }
    }

    #[inline]
    pub fn render(&mut self, buffer: &mut [StereoFrame], frames: usize) {
        render_chain(&mut self.oscillators, buffer, frames);
    }

    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }
}

/// Everything a note needs to render: a left and a right chain.
#[derive(Debug)]
pub struct VoiceGraph {
    left: OscillatorChain,
    right: OscillatorChain,
}

impl VoiceGraph {
    pub fn build(
        slots: &[Arc<OscillatorSlot>; NUM_OF_OSCILLATORS],
        routing: Routing,
        frequency: &Arc<AtomicFloat>,
        note: NoteId,
    ) -> Self {
        Self {
            left: OscillatorChain::build(slots, routing, Channel::Left, frequency, note),
            right: OscillatorChain::build(slots, routing, Channel::Right, frequency, note),
        }
    }

    /// Render both chains into their channels.
    #[inline]
    pub fn render(&mut self, buffer: &mut [StereoFrame], frames: usize) {
        self.left.render(buffer, frames);
        self.right.render(buffer, frames);
    }

    pub fn left(&self) -> &OscillatorChain {
        &self.left
    }

    pub fn right(&self) -> &OscillatorChain {
        &self.right
    }

    /// Drop both chains, returning how many oscillators were released.
    pub fn release(self) -> usize {
        let Self { left, right } = self;
        let released = left.len() + right.len();
        drop(left);
        drop(right);
        released
    }
}
