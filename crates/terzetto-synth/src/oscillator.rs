//! Single-channel oscillator and modulator-chain rendering.
//!
//! An oscillator writes one channel of an interleaved stereo buffer. When it
//! has a modulator (the next element of its chain), the modulator renders
//! first into the same channel, then the oscillator combines its own
//! waveform with that output in place according to its [`ModulationAlgo`].

use crate::modulation::ModulationAlgo;
use crate::params::{Channel, OscillatorSlot};
use crate::waveform::{NoiseSource, WaveShape};
use std::sync::Arc;
use terzetto_core::{AtomicFloat, SampleBuffer, StereoFrame};

#[inline]
fn wrap_phase(phase: f32) -> f32 {
    phase - phase.floor()
}

/// One waveform stream for one channel of a voice.
///
/// Shape, routing and user waveform are fixed at construction. Volume,
/// detuning and phase offset are read from the slot once per buffer; the
/// frequency cell is read once per buffer as well, so pitch changes land on
/// buffer boundaries.
#[derive(Debug)]
pub struct Oscillator {
    shape: WaveShape,
    modulation: Option<ModulationAlgo>,
    channel: Channel,
    frequency: Arc<AtomicFloat>,
    slot: Arc<OscillatorSlot>,
    user_wave: Option<Arc<SampleBuffer>>,
    phase: f32,
    phase_offset: f32,
    noise: NoiseSource,
}

impl Oscillator {
    /// `modulation` is how this oscillator combines with its modulator;
    /// `None` for a terminal oscillator.
    pub fn new(
        slot: Arc<OscillatorSlot>,
        channel: Channel,
        frequency: Arc<AtomicFloat>,
        modulation: Option<ModulationAlgo>,
    ) -> Self {
        let phase_offset = slot.phase_offset(channel);
        Self {
            shape: slot.wave_shape(),
            modulation,
            channel,
            frequency,
            user_wave: slot.user_wave(),
            slot,
            phase: phase_offset,
            phase_offset,
            noise: NoiseSource::with_seed(1 + channel as u32),
        }
    }

    /// Reseed the white-noise generator. Only audible with [`WaveShape::WhiteNoise`].
    pub fn with_noise_seed(mut self, seed: u32) -> Self {
        self.noise = NoiseSource::with_seed(seed);
        self
    }

    pub fn shape(&self) -> WaveShape {
        self.shape
    }

    pub fn modulation(&self) -> Option<ModulationAlgo> {
        self.modulation
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current phase as a fraction of a cycle.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Render this oscillator alone, ignoring any routing.
    pub fn render(&mut self, buffer: &mut [StereoFrame], frames: usize) {
        render_chain(std::slice::from_mut(self), buffer, frames);
    }

    /// Pick up phase-offset changes and compute this buffer's phase increment.
    ///
    /// Returns `None` when the frequency is unusable; the phase stays frozen.
    fn begin_block(&mut self) -> Option<f32> {
        let offset = self.slot.phase_offset(self.channel);
        if offset != self.phase_offset {
            self.phase = wrap_phase(self.phase + offset - self.phase_offset);
            self.phase_offset = offset;
        }

        let frequency = self.frequency.get_relaxed();
        if !frequency.is_finite() || frequency <= 0.0 {
            return None;
        }
        Some(frequency * self.slot.detuning(self.channel))
    }

    #[inline]
    fn waveform(&mut self, phase: f32) -> f32 {
        match self.shape {
            WaveShape::WhiteNoise => self.noise.next_sample(),
            WaveShape::UserDefined => self
                .user_wave
                .as_ref()
                .map_or(0.0, |wave| wave.user_wave_sample(phase)),
            shape => shape.sample(phase),
        }
    }

    #[inline]
    fn advance(&mut self, increment: f32) {
        self.phase = wrap_phase(self.phase + increment);
    }

    /// Advance one sample as a sync source. True when a cycle completed.
    #[inline]
    fn sync_tick(&mut self, increment: f32) -> bool {
        self.phase += increment;
        if self.phase >= 1.0 {
            self.phase = wrap_phase(self.phase);
            true
        } else {
            false
        }
    }
}

/// Render `chain[0]` into its channel of `buffer`, with `chain[1..]` as its
/// modulator chain.
pub fn render_chain(chain: &mut [Oscillator], buffer: &mut [StereoFrame], frames: usize) {
    let Some((head, rest)) = chain.split_first_mut() else {
        return;
    };
    let frames = frames.min(buffer.len());
    let buffer = &mut buffer[..frames];
    let ch = head.channel.index();

    let Some(increment) = head.begin_block() else {
        for frame in buffer.iter_mut() {
            frame[ch] = 0.0;
        }
        return;
    };
    let volume = head.slot.volume(head.channel);

    match head.modulation.filter(|_| !rest.is_empty()) {
        None => {
            for frame in buffer.iter_mut() {
                let phase = head.phase;
                frame[ch] = head.waveform(phase) * volume;
                head.advance(increment);
            }
        }
        Some(ModulationAlgo::Sync) => {
            let sub = &mut rest[0];
            let sub_increment = sub.begin_block();
            for frame in buffer.iter_mut() {
                if let Some(sub_increment) = sub_increment {
                    if sub.sync_tick(sub_increment) {
                        head.phase = head.phase_offset;
                    }
                }
                let phase = head.phase;
                frame[ch] = head.waveform(phase) * volume;
                head.advance(increment);
            }
        }
        Some(algo) => {
            render_chain(rest, buffer, frames);
            for frame in buffer.iter_mut() {
                let modulator = frame[ch];
                let phase = head.phase;
                frame[ch] = match algo {
                    ModulationAlgo::Mix => head.waveform(phase) * volume + modulator,
                    ModulationAlgo::AmplitudeModulation => {
                        head.waveform(phase) * modulator * volume
                    }
                    ModulationAlgo::PhaseModulation => head.waveform(phase + modulator) * volume,
                    ModulationAlgo::FrequencyModulation => {
                        head.phase = wrap_phase(head.phase + modulator);
                        let phase = head.phase;
                        head.waveform(phase) * volume
                    }
                    ModulationAlgo::Sync => unreachable!("sync handled above"),
                };
                head.advance(increment);
            }
        }
    }
}
