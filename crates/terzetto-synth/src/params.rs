//! Per-oscillator parameter state and the derived-value update layer.
//!
//! Each oscillator slot keeps the raw knob values written by the control
//! side and the values the render side actually consumes: per-channel
//! volume (after panning), per-channel detuning ratio and per-channel phase
//! offset. Every knob write recomputes exactly the derived values that
//! depend on it. All updates are O(1), lock-free and allocation-free.

use crate::waveform::WaveShape;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use terzetto_core::{AtomicFloat, AtomicSelector, ParameterRange, SampleBuffer};

/// Oscillators per instrument.
pub const NUM_OF_OSCILLATORS: usize = 3;

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 200.0;
pub const DEFAULT_VOLUME: f32 = 100.0;

pub const PANNING_LEFT: f32 = -100.0;
pub const PANNING_RIGHT: f32 = 100.0;
pub const DEFAULT_PANNING: f32 = 0.0;

pub const NOTES_PER_OCTAVE: i32 = 12;

/// Stereo channel of an oscillator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left = 0,
    Right = 1,
}

impl Channel {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// User-facing controls of one oscillator slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    Volume,
    Panning,
    /// Semitones
    CoarseDetuning,
    /// Cents, left channel
    FineDetuningLeft,
    /// Cents, right channel
    FineDetuningRight,
    /// Degrees
    PhaseOffset,
    /// Degrees added to the left channel's phase offset
    StereoPhaseDetuning,
}

impl Knob {
    pub fn all() -> &'static [Knob] {
        &[
            Knob::Volume,
            Knob::Panning,
            Knob::CoarseDetuning,
            Knob::FineDetuningLeft,
            Knob::FineDetuningRight,
            Knob::PhaseOffset,
            Knob::StereoPhaseDetuning,
        ]
    }

    /// Valid range and initial value. Volume defaults to an equal share of
    /// full volume across the three oscillators. Only coarse detuning moves
    /// in whole steps; the rest are continuous so automation and the
    /// one-third default volume land exactly.
    pub fn range(&self) -> ParameterRange {
        match self {
            Knob::Volume => ParameterRange::linear(
                MIN_VOLUME,
                MAX_VOLUME,
                DEFAULT_VOLUME / NUM_OF_OSCILLATORS as f32,
            ),
            Knob::Panning => ParameterRange::linear(PANNING_LEFT, PANNING_RIGHT, DEFAULT_PANNING),
            Knob::CoarseDetuning => {
                ParameterRange::integer(-2 * NOTES_PER_OCTAVE, 2 * NOTES_PER_OCTAVE, 0)
            }
            Knob::FineDetuningLeft | Knob::FineDetuningRight => {
                ParameterRange::linear(-100.0, 100.0, 0.0)
            }
            Knob::PhaseOffset | Knob::StereoPhaseDetuning => {
                ParameterRange::linear(0.0, 360.0, 0.0)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Knob::Volume => "volume",
            Knob::Panning => "panning",
            Knob::CoarseDetuning => "coarse detuning",
            Knob::FineDetuningLeft => "fine detuning left",
            Knob::FineDetuningRight => "fine detuning right",
            Knob::PhaseOffset => "phase offset",
            Knob::StereoPhaseDetuning => "stereo phase detuning",
        }
    }
}

/// Linear panning law. Returns `(left, right)` gain factors in `[0, 1]`;
/// the side the signal is panned towards stays at unity.
#[inline]
pub fn panning_factors(panning: f32) -> (f32, f32) {
    if panning >= 0.0 {
        (1.0 - panning / PANNING_RIGHT, 1.0)
    } else {
        (1.0, 1.0 + panning / PANNING_RIGHT)
    }
}

/// Per-sample phase increment per Hz: `2^((coarse*100 + fine)/1200) / sample_rate`.
#[inline]
pub fn detuning_ratio(coarse: f32, fine: f32, sample_rate: f64) -> f32 {
    2.0_f32.powf((coarse * 100.0 + fine) / 1200.0) / sample_rate as f32
}

/// Degrees to a fraction of a cycle in `[0, 1)`.
#[inline]
pub fn phase_fraction(degrees: f32) -> f32 {
    (degrees / 360.0).rem_euclid(1.0)
}

/// Knob values and derived render values of one oscillator.
#[derive(Debug)]
pub struct OscillatorSlot {
    volume: AtomicFloat,
    panning: AtomicFloat,
    coarse: AtomicFloat,
    fine_left: AtomicFloat,
    fine_right: AtomicFloat,
    phase_offset: AtomicFloat,
    stereo_phase_detuning: AtomicFloat,

    volume_left: AtomicFloat,
    volume_right: AtomicFloat,
    detuning_left: AtomicFloat,
    detuning_right: AtomicFloat,
    phase_offset_left: AtomicFloat,
    phase_offset_right: AtomicFloat,

    wave_shape: AtomicSelector,
    user_wave: ArcSwapOption<SampleBuffer>,
}

impl OscillatorSlot {
    /// Slot with every knob at its default, derived values computed for
    /// `sample_rate`.
    pub fn new(sample_rate: f64) -> Self {
        let default = |knob: Knob| AtomicFloat::new(knob.range().default);
        let slot = Self {
            volume: default(Knob::Volume),
            panning: default(Knob::Panning),
            coarse: default(Knob::CoarseDetuning),
            fine_left: default(Knob::FineDetuningLeft),
            fine_right: default(Knob::FineDetuningRight),
            phase_offset: default(Knob::PhaseOffset),
            stereo_phase_detuning: default(Knob::StereoPhaseDetuning),
            volume_left: AtomicFloat::default(),
            volume_right: AtomicFloat::default(),
            detuning_left: AtomicFloat::default(),
            detuning_right: AtomicFloat::default(),
            phase_offset_left: AtomicFloat::default(),
            phase_offset_right: AtomicFloat::default(),
            wave_shape: AtomicSelector::new(WaveShape::Sine as u8),
            user_wave: ArcSwapOption::empty(),
        };
        slot.update_volume();
        slot.update_detuning_left(sample_rate);
        slot.update_detuning_right(sample_rate);
        slot.update_phase_offset_left();
        slot.update_phase_offset_right();
        slot
    }

    fn knob_cell(&self, knob: Knob) -> &AtomicFloat {
        match knob {
            Knob::Volume => &self.volume,
            Knob::Panning => &self.panning,
            Knob::CoarseDetuning => &self.coarse,
            Knob::FineDetuningLeft => &self.fine_left,
            Knob::FineDetuningRight => &self.fine_right,
            Knob::PhaseOffset => &self.phase_offset,
            Knob::StereoPhaseDetuning => &self.stereo_phase_detuning,
        }
    }

    pub fn knob(&self, knob: Knob) -> f32 {
        self.knob_cell(knob).get()
    }

    /// Store a knob value (clamped to its range) and recompute what depends on it.
    pub fn set_knob(&self, knob: Knob, value: f32, sample_rate: f64) {
        self.knob_cell(knob).set(knob.range().clamp(value));
        match knob {
            Knob::Volume | Knob::Panning => self.update_volume(),
            Knob::CoarseDetuning => {
                self.update_detuning_left(sample_rate);
                self.update_detuning_right(sample_rate);
            }
            Knob::FineDetuningLeft => self.update_detuning_left(sample_rate),
            Knob::FineDetuningRight => self.update_detuning_right(sample_rate),
            Knob::PhaseOffset => {
                self.update_phase_offset_left();
                self.update_phase_offset_right();
            }
            Knob::StereoPhaseDetuning => self.update_phase_offset_left(),
        }
    }

    pub fn update_volume(&self) {
        let volume = self.volume.get() / 100.0;
        let (left, right) = panning_factors(self.panning.get());
        self.volume_left.set(left * volume);
        self.volume_right.set(right * volume);
    }

    pub fn update_detuning_left(&self, sample_rate: f64) {
        self.detuning_left.set(detuning_ratio(
            self.coarse.get(),
            self.fine_left.get(),
            sample_rate,
        ));
    }

    pub fn update_detuning_right(&self, sample_rate: f64) {
        self.detuning_right.set(detuning_ratio(
            self.coarse.get(),
            self.fine_right.get(),
            sample_rate,
        ));
    }

    pub fn update_phase_offset_left(&self) {
        self.phase_offset_left.set(phase_fraction(
            self.phase_offset.get() + self.stereo_phase_detuning.get(),
        ));
    }

    pub fn update_phase_offset_right(&self) {
        self.phase_offset_right
            .set(phase_fraction(self.phase_offset.get()));
    }

    #[inline]
    pub fn volume(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Left => self.volume_left.get_relaxed(),
            Channel::Right => self.volume_right.get_relaxed(),
        }
    }

    #[inline]
    pub fn detuning(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Left => self.detuning_left.get_relaxed(),
            Channel::Right => self.detuning_right.get_relaxed(),
        }
    }

    #[inline]
    pub fn phase_offset(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Left => self.phase_offset_left.get_relaxed(),
            Channel::Right => self.phase_offset_right.get_relaxed(),
        }
    }

    pub fn wave_shape(&self) -> WaveShape {
        WaveShape::from_u8(self.wave_shape.get())
    }

    pub fn set_wave_shape(&self, shape: WaveShape) {
        self.wave_shape.set(shape as u8);
    }

    /// Current user waveform, if one is loaded.
    pub fn user_wave(&self) -> Option<Arc<SampleBuffer>> {
        self.user_wave.load_full()
    }

    pub fn set_user_wave(&self, wave: Option<Arc<SampleBuffer>>) {
        self.user_wave.store(wave);
    }
}
