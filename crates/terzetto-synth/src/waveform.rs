//! Oscillator waveform shapes.
//!
//! Every deterministic shape is a pure function of phase in `[0, 1)` with
//! output in `[-1, 1]`. White noise and user waveforms need per-oscillator
//! state and are produced by the oscillator itself.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WaveShape {
    #[default]
    Sine = 0,
    Triangle = 1,
    Saw = 2,
    Square = 3,
    MoogSaw = 4,
    Exponential = 5,
    WhiteNoise = 6,
    UserDefined = 7,
}

impl WaveShape {
    /// Decode a stored discriminant; unknown values fall back to [`WaveShape::Sine`].
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => WaveShape::Triangle,
            2 => WaveShape::Saw,
            3 => WaveShape::Square,
            4 => WaveShape::MoogSaw,
            5 => WaveShape::Exponential,
            6 => WaveShape::WhiteNoise,
            7 => WaveShape::UserDefined,
            _ => WaveShape::Sine,
        }
    }

    /// Value at `phase` (any real; only the fractional part matters).
    ///
    /// Stateful shapes ([`WaveShape::WhiteNoise`], [`WaveShape::UserDefined`])
    /// return 0.0 here.
    #[inline]
    pub fn sample(&self, phase: f32) -> f32 {
        let ph = phase.rem_euclid(1.0);
        match self {
            WaveShape::Sine => sine_sample(ph),
            WaveShape::Triangle => triangle_sample(ph),
            WaveShape::Saw => saw_sample(ph),
            WaveShape::Square => square_sample(ph),
            WaveShape::MoogSaw => moog_saw_sample(ph),
            WaveShape::Exponential => exp_sample(ph),
            WaveShape::WhiteNoise | WaveShape::UserDefined => 0.0,
        }
    }

    pub fn is_deterministic(&self) -> bool {
        !matches!(self, WaveShape::WhiteNoise | WaveShape::UserDefined)
    }

    pub fn all() -> &'static [WaveShape] {
        &[
            WaveShape::Sine,
            WaveShape::Triangle,
            WaveShape::Saw,
            WaveShape::Square,
            WaveShape::MoogSaw,
            WaveShape::Exponential,
            WaveShape::WhiteNoise,
            WaveShape::UserDefined,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WaveShape::Sine => "Sine",
            WaveShape::Triangle => "Triangle",
            WaveShape::Saw => "Saw",
            WaveShape::Square => "Square",
            WaveShape::MoogSaw => "Moog Saw",
            WaveShape::Exponential => "Exponential",
            WaveShape::WhiteNoise => "White Noise",
            WaveShape::UserDefined => "User Defined",
        }
    }
}

#[inline]
pub fn sine_sample(ph: f32) -> f32 {
    (ph * TAU).sin()
}

/// Starts at 0, peaks at 0.25, troughs at 0.75.
#[inline]
pub fn triangle_sample(ph: f32) -> f32 {
    if ph <= 0.25 {
        ph * 4.0
    } else if ph <= 0.75 {
        2.0 - ph * 4.0
    } else {
        ph * 4.0 - 4.0
    }
}

#[inline]
pub fn saw_sample(ph: f32) -> f32 {
    -1.0 + ph * 2.0
}

#[inline]
pub fn square_sample(ph: f32) -> f32 {
    if ph < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Steep rise over the first half, slow fall over the second.
#[inline]
pub fn moog_saw_sample(ph: f32) -> f32 {
    if ph < 0.5 {
        -1.0 + ph * 4.0
    } else {
        1.0 - 2.0 * ph
    }
}

/// Symmetric quadratic ramp: -1 at phase 0, +1 at phase 0.5.
#[inline]
pub fn exp_sample(ph: f32) -> f32 {
    let ph = if ph > 0.5 { 1.0 - ph } else { ph };
    -1.0 + 8.0 * ph * ph
}

/// Xorshift white-noise source (no allocations).
#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: u32,
}

impl NoiseSource {
    /// A zero seed is replaced by 1; xorshift would stay at zero forever.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Uniform sample in `[-1, 1]`.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        1.0 - 2.0 * (self.state as f32 / u32::MAX as f32)
    }
}
