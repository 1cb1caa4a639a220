//! Tolerance constants for audio testing.

/// Floating point rounding errors (unity gain, exact phase steps).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Oscillator output compared against an analytic formula.
/// Covers f32 phase accumulation drift over a few thousand samples.
pub const DSP_EPSILON: f32 = 1e-4;

/// Audio perceptual tolerance (~-60dB, inaudible differences).
pub const PERCEPTUAL_EPSILON: f32 = 0.001;

/// Silence threshold (~-80dB).
pub const SILENCE_THRESHOLD: f32 = 0.0001;
