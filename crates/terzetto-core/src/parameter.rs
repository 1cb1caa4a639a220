//! Knob ranges for instrument parameters.
//!
//! Control sources deliver either real values (a knob set to `-12`
//! semitones) or normalized automation values in 0.0-1.0. A
//! [`ParameterRange`] clamps the former and maps the latter.
//!
//! # Example
//!
//! ```
//! use terzetto_core::{ParameterRange, ParameterScale};
//!
//! let pan = ParameterRange::linear(-100.0, 100.0, 0.0);
//! assert_eq!(pan.denormalize(0.5), 0.0);
//! assert_eq!(pan.clamp(250.0), 100.0);
//!
//! let coarse = ParameterRange::integer(-24, 24, 0);
//! assert_eq!(coarse.scale, ParameterScale::Integer);
//! assert_eq!(coarse.denormalize(0.51), 0.0);
//! ```

/// How a parameter value is mapped between normalized (0-1) and real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterScale {
    /// `real = min + normalized * (max - min)`
    #[default]
    Linear,

    /// Linear, then rounded to the nearest integer.
    Integer,
}

/// Valid range, default and scaling of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub scale: ParameterScale,
}

impl ParameterRange {
    /// `default` is clamped into `min..=max`.
    pub fn new(min: f32, max: f32, default: f32, scale: ParameterScale) -> Self {
        debug_assert!(max > min, "max must be greater than min");

        Self {
            min,
            max,
            default: default.clamp(min, max),
            scale,
        }
    }

    pub fn linear(min: f32, max: f32, default: f32) -> Self {
        Self::new(min, max, default, ParameterScale::Linear)
    }

    pub fn integer(min: i32, max: i32, default: i32) -> Self {
        Self::new(
            min as f32,
            max as f32,
            default as f32,
            ParameterScale::Integer,
        )
    }

    /// Clamp (and for integer ranges, round) a real value into range.
    /// NaN maps to the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let value = value.clamp(self.min, self.max);
        match self.scale {
            ParameterScale::Linear => value,
            ParameterScale::Integer => value.round(),
        }
    }

    /// Convert a real value to normalized (0.0-1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / span
    }

    /// Convert a normalized value (0.0-1.0) to a real value.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let normalized = if normalized.is_nan() {
            self.normalize(self.default)
        } else {
            normalized.clamp(0.0, 1.0)
        };
        self.clamp(self.min + normalized * self.span())
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

impl Default for ParameterRange {
    fn default() -> Self {
        Self::linear(0.0, 1.0, 0.5)
    }
}
