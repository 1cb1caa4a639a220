//! Test helpers and fixtures for Terzetto integration tests
//!
//! The engine is an offline host, so every test drives rendering buffer by
//! buffer and inspects the master output directly.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (unity gain, exact phase steps)
//! - `DSP_EPSILON` (1e-4): Oscillator output against analytic formulas
//! - `PERCEPTUAL_EPSILON` (0.001): Perceptual equivalence (-60dB)
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use std::path::{Path, PathBuf};
use terzetto::prelude::*;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: f64 = 44100.0;

/// Standard buffer size for deterministic testing
pub const TEST_BUFFER_SIZE: usize = 256;

/// A sample rate where a 512 Hz oscillator advances exactly 1/64 of a cycle per frame.
pub const EXACT_SAMPLE_RATE: f64 = 32768.0;
pub const EXACT_FREQUENCY: f32 = 512.0;
pub const EXACT_CYCLE: usize = 64;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Engine with the default test configuration.
pub fn test_engine() -> TerzettoEngine<TripleOscillator> {
    test_engine_with_sr(TEST_SAMPLE_RATE)
}

/// Engine with a specific sample rate.
pub fn test_engine_with_sr(sample_rate: f64) -> TerzettoEngine<TripleOscillator> {
    init_tracing();
    TerzettoEngine::builder()
        .sample_rate(sample_rate)
        .frames_per_buffer(TEST_BUFFER_SIZE)
        .build()
        .expect("Failed to create test engine")
}

/// Engine where only oscillator 1 sounds, at full volume, with `shape`.
pub fn solo_engine(
    sample_rate: f64,
    frames_per_buffer: usize,
    shape: WaveShape,
) -> TerzettoEngine<TripleOscillator> {
    init_tracing();
    let engine = TerzettoEngine::builder()
        .sample_rate(sample_rate)
        .frames_per_buffer(frames_per_buffer)
        .build()
        .expect("Failed to create test engine");
    let synth = engine.handle();
    synth.set_volume(0, 100.0).unwrap();
    synth.set_volume(1, 0.0).unwrap();
    synth.set_volume(2, 0.0).unwrap();
    synth.set_wave_shape(0, shape).unwrap();
    engine
}

/// Left channel of an interleaved stereo block.
pub fn left(frames: &[StereoFrame]) -> Vec<f32> {
    frames.iter().map(|f| f[0]).collect()
}

/// Right channel of an interleaved stereo block.
pub fn right(frames: &[StereoFrame]) -> Vec<f32> {
    frames.iter().map(|f| f[1]).collect()
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Count sign changes from negative to non-negative.
pub fn rising_zero_crossings(samples: &[f32]) -> usize {
    samples.windows(2).filter(|w| w[0] < 0.0 && w[1] >= 0.0).count()
}

// =============================================================================
// Audio Comparison Utilities
// =============================================================================

/// Result of comparing two audio buffers.
#[derive(Debug, Clone)]
pub struct AudioComparisonResult {
    pub equal: bool,
    pub max_diff: f32,
    pub first_diff_sample: Option<usize>,
    pub num_diffs: usize,
}

/// Compare two audio buffers with epsilon tolerance.
pub fn compare_audio(a: &[f32], b: &[f32], epsilon: f32) -> AudioComparisonResult {
    if a.len() != b.len() {
        return AudioComparisonResult {
            equal: false,
            max_diff: f32::MAX,
            first_diff_sample: Some(0),
            num_diffs: a.len().max(b.len()),
        };
    }

    let mut max_diff: f32 = 0.0;
    let mut first_diff = None;
    let mut num_diffs = 0;
    for (i, (&x, &y)) in a.iter().zip(b).enumerate() {
        let diff = (x - y).abs();
        max_diff = max_diff.max(diff);
        if diff > epsilon {
            num_diffs += 1;
            first_diff.get_or_insert(i);
        }
    }

    AudioComparisonResult {
        equal: num_diffs == 0,
        max_diff,
        first_diff_sample: first_diff,
        num_diffs,
    }
}

/// Assert two signals are equal within tolerance, with detailed error message.
pub fn assert_signals_equal(a: &[f32], b: &[f32], epsilon: f32, context: &str) {
    let result = compare_audio(a, b, epsilon);
    assert!(
        result.equal,
        "{}: Signals differ - first diff at sample {:?}, max_diff={:.6}, num_diffs={}",
        context, result.first_diff_sample, result.max_diff, result.num_diffs
    );
}

/// Assert signal is silent within threshold.
pub fn assert_is_silent(samples: &[f32], threshold: f32, context: &str) {
    let max_val = peak(samples);
    assert!(
        max_val <= threshold,
        "{}: Expected silence (threshold {}), but peak was {}",
        context,
        threshold,
        max_val
    );
}

/// Assert signal is NOT silent (has content above threshold).
pub fn assert_not_silent(samples: &[f32], min_peak: f32, context: &str) {
    let max_val = peak(samples);
    assert!(
        max_val >= min_peak,
        "{}: Expected audio (min_peak {}), but peak was only {}",
        context,
        min_peak,
        max_val
    );
}

// =============================================================================
// WAV fixtures
// =============================================================================

/// Write a mono 32-bit float WAV into `dir`.
pub fn write_mono_wav(dir: &Path, name: &str, samples: &[f32], sample_rate: u32) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Write error");
    }
    writer.finalize().expect("Finalize error");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sine() {
        let samples = generate_sine(440.0, 44100.0, 44100);
        assert_eq!(samples.len(), 44100);
        assert!(peak(&samples) <= 1.0);
        assert!(peak(&samples) > 0.99);
    }

    #[test]
    fn test_compare_audio_reports_first_diff() {
        let a = [0.0, 0.5, 1.0];
        let b = [0.0, 0.6, 1.0];
        let result = compare_audio(&a, &b, 0.01);
        assert!(!result.equal);
        assert_eq!(result.first_diff_sample, Some(1));
        assert_eq!(result.num_diffs, 1);
    }

    #[test]
    fn test_rising_zero_crossings() {
        assert_eq!(rising_zero_crossings(&[-1.0, 0.0, 1.0, -1.0, 1.0]), 2);
        assert_eq!(rising_zero_crossings(&[1.0, -1.0]), 0);
    }
}
