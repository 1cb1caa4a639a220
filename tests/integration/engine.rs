//! Engine construction and rendering basics.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_abs_diff_eq;
use terzetto::prelude::*;
use terzetto::Error;

#[test]
fn test_engine_reports_configuration() {
    let engine = TerzettoEngine::builder()
        .sample_rate(48000.0)
        .frames_per_buffer(512)
        .buffer_pool_size(8)
        .release_frames(128)
        .build()
        .unwrap();

    assert_eq!(engine.sample_rate(), 48000.0);
    assert_eq!(engine.frames_per_buffer(), 512);
    assert_eq!(engine.available_buffers(), 8);
    assert_eq!(engine.config().release_frames, 128);
    assert_eq!(engine.instrument().name(), "TripleOscillator");
    assert_eq!(engine.handle().sample_rate(), 48000.0);
}

#[test]
fn test_engine_rejects_invalid_configuration() {
    let result = TerzettoEngine::builder().sample_rate(500_000.0).build();
    assert!(matches!(
        result,
        Err(Error::Core(terzetto::core::Error::InvalidConfig(_)))
    ));
}

#[test]
fn test_idle_engine_renders_silence() {
    let mut engine = test_engine();
    let out = engine.render(4);
    assert_eq!(out.len(), 4 * TEST_BUFFER_SIZE);
    assert_is_silent(&left(&out), SILENCE_THRESHOLD, "idle left");
    assert_is_silent(&right(&out), SILENCE_THRESHOLD, "idle right");
}

#[test]
fn test_note_produces_audio_on_both_channels() {
    let mut engine = test_engine();
    engine.note_on(440.0);
    let out = engine.render(2);
    assert_not_silent(&left(&out), 0.5, "left");
    assert_not_silent(&right(&out), 0.5, "right");
    assert_signals_equal(&left(&out), &right(&out), FLOAT_EPSILON, "centred stereo");
}

#[test]
fn test_default_patch_sums_to_unity() {
    // Three sines at a third of full volume each, mixed
    let mut engine = test_engine();
    engine.note_on(440.0);
    let out = left(&engine.render(4));
    let reference = generate_sine(440.0, TEST_SAMPLE_RATE, out.len());
    assert_signals_equal(&out, &reference, PERCEPTUAL_EPSILON, "default patch");
}

#[test]
fn test_polyphony_mixes_notes() {
    let mut single = solo_engine(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Sine);
    single.note_on(440.0);
    let one = left(&single.render(2));

    let mut double = solo_engine(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Sine);
    double.note_on(440.0);
    double.note_on(440.0);
    let two = left(&double.render(2));

    let doubled: Vec<f32> = one.iter().map(|s| s * 2.0).collect();
    assert_signals_equal(&two, &doubled, FLOAT_EPSILON, "two identical notes");
}

#[test]
fn test_panning_moves_signal_between_channels() {
    let mut engine = solo_engine(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Square);
    engine.handle().set_panning(0, 100.0).unwrap();
    engine.note_on(440.0);
    let out = engine.render(1);
    assert_is_silent(&left(&out), SILENCE_THRESHOLD, "hard right, left side");
    assert_abs_diff_eq!(peak(&right(&out)), 1.0, epsilon = FLOAT_EPSILON);
}
