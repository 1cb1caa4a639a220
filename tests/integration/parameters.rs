//! Control changes reaching sounding notes.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use terzetto::prelude::*;
use terzetto::synth::Channel;

#[test]
fn test_volume_change_applies_on_next_buffer() {
    let mut engine = solo_engine(EXACT_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Square);
    engine.note_on(EXACT_FREQUENCY);
    let first = left(&engine.render(1));
    assert_eq!(peak(&first), 1.0);

    engine.handle().set_volume(0, 25.0).unwrap();
    let second = left(&engine.render(1));
    assert_eq!(peak(&second), 0.25);
}

#[test]
fn test_wave_shape_is_fixed_for_sounding_note() {
    let mut engine = solo_engine(EXACT_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Square);
    engine.note_on(EXACT_FREQUENCY);
    engine.render(1);

    engine.handle().set_wave_shape(0, WaveShape::Sine).unwrap();
    let held = left(&engine.render(1));
    assert!(held.iter().all(|s| s.abs() == 1.0), "sounding note keeps its square");

    engine.note_on(EXACT_FREQUENCY);
    let mixed = left(&engine.render(1));
    // New note is a sine; sum is no longer a pure square
    assert!(mixed.iter().any(|s| s.abs() != 2.0 && s.abs() != 0.0));
}

#[test]
fn test_amplitude_modulation_by_silent_chain_is_silent() {
    let mut engine = test_engine();
    let synth = engine.handle();
    synth.set_volume(0, 100.0).unwrap();
    synth.set_volume(1, 0.0).unwrap();
    synth.set_volume(2, 0.0).unwrap();
    synth
        .set_modulation_algo(1, ModulationAlgo::AmplitudeModulation)
        .unwrap();
    engine.note_on(440.0);
    let out = engine.render(2);
    assert_is_silent(&left(&out), SILENCE_THRESHOLD, "AM by zero");
}

#[test]
fn test_sync_keeps_host_below_half_cycle() {
    // Oscillator 1 runs an octave under oscillator 2 and is hard-synced to it
    let mut engine = solo_engine(EXACT_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Saw);
    let synth = engine.handle();
    synth.set_coarse_detuning(0, -12.0).unwrap();
    synth.set_modulation_algo(1, ModulationAlgo::Sync).unwrap();
    engine.note_on(EXACT_FREQUENCY);

    let out = left(&engine.render(2));
    assert!(out.iter().all(|&s| s < 0.0));
    assert_eq!(rising_zero_crossings(&out), 0);
    let resets: Vec<usize> = out
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0])
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(resets.len(), out.len() / EXACT_CYCLE);

    // Oscillator 2 heard on its own: a sine at the note frequency
    let mut source = solo_engine(EXACT_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::Saw);
    source.handle().set_volume(0, 0.0).unwrap();
    source.handle().set_volume(1, 100.0).unwrap();
    source.note_on(EXACT_FREQUENCY);
    let modulator = left(&source.render(3));
    let modulator = &modulator[..out.len() + 1];

    // Each reset lands on the frame before the modulator's rising zero crossing
    assert_eq!(rising_zero_crossings(modulator), resets.len());
    for &r in &resets {
        assert!(
            modulator[r] < 0.0 && modulator[r + 1] >= 0.0,
            "reset at frame {r} not at a modulator cycle boundary"
        );
    }
}

#[cfg(feature = "wav")]
#[test]
fn test_sample_file_parameter_feeds_user_wave() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_mono_wav(dir.path(), "square.wav", &[1.0, 1.0, -1.0, -1.0], 44100);

    let mut engine = solo_engine(EXACT_SAMPLE_RATE, TEST_BUFFER_SIZE, WaveShape::UserDefined);
    engine.note_on(EXACT_FREQUENCY);
    let before = left(&engine.render(1));
    assert_is_silent(&before, SILENCE_THRESHOLD, "no waveform loaded");

    engine
        .handle()
        .set_parameter("samplefile", path.to_str().unwrap())
        .unwrap();
    // Loaded waveforms reach new notes only
    let still = left(&engine.render(1));
    assert_is_silent(&still, SILENCE_THRESHOLD, "sounding note");

    engine.note_on(EXACT_FREQUENCY);
    let after = left(&engine.render(1));
    assert_eq!(after[0], 1.0);
    assert_eq!(after[EXACT_CYCLE / 2 + EXACT_CYCLE / 8], -1.0);
}

#[test]
fn test_missing_sample_file_is_an_error() {
    let engine = test_engine();
    let synth = engine.handle();
    assert!(synth
        .set_parameter("samplefile", "/nonexistent/wave.wav")
        .is_err());
    assert!(synth.slot(0).unwrap().user_wave().is_none());
}

#[test]
fn test_settings_restore_reproduces_output() {
    let mut source = test_engine();
    let synth = source.handle();
    synth.set_wave_shape(0, WaveShape::Triangle).unwrap();
    synth.set_wave_shape(1, WaveShape::MoogSaw).unwrap();
    synth.set_wave_shape(2, WaveShape::Exponential).unwrap();
    synth.set_coarse_detuning(1, 7.0).unwrap();
    synth.set_fine_detuning_left(2, -12.5).unwrap();
    synth.set_panning(1, -30.0).unwrap();
    synth.set_stereo_phase_detuning(0, 45.0).unwrap();
    synth
        .set_modulation_algo(1, ModulationAlgo::PhaseModulation)
        .unwrap();
    synth
        .set_modulation_algo(2, ModulationAlgo::FrequencyModulation)
        .unwrap();

    let json = serde_json::to_string(&synth.save_settings()).unwrap();
    let settings: TripleOscillatorSettings = serde_json::from_str(&json).unwrap();

    let mut target = test_engine();
    target.handle().load_settings(&settings).unwrap();
    for channel in [Channel::Left, Channel::Right] {
        for i in 0..3 {
            let (a, b) = (synth.slot(i).unwrap(), target.handle().slot(i).unwrap().clone());
            assert_eq!(a.volume(channel), b.volume(channel));
            assert_eq!(a.detuning(channel), b.detuning(channel));
            assert_eq!(a.phase_offset(channel), b.phase_offset(channel));
        }
    }

    source.note_on(330.0);
    target.note_on(330.0);
    let a = source.render(4);
    let b = target.render(4);
    assert_signals_equal(&left(&a), &left(&b), FLOAT_EPSILON, "left");
    assert_signals_equal(&right(&a), &right(&b), FLOAT_EPSILON, "right");
}
