//! Serializable instrument settings.
//!
//! Field names follow the instrument's long-standing preset keys
//! (`vol`, `pan`, `coarse`, ...). The document format is up to the caller;
//! anything serde supports works.

use crate::modulation::ModulationAlgo;
use crate::params::{Knob, NUM_OF_OSCILLATORS};
use crate::waveform::WaveShape;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Knob values and waveform of one oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorSettings {
    pub vol: f32,
    pub pan: f32,
    pub coarse: f32,
    pub finel: f32,
    pub finer: f32,
    pub phoffset: f32,
    pub stphdetun: f32,
    pub wavetype: WaveShape,
    /// Source file of the user waveform, if one was loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userwavefile: Option<PathBuf>,
}

impl OscillatorSettings {
    pub fn knob(&self, knob: Knob) -> f32 {
        match knob {
            Knob::Volume => self.vol,
            Knob::Panning => self.pan,
            Knob::CoarseDetuning => self.coarse,
            Knob::FineDetuningLeft => self.finel,
            Knob::FineDetuningRight => self.finer,
            Knob::PhaseOffset => self.phoffset,
            Knob::StereoPhaseDetuning => self.stphdetun,
        }
    }

    pub fn set_knob(&mut self, knob: Knob, value: f32) {
        let field = match knob {
            Knob::Volume => &mut self.vol,
            Knob::Panning => &mut self.pan,
            Knob::CoarseDetuning => &mut self.coarse,
            Knob::FineDetuningLeft => &mut self.finel,
            Knob::FineDetuningRight => &mut self.finer,
            Knob::PhaseOffset => &mut self.phoffset,
            Knob::StereoPhaseDetuning => &mut self.stphdetun,
        };
        *field = value;
    }
}

impl Default for OscillatorSettings {
    fn default() -> Self {
        let mut settings = Self {
            vol: 0.0,
            pan: 0.0,
            coarse: 0.0,
            finel: 0.0,
            finer: 0.0,
            phoffset: 0.0,
            stphdetun: 0.0,
            wavetype: WaveShape::default(),
            userwavefile: None,
        };
        for &knob in Knob::all() {
            settings.set_knob(knob, knob.range().default);
        }
        settings
    }
}

/// Complete state of a [`TripleOscillator`](crate::TripleOscillator).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripleOscillatorSettings {
    pub modalgo1: ModulationAlgo,
    pub modalgo2: ModulationAlgo,
    pub oscillators: [OscillatorSettings; NUM_OF_OSCILLATORS],
}
