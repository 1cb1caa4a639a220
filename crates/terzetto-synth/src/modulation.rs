//! How one oscillator in a chain combines with its modulator.

use serde::{Deserialize, Serialize};

/// Modulation algorithm between an oscillator and the next one in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ModulationAlgo {
    /// Modulator output offsets the waveform lookup phase.
    PhaseModulation = 0,
    /// Waveform amplitude is scaled by the modulator output.
    AmplitudeModulation = 1,
    /// Both outputs are summed.
    #[default]
    Mix = 2,
    /// Phase restarts whenever the modulator completes a cycle.
    Sync = 3,
    /// Modulator output is added to the phase accumulator every sample.
    FrequencyModulation = 4,
}

impl ModulationAlgo {
    /// Decode a stored discriminant; unknown values fall back to [`ModulationAlgo::Mix`].
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => ModulationAlgo::PhaseModulation,
            1 => ModulationAlgo::AmplitudeModulation,
            3 => ModulationAlgo::Sync,
            4 => ModulationAlgo::FrequencyModulation,
            _ => ModulationAlgo::Mix,
        }
    }

    pub fn all() -> &'static [ModulationAlgo] {
        &[
            ModulationAlgo::PhaseModulation,
            ModulationAlgo::AmplitudeModulation,
            ModulationAlgo::Mix,
            ModulationAlgo::Sync,
            ModulationAlgo::FrequencyModulation,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModulationAlgo::PhaseModulation => "PM",
            ModulationAlgo::AmplitudeModulation => "AM",
            ModulationAlgo::Mix => "Mix",
            ModulationAlgo::Sync => "Sync",
            ModulationAlgo::FrequencyModulation => "FM",
        }
    }
}
