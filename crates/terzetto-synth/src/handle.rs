//! Control-side handle for a [`TripleOscillator`](crate::TripleOscillator).
//!
//! Cheap to clone; every setter writes lock-free state that the render
//! thread picks up on its next buffer (derived values) or next note
//! (shapes, routing, user waveforms).

use crate::instrument::TripleOscillatorParams;
use crate::modulation::ModulationAlgo;
use crate::params::{Knob, OscillatorSlot, NUM_OF_OSCILLATORS};
use crate::settings::{OscillatorSettings, TripleOscillatorSettings};
use crate::waveform::WaveShape;
use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;
use terzetto_core::SampleBuffer;

/// Parameter name accepted by [`TripleOscillatorHandle::set_parameter`].
pub const SAMPLE_FILE_PARAMETER: &str = "samplefile";

/// Setter surface over the shared instrument state.
///
/// # Example
/// ```
/// use terzetto_synth::{Knob, ModulationAlgo, TripleOscillator, WaveShape};
///
/// let synth = TripleOscillator::new(44100.0);
/// let handle = synth.handle();
/// handle.set_wave_shape(0, WaveShape::Saw)?;
/// handle.set_knob(1, Knob::CoarseDetuning, 12.0)?;
/// handle.set_modulation_algo(1, ModulationAlgo::FrequencyModulation)?;
/// # Ok::<(), terzetto_synth::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TripleOscillatorHandle {
    params: Arc<TripleOscillatorParams>,
}

impl TripleOscillatorHandle {
    pub(crate) fn new(params: Arc<TripleOscillatorParams>) -> Self {
        Self { params }
    }

    pub fn slot(&self, oscillator: usize) -> Result<&Arc<OscillatorSlot>> {
        self.params.slot(oscillator)
    }

    // =========================================================================
    // Knobs
    // =========================================================================

    /// Set a knob in its native unit. Values are clamped to the knob's range.
    pub fn set_knob(&self, oscillator: usize, knob: Knob, value: f32) -> Result<()> {
        let sample_rate = self.params.sample_rate();
        self.slot(oscillator)?.set_knob(knob, value, sample_rate);
        Ok(())
    }

    /// Set a knob from an automation value in `0..=1`.
    pub fn set_knob_normalized(&self, oscillator: usize, knob: Knob, normalized: f32) -> Result<()> {
        self.set_knob(oscillator, knob, knob.range().denormalize(normalized))
    }

    pub fn knob(&self, oscillator: usize, knob: Knob) -> Result<f32> {
        Ok(self.slot(oscillator)?.knob(knob))
    }

    pub fn set_volume(&self, oscillator: usize, volume: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::Volume, volume)
    }

    pub fn set_panning(&self, oscillator: usize, panning: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::Panning, panning)
    }

    pub fn set_coarse_detuning(&self, oscillator: usize, semitones: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::CoarseDetuning, semitones)
    }

    pub fn set_fine_detuning_left(&self, oscillator: usize, cents: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::FineDetuningLeft, cents)
    }

    pub fn set_fine_detuning_right(&self, oscillator: usize, cents: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::FineDetuningRight, cents)
    }

    pub fn set_phase_offset(&self, oscillator: usize, degrees: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::PhaseOffset, degrees)
    }

    pub fn set_stereo_phase_detuning(&self, oscillator: usize, degrees: f32) -> Result<()> {
        self.set_knob(oscillator, Knob::StereoPhaseDetuning, degrees)
    }

    // =========================================================================
    // Shapes and routing
    // =========================================================================

    pub fn set_wave_shape(&self, oscillator: usize, shape: WaveShape) -> Result<()> {
        self.slot(oscillator)?.set_wave_shape(shape);
        Ok(())
    }

    pub fn wave_shape(&self, oscillator: usize) -> Result<WaveShape> {
        Ok(self.slot(oscillator)?.wave_shape())
    }

    /// Selector 1 routes oscillators 1 and 2, selector 2 routes 2 and 3.
    pub fn set_modulation_algo(&self, selector: usize, algo: ModulationAlgo) -> Result<()> {
        self.params.set_modulation_algo(selector, algo)
    }

    pub fn modulation_algo(&self, selector: usize) -> Result<ModulationAlgo> {
        self.params.modulation_algo(selector)
    }

    // =========================================================================
    // User waveforms
    // =========================================================================

    pub fn set_user_wave(&self, oscillator: usize, wave: SampleBuffer) -> Result<()> {
        self.slot(oscillator)?.set_user_wave(Some(Arc::new(wave)));
        Ok(())
    }

    pub fn clear_user_wave(&self, oscillator: usize) -> Result<()> {
        self.slot(oscillator)?.set_user_wave(None);
        Ok(())
    }

    /// Load a WAV file as the oscillator's user waveform.
    pub fn load_user_wave(&self, oscillator: usize, path: impl AsRef<Path>) -> Result<()> {
        let slot = self.slot(oscillator)?;
        let wave = read_wave(path.as_ref())?;
        slot.set_user_wave(Some(wave));
        Ok(())
    }

    /// String-keyed parameter entry point. `"samplefile"` loads the file
    /// into all three oscillators.
    pub fn set_parameter(&self, name: &str, value: &str) -> Result<()> {
        match name {
            SAMPLE_FILE_PARAMETER => {
                let wave = read_wave(Path::new(value))?;
                for slot in self.params.slots() {
                    slot.set_user_wave(Some(Arc::clone(&wave)));
                }
                Ok(())
            }
            _ => Err(Error::UnknownParameter(name.to_string())),
        }
    }

    // =========================================================================
    // Sample rate
    // =========================================================================

    pub fn sample_rate(&self) -> f64 {
        self.params.sample_rate()
    }

    pub fn set_sample_rate(&self, sample_rate: f64) -> Result<()> {
        self.params.set_sample_rate(sample_rate)
    }

    pub fn update_all_detuning(&self) {
        self.params.update_all_detuning();
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Snapshot the live state.
    pub fn save_settings(&self) -> TripleOscillatorSettings {
        let oscillators: [OscillatorSettings; NUM_OF_OSCILLATORS] = std::array::from_fn(|i| {
            let slot = &self.params.slots()[i];
            let mut osc = OscillatorSettings {
                wavetype: slot.wave_shape(),
                userwavefile: slot
                    .user_wave()
                    .and_then(|wave| wave.audio_file().map(Path::to_path_buf)),
                ..Default::default()
            };
            for &knob in Knob::all() {
                osc.set_knob(knob, slot.knob(knob));
            }
            osc
        });

        TripleOscillatorSettings {
            modalgo1: self.params.routing()[0],
            modalgo2: self.params.routing()[1],
            oscillators,
        }
    }

    /// Apply saved settings through the regular setters.
    ///
    /// A user waveform that fails to load is logged and leaves that slot
    /// without a waveform (it renders silence when selected).
    pub fn load_settings(&self, settings: &TripleOscillatorSettings) -> Result<()> {
        self.set_modulation_algo(1, settings.modalgo1)?;
        self.set_modulation_algo(2, settings.modalgo2)?;

        for (i, osc) in settings.oscillators.iter().enumerate() {
            for &knob in Knob::all() {
                self.set_knob(i, knob, osc.knob(knob))?;
            }
            self.set_wave_shape(i, osc.wavetype)?;

            match &osc.userwavefile {
                Some(path) => {
                    if let Err(e) = self.load_user_wave(i, path) {
                        tracing::warn!(oscillator = i, path = %path.display(), error = %e, "failed to load user waveform");
                        self.clear_user_wave(i)?;
                    }
                }
                None => self.clear_user_wave(i)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "wav")]
fn read_wave(path: &Path) -> Result<Arc<SampleBuffer>> {
    Ok(Arc::new(SampleBuffer::load(path)?))
}

#[cfg(not(feature = "wav"))]
fn read_wave(path: &Path) -> Result<Arc<SampleBuffer>> {
    Err(Error::InvalidConfig(format!(
        "cannot load {}: built without the `wav` feature",
        path.display()
    )))
}
