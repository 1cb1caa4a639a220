//! User-supplied waveforms.
//!
//! A [`SampleBuffer`] holds one cycle (or any length) of audio that an
//! oscillator plays back as its waveform, indexed by phase.

use crate::frame::StereoFrame;
use std::path::{Path, PathBuf};

#[cfg(feature = "wav")]
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    frames: Vec<StereoFrame>,
    sample_rate: u32,
    audio_file: Option<PathBuf>,
}

impl SampleBuffer {
    pub fn from_frames(frames: Vec<StereoFrame>, sample_rate: u32) -> Self {
        Self {
            frames,
            sample_rate,
            audio_file: None,
        }
    }

    /// Mono samples are copied to both channels.
    pub fn from_mono(samples: &[f32], sample_rate: u32) -> Self {
        Self::from_frames(samples.iter().map(|&s| [s, s]).collect(), sample_rate)
    }

    /// Decode a WAV file. Integer formats are scaled to -1.0..1.0, mono is
    /// duplicated, channels beyond the second are ignored.
    #[cfg(feature = "wav")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<std::result::Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let scale = 1.0 / (1_i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()?
            }
        };

        if samples.len() < channels {
            return Err(Error::EmptyAudioFile(path.display().to_string()));
        }

        let frames = samples
            .chunks_exact(channels)
            .map(|chunk| [chunk[0], chunk[if channels > 1 { 1 } else { 0 }]])
            .collect();

        tracing::debug!(path = %path.display(), channels, "loaded user waveform");

        Ok(Self {
            frames,
            sample_rate: spec.sample_rate,
            audio_file: Some(path.to_path_buf()),
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[StereoFrame] {
        &self.frames
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Path the buffer was loaded from, if any.
    pub fn audio_file(&self) -> Option<&Path> {
        self.audio_file.as_deref()
    }

    /// Left-channel value at `phase` (wrapped into one pass over the buffer),
    /// linearly interpolated between neighbouring frames. Empty buffers are
    /// silent.
    #[inline]
    pub fn user_wave_sample(&self, phase: f32) -> f32 {
        let len = self.frames.len();
        if len == 0 {
            return 0.0;
        }
        let position = phase.rem_euclid(1.0) * len as f32;
        let index = (position as usize).min(len - 1);
        let next = (index + 1) % len;
        let frac = position - index as f32;
        let a = self.frames[index][0];
        let b = self.frames[next][0];
        a + (b - a) * frac
    }
}
