//! Interleaved stereo sample frames.

/// Channels per frame.
pub const DEFAULT_CHANNELS: usize = 2;

/// One stereo sample frame: `[left, right]`.
pub type StereoFrame = [f32; DEFAULT_CHANNELS];

/// Owned scratch buffer handed out by a host buffer pool.
pub type StereoBuffer = Vec<StereoFrame>;

/// Zero every sample of `buffer`.
#[inline]
pub fn clear_frames(buffer: &mut [StereoFrame]) {
    buffer.fill([0.0; DEFAULT_CHANNELS]);
}
