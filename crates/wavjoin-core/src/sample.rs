//! Signed integer sample frames.

use thiserror::Error;

/// One time instant of audio: one signed value per channel.
///
/// A mono sample has exactly one slot and a stereo sample exactly two,
/// ordered (left, right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Single-channel value.
    Mono(i64),
    /// Left and right values.
    Stereo(i64, i64),
}

impl Sample {
    /// Build a sample from per-channel values. Returns `None` unless there
    /// are exactly one or two values.
    pub fn from_values(values: &[i64]) -> Option<Self> {
        match *values {
            [v] => Some(Sample::Mono(v)),
            [l, r] => Some(Sample::Stereo(l, r)),
            _ => None,
        }
    }

    /// Number of channel slots (1 or 2).
    pub fn channels(&self) -> u16 {
        match self {
            Sample::Mono(_) => 1,
            Sample::Stereo(..) => 2,
        }
    }

    /// Value in channel slot `channel`, if present.
    pub fn value(&self, channel: usize) -> Option<i64> {
        match (*self, channel) {
            (Sample::Mono(v), 0) | (Sample::Stereo(v, _), 0) | (Sample::Stereo(_, v), 1) => {
                Some(v)
            }
            _ => None,
        }
    }

    /// First channel value: the only value of a mono sample, the left value
    /// of a stereo one.
    pub fn first(&self) -> i64 {
        match *self {
            Sample::Mono(v) | Sample::Stereo(v, _) => v,
        }
    }
}

/// A sample whose channel count does not match its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sample has {found} channel(s), sequence expects {expected}")]
pub struct ChannelMismatch {
    /// Channel count of the sequence.
    pub expected: u16,
    /// Channel count of the rejected sample.
    pub found: u16,
}

/// Ordered samples of one stream, all with the same channel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSequence {
    channels: u16,
    samples: Vec<Sample>,
}

impl SampleSequence {
    /// Empty mono sequence with room for `capacity` samples.
    pub fn mono(capacity: usize) -> Self {
        Self {
            channels: 1,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Empty stereo sequence with room for `capacity` samples.
    pub fn stereo(capacity: usize) -> Self {
        Self {
            channels: 2,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Mono sequence holding `values` in order.
    pub fn from_mono_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            channels: 1,
            samples: values.into_iter().map(Sample::Mono).collect(),
        }
    }

    /// Stereo sequence from `(left, right)` frames.
    pub fn from_stereo_frames(frames: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self {
            channels: 2,
            samples: frames
                .into_iter()
                .map(|(l, r)| Sample::Stereo(l, r))
                .collect(),
        }
    }

    /// Append a sample, rejecting one with the wrong channel count.
    pub fn push(&mut self, sample: Sample) -> Result<(), ChannelMismatch> {
        if sample.channels() != self.channels {
            return Err(ChannelMismatch {
                expected: self.channels,
                found: sample.channels(),
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Declared channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of samples (frames).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`.
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// All samples in order.
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
