//! WAV encoding.

use crate::chunk::{ChunkHeader, DATA, FMT, FMT_LEN, RIFF, WAVE};
use crate::error::ContainerError;
use std::io::Write;
use wavjoin_core::{
    AudioFormat, FORMAT_IEEE_FLOAT, FORMAT_PCM, Sample, SampleSequence, encode_sample,
};

/// Streams PCM samples into a RIFF/WAVE container of fixed size.
///
/// The whole header, including the `data` chunk length, is written by
/// [`WavWriter::new`] from the declared sample count and is never revisited,
/// so the inner writer does not need to be seekable. Samples may then be
/// written in any number of batches; writing past the declared count fails
/// before any byte of the offending batch is emitted.
#[derive(Debug)]
pub struct WavWriter<W: Write> {
    inner: W,
    format: AudioFormat,
    declared: u32,
    written: u32,
    scratch: Vec<u8>,
}

impl<W: Write> WavWriter<W> {
    /// Write the header for `sample_count` frames of `format` and return a
    /// writer ready for sample data.
    ///
    /// Block align and byte rate are derived from `format`.
    pub fn new(mut inner: W, sample_count: u32, format: AudioFormat) -> Result<Self, ContainerError> {
        check_format(&format)?;

        let block_align = format.block_align();
        let data_len = u64::from(sample_count) * u64::from(block_align);
        let riff_len = 4 + (8 + u64::from(FMT_LEN)) + 8 + data_len + (data_len & 1);
        let (Ok(data_len), Ok(riff_len)) = (u32::try_from(data_len), u32::try_from(riff_len)) else {
            return Err(ContainerError::TooLarge {
                samples: sample_count,
                block_align,
            });
        };

        ChunkHeader { id: RIFF, len: riff_len }.write(&mut inner)?;
        inner.write_all(&WAVE)?;

        ChunkHeader { id: FMT, len: FMT_LEN }.write(&mut inner)?;
        inner.write_all(&format.format_tag.to_le_bytes())?;
        inner.write_all(&format.channels.to_le_bytes())?;
        inner.write_all(&format.sample_rate.to_le_bytes())?;
        inner.write_all(&format.byte_rate().to_le_bytes())?;
        inner.write_all(&block_align.to_le_bytes())?;
        inner.write_all(&format.bits_per_sample.to_le_bytes())?;

        ChunkHeader { id: DATA, len: data_len }.write(&mut inner)?;

        tracing::debug!(
            channels = format.channels,
            sample_rate = format.sample_rate,
            bits = format.bits_per_sample,
            samples = sample_count,
            "wrote WAV header"
        );

        Ok(Self {
            inner,
            format,
            declared: sample_count,
            written: 0,
            scratch: Vec::new(),
        })
    }

    /// Format being written.
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Samples the header declared.
    pub fn declared(&self) -> u32 {
        self.declared
    }

    /// Samples written so far.
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Append a batch of samples.
    ///
    /// Each channel value is written as `bits_per_sample / 8` little-endian
    /// bytes, channel 0 before channel 1. The whole batch is rejected if it
    /// would exceed the declared count or contains a sample with the wrong
    /// channel count.
    pub fn write_samples(&mut self, samples: &[Sample]) -> Result<(), ContainerError> {
        let attempted = u64::from(self.written) + samples.len() as u64;
        if attempted > u64::from(self.declared) {
            return Err(ContainerError::TooManySamples {
                declared: self.declared,
                attempted,
            });
        }
        let channels = self.format.channels;
        if let Some(bad) = samples.iter().find(|s| s.channels() != channels) {
            return Err(wavjoin_core::ChannelMismatch {
                expected: channels,
                found: bad.channels(),
            }
            .into());
        }

        let width = usize::from(self.format.bytes_per_sample());
        let block_align = usize::from(self.format.block_align());
        self.scratch.clear();
        self.scratch.resize(samples.len() * block_align, 0);

        for (sample, frame) in samples.iter().zip(self.scratch.chunks_exact_mut(block_align)) {
            for (channel, slot) in frame.chunks_exact_mut(width).enumerate() {
                encode_sample(sample.value(channel).unwrap_or_default(), slot);
            }
        }

        self.inner.write_all(&self.scratch)?;
        self.written = attempted as u32;
        Ok(())
    }

    /// Append every sample of `sequence`.
    pub fn write_sequence(&mut self, sequence: &SampleSequence) -> Result<(), ContainerError> {
        self.write_samples(sequence.as_slice())
    }

    /// Check the declared count was reached, write the pad byte for an odd
    /// data length, flush and return the inner writer.
    pub fn finish(mut self) -> Result<W, ContainerError> {
        if self.written != self.declared {
            return Err(ContainerError::Incomplete {
                declared: self.declared,
                written: self.written,
            });
        }
        let data_len = u64::from(self.declared) * u64::from(self.format.block_align());
        if data_len & 1 == 1 {
            self.inner.write_all(&[0])?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

fn check_format(format: &AudioFormat) -> Result<(), ContainerError> {
    if format.format_tag != FORMAT_PCM && format.format_tag != FORMAT_IEEE_FLOAT {
        return Err(ContainerError::UnsupportedFormatTag(format.format_tag));
    }
    if format.channels != 1 && format.channels != 2 {
        return Err(ContainerError::InvalidChannelCount(format.channels));
    }
    if format.bits_per_sample % 8 != 0 {
        return Err(ContainerError::UnalignedBitDepth(format.bits_per_sample));
    }
    if format.bits_per_sample == 0 || format.bits_per_sample > 64 {
        return Err(ContainerError::UnsupportedBitDepth(format.bits_per_sample));
    }
    Ok(())
}
