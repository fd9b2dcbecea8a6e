//! WAV decoding.

use crate::chunk::{
    ChunkHeader, DATA, FMT, FMT_EXTENSIBLE_LEN, FMT_LEN, RIFF, WAVE, read_exact_or,
};
use crate::error::ContainerError;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use wavjoin_core::{
    AudioFormat, FORMAT_EXTENSIBLE, FORMAT_IEEE_FLOAT, FORMAT_PCM, Sample, SampleSequence,
    StreamInfo, decode_sample,
};

/// Reads PCM samples from a RIFF/WAVE stream.
///
/// The header is parsed by [`WavReader::new`]: chunks are walked in file
/// order until both `fmt ` and `data` are found, whichever comes first, and
/// the stream is left positioned at the first sample. Unknown chunks
/// (`LIST`, `bext`, `fact`, ...) are skipped.
#[derive(Debug)]
pub struct WavReader<R> {
    inner: R,
    info: StreamInfo,
    remaining: u32,
}

impl WavReader<BufReader<File>> {
    /// Open and parse the WAV file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ContainerError> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> WavReader<R> {
    /// Parse the container header from `inner`.
    pub fn new(mut inner: R) -> Result<Self, ContainerError> {
        let mut magic = [0u8; 4];
        read_exact_or(&mut inner, &mut magic, "RIFF header")?;
        if magic != RIFF {
            return Err(ContainerError::NotRiff(magic));
        }
        let mut riff_len = [0u8; 4];
        read_exact_or(&mut inner, &mut riff_len, "RIFF header")?;
        read_exact_or(&mut inner, &mut magic, "RIFF header")?;
        if magic != WAVE {
            return Err(ContainerError::NotWave(magic));
        }

        let mut format = None;
        let mut data: Option<(u64, u32)> = None;

        while format.is_none() || data.is_none() {
            let Some(header) = ChunkHeader::read(&mut inner)? else {
                break;
            };
            match header.id {
                FMT if format.is_none() => {
                    format = Some(read_fmt(&mut inner, header)?);
                }
                DATA if data.is_none() => {
                    let offset = inner.stream_position()?;
                    data = Some((offset, header.len));
                    if format.is_none() {
                        skip(&mut inner, header.padded_len())?;
                    }
                }
                _ => {
                    tracing::trace!(
                        chunk = %String::from_utf8_lossy(&header.id),
                        len = header.len,
                        "skipping chunk"
                    );
                    skip(&mut inner, header.padded_len())?;
                }
            }
        }

        let format = format.ok_or(ContainerError::MissingChunk("fmt "))?;
        let (data_offset, data_len) = data.ok_or(ContainerError::MissingChunk("data"))?;

        // data preceded fmt: come back to it
        if inner.stream_position()? != data_offset {
            inner.seek(SeekFrom::Start(data_offset))?;
        }

        let block_align = format.block_align();
        if data_len % u32::from(block_align) != 0 {
            return Err(ContainerError::UnalignedData {
                data_len,
                block_align,
            });
        }

        let info = StreamInfo { format, data_len };
        tracing::debug!(
            channels = format.channels,
            sample_rate = format.sample_rate,
            bits = format.bits_per_sample,
            samples = info.sample_count(),
            "parsed WAV header"
        );

        Ok(Self {
            inner,
            info,
            remaining: info.sample_count(),
        })
    }

    /// Decoded header.
    pub fn info(&self) -> StreamInfo {
        self.info
    }

    /// Format from the `fmt ` chunk.
    pub fn format(&self) -> AudioFormat {
        self.info.format
    }

    /// Total samples (frames) declared by the data chunk.
    pub fn sample_count(&self) -> u32 {
        self.info.sample_count()
    }

    /// Samples not yet read.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Read the next `count` samples.
    ///
    /// Consumes exactly `count * block_align` bytes. Asking for more than
    /// [`remaining`](Self::remaining) fails without consuming anything.
    pub fn read_samples(&mut self, count: u32) -> Result<SampleSequence, ContainerError> {
        if count > self.remaining {
            return Err(ContainerError::ReadPastEnd {
                requested: count,
                remaining: self.remaining,
            });
        }

        let format = self.info.format;
        let block_align = usize::from(format.block_align());
        let width = usize::from(format.bytes_per_sample());

        let mut raw = vec![0u8; count as usize * block_align];
        read_exact_or(&mut self.inner, &mut raw, "sample data")?;
        self.remaining -= count;

        let frames = raw.chunks_exact(block_align);
        let sequence = if format.is_mono() {
            SampleSequence::from_mono_values(frames.map(decode_sample))
        } else {
            SampleSequence::from_stereo_frames(frames.map(|frame| {
                let (l, r) = frame.split_at(width);
                (decode_sample(l), decode_sample(r))
            }))
        };
        Ok(sequence)
    }

    /// Read all remaining samples.
    pub fn read_all(&mut self) -> Result<SampleSequence, ContainerError> {
        self.read_samples(self.remaining)
    }

    /// Read the next sample, or `None` once the data chunk is exhausted.
    pub fn read_sample(&mut self) -> Result<Option<Sample>, ContainerError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        Ok(self.read_samples(1)?.get(0))
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn skip<R: Seek>(reader: &mut R, len: u64) -> Result<(), ContainerError> {
    let offset = i64::try_from(len).map_err(|_| ContainerError::Truncated("chunk payload"))?;
    reader.seek(SeekFrom::Current(offset))?;
    Ok(())
}

/// Parse and check a `fmt ` chunk, leaving the reader after its padding.
fn read_fmt<R: Read + Seek>(reader: &mut R, header: ChunkHeader) -> Result<AudioFormat, ContainerError> {
    if header.len < FMT_LEN {
        return Err(ContainerError::FmtTooShort(header.len));
    }

    let mut fixed = [0u8; FMT_LEN as usize];
    read_exact_or(reader, &mut fixed, "fmt chunk")?;
    let u16_at = |i: usize| u16::from_le_bytes([fixed[i], fixed[i + 1]]);
    let u32_at = |i: usize| u32::from_le_bytes([fixed[i], fixed[i + 1], fixed[i + 2], fixed[i + 3]]);

    let mut format_tag = u16_at(0);
    let channels = u16_at(2);
    let sample_rate = u32_at(4);
    let byte_rate = u32_at(8);
    let block_align = u16_at(12);
    let bits_per_sample = u16_at(14);

    let mut consumed = u64::from(FMT_LEN);
    if format_tag == FORMAT_EXTENSIBLE && header.len >= FMT_EXTENSIBLE_LEN {
        // cbSize, wValidBitsPerSample, dwChannelMask, then the SubFormat GUID
        // whose first two bytes are the real format tag
        let mut ext = [0u8; (FMT_EXTENSIBLE_LEN - FMT_LEN) as usize];
        read_exact_or(reader, &mut ext, "fmt extension")?;
        format_tag = u16::from_le_bytes([ext[8], ext[9]]);
        consumed += ext.len() as u64;
    }
    skip(reader, header.padded_len() - consumed)?;

    if format_tag != FORMAT_PCM && format_tag != FORMAT_IEEE_FLOAT {
        return Err(ContainerError::UnsupportedFormatTag(format_tag));
    }
    if channels != 1 && channels != 2 {
        return Err(ContainerError::InvalidChannelCount(channels));
    }
    if bits_per_sample % 8 != 0 {
        return Err(ContainerError::UnalignedBitDepth(bits_per_sample));
    }
    if bits_per_sample == 0 || bits_per_sample > 64 {
        return Err(ContainerError::UnsupportedBitDepth(bits_per_sample));
    }

    let format = AudioFormat {
        format_tag,
        channels,
        sample_rate,
        bits_per_sample,
    };
    if block_align != format.block_align() {
        return Err(ContainerError::BlockAlignMismatch {
            declared: block_align,
            expected: format.block_align(),
        });
    }
    if byte_rate != format.byte_rate() {
        tracing::warn!(
            declared = byte_rate,
            expected = format.byte_rate(),
            "fmt chunk byte rate does not match sample rate and block align"
        );
    }

    Ok(format)
}
