//! PCM format descriptor.

/// `wFormatTag` for integer PCM.
pub const FORMAT_PCM: u16 = 0x0001;

/// `wFormatTag` for IEEE 754 floating-point samples.
pub const FORMAT_IEEE_FLOAT: u16 = 0x0003;

/// `wFormatTag` signalling a `WAVE_FORMAT_EXTENSIBLE` fmt chunk.
pub const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Audio format as described by a WAV `fmt ` chunk.
///
/// Only the independent fields are stored. [`block_align`](Self::block_align)
/// and [`byte_rate`](Self::byte_rate) are always computed from them, so a
/// descriptor can never disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioFormat {
    /// Encoding tag (1 = PCM, 3 = IEEE float).
    pub format_tag: u16,
    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per channel value. Always a multiple of 8 for decoded streams.
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// Create an integer PCM format.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            format_tag: FORMAT_PCM,
            channels,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Same format with a different channel count.
    ///
    /// Used to derive the stereo output descriptor from a validated mono one.
    pub fn with_channels(self, channels: u16) -> Self {
        Self { channels, ..self }
    }

    /// Bytes occupied by one channel value.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per multi-channel frame (`channels * bits_per_sample / 8`).
    ///
    /// Wraps at 16 bits like the on-disk field it mirrors.
    pub fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bytes_per_sample())
    }

    /// Bytes per second of audio (`sample_rate * block_align`).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(u32::from(self.block_align()))
    }

    /// Returns `true` if this is a single-channel stream.
    pub fn is_mono(&self) -> bool {
        self.channels == 1
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::pcm(1, 44100, 16)
    }
}

/// A decoded stream header: its format and the declared `data` chunk length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Format from the `fmt ` chunk.
    pub format: AudioFormat,
    /// Declared byte length of the `data` chunk.
    pub data_len: u32,
}

impl StreamInfo {
    /// Number of frames in the data chunk (`data_len / block_align`).
    ///
    /// Returns 0 for a degenerate zero block align.
    pub fn sample_count(&self) -> u32 {
        match self.format.block_align() {
            0 => 0,
            align => self.data_len / u32::from(align),
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        f64::from(self.sample_count()) / f64::from(self.format.sample_rate)
    }
}
