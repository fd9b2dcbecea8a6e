//! Compatibility check between the two mono halves of a pair.

use crate::format::{AudioFormat, StreamInfo};
use thiserror::Error;

/// Reasons two mono streams cannot be joined.
///
/// Every variant carries the observed left and right values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatMismatch {
    /// At least one side is not mono.
    #[error("{} file not mono: L {left} R {right} channels", non_mono_side(.left))]
    NotMono {
        /// Left channel count.
        left: u16,
        /// Right channel count.
        right: u16,
    },

    /// Sample rates differ.
    #[error("Sample rates not equal: L {left} R {right}")]
    SampleRate {
        /// Left sample rate.
        left: u32,
        /// Right sample rate.
        right: u32,
    },

    /// Bit depths differ.
    #[error("Bit depths not equal: L {left} R {right}")]
    BitsPerSample {
        /// Left bits per sample.
        left: u16,
        /// Right bits per sample.
        right: u16,
    },

    /// Block sizes differ.
    #[error("Block size not equal: L {left} R {right}")]
    BlockAlign {
        /// Left block align.
        left: u16,
        /// Right block align.
        right: u16,
    },

    /// Encodings differ.
    #[error("Audio format not equal: L {left} R {right}")]
    FormatTag {
        /// Left format tag.
        left: u16,
        /// Right format tag.
        right: u16,
    },

    /// Data chunk lengths differ.
    #[error("Sample counts not equal: L {left} R {right} bytes")]
    SampleCount {
        /// Left data length in bytes.
        left: u32,
        /// Right data length in bytes.
        right: u32,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn non_mono_side(left: &u16) -> &'static str {
    if *left == 1 { "R" } else { "L" }
}

/// Check that `left` and `right` can be joined into one stereo stream.
///
/// Checks run in a fixed order and the first failure is returned: both mono,
/// sample rate, bit depth, block align, format tag, data length. On success
/// the shared mono format is returned.
pub fn validate_pair(left: &StreamInfo, right: &StreamInfo) -> Result<AudioFormat, FormatMismatch> {
    let (l, r) = (&left.format, &right.format);

    if l.channels != 1 || r.channels != 1 {
        return Err(FormatMismatch::NotMono {
            left: l.channels,
            right: r.channels,
        });
    }
    if l.sample_rate != r.sample_rate {
        return Err(FormatMismatch::SampleRate {
            left: l.sample_rate,
            right: r.sample_rate,
        });
    }
    if l.bits_per_sample != r.bits_per_sample {
        return Err(FormatMismatch::BitsPerSample {
            left: l.bits_per_sample,
            right: r.bits_per_sample,
        });
    }
    if l.block_align() != r.block_align() {
        return Err(FormatMismatch::BlockAlign {
            left: l.block_align(),
            right: r.block_align(),
        });
    }
    if l.format_tag != r.format_tag {
        return Err(FormatMismatch::FormatTag {
            left: l.format_tag,
            right: r.format_tag,
        });
    }
    if left.data_len != right.data_len {
        return Err(FormatMismatch::SampleCount {
            left: left.data_len,
            right: right.data_len,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        sample_rate = l.sample_rate,
        bits = l.bits_per_sample,
        samples = left.sample_count(),
        "pair formats match"
    );

    Ok(*l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FORMAT_IEEE_FLOAT;

    fn mono(sample_rate: u32, bits: u16, data_len: u32) -> StreamInfo {
        StreamInfo {
            format: AudioFormat::pcm(1, sample_rate, bits),
            data_len,
        }
    }

    #[test]
    fn identical_streams_pass() {
        let l = mono(44100, 16, 200);
        let r = mono(44100, 16, 200);
        assert_eq!(validate_pair(&l, &r), Ok(AudioFormat::pcm(1, 44100, 16)));
    }

    #[test]
    fn sample_rate_mismatch() {
        let err = validate_pair(&mono(44100, 16, 200), &mono(48000, 16, 200)).unwrap_err();
        assert_eq!(
            err,
            FormatMismatch::SampleRate {
                left: 44100,
                right: 48000
            }
        );
        assert_eq!(err.to_string(), "Sample rates not equal: L 44100 R 48000");
    }

    #[test]
    fn stereo_left_is_rejected() {
        let mut l = mono(44100, 16, 200);
        l.format.channels = 2;
        let err = validate_pair(&l, &mono(44100, 16, 200)).unwrap_err();
        assert_eq!(err, FormatMismatch::NotMono { left: 2, right: 1 });
        assert!(err.to_string().starts_with("L file not mono"));
    }

    #[test]
    fn stereo_right_is_rejected() {
        let mut r = mono(44100, 16, 200);
        r.format.channels = 2;
        let err = validate_pair(&mono(44100, 16, 200), &r).unwrap_err();
        assert!(err.to_string().starts_with("R file not mono"));
    }

    #[test]
    fn bit_depth_mismatch() {
        let err = validate_pair(&mono(44100, 16, 300), &mono(44100, 24, 300)).unwrap_err();
        assert_eq!(err, FormatMismatch::BitsPerSample { left: 16, right: 24 });
    }

    #[test]
    fn format_tag_mismatch() {
        let l = mono(48000, 32, 400);
        let mut r = mono(48000, 32, 400);
        r.format.format_tag = FORMAT_IEEE_FLOAT;
        let err = validate_pair(&l, &r).unwrap_err();
        assert_eq!(err, FormatMismatch::FormatTag { left: 1, right: 3 });
    }

    #[test]
    fn sample_count_mismatch() {
        let err = validate_pair(&mono(44100, 16, 200), &mono(44100, 16, 202)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sample counts not equal: L 200 R 202 bytes"
        );
    }

    #[test]
    fn sample_rate_checked_before_bit_depth() {
        let err = validate_pair(&mono(44100, 16, 200), &mono(48000, 24, 300)).unwrap_err();
        assert!(matches!(err, FormatMismatch::SampleRate { .. }));
    }
}
