//! Error types for the codec and the join pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;
use wavjoin_core::{ChannelMismatch, FormatMismatch, PairError};

/// Malformed or unsupported container data.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The stream does not start with `RIFF`.
    #[error("not a RIFF file (found {0:?})")]
    NotRiff([u8; 4]),

    /// The RIFF form type is not `WAVE`.
    #[error("not a WAVE file (found {0:?})")]
    NotWave([u8; 4]),

    /// A required chunk never appeared.
    #[error("missing '{0}' chunk")]
    MissingChunk(&'static str),

    /// The stream ended inside a header or the sample data.
    #[error("unexpected end of file in {0}")]
    Truncated(&'static str),

    /// The `fmt ` chunk is shorter than the 16 fixed bytes.
    #[error("fmt chunk too short: {0} bytes (need 16)")]
    FmtTooShort(u32),

    /// Compressed or otherwise unsupported encoding.
    #[error("unsupported audio format tag {0:#06x}")]
    UnsupportedFormatTag(u16),

    /// Channel count other than 1 or 2.
    #[error("unsupported channel count {0} (expected 1 or 2)")]
    InvalidChannelCount(u16),

    /// Bit depth not divisible by 8.
    #[error("bits per sample {0} is not a multiple of 8")]
    UnalignedBitDepth(u16),

    /// Bit depth of zero or above 64.
    #[error("unsupported bits per sample {0} (expected 8 to 64)")]
    UnsupportedBitDepth(u16),

    /// Declared block align disagrees with channels and bit depth.
    #[error("block align {declared} does not match {expected} for the declared channels and bit depth")]
    BlockAlignMismatch {
        /// Value from the fmt chunk.
        declared: u16,
        /// `channels * bits_per_sample / 8`.
        expected: u16,
    },

    /// Data chunk length is not a whole number of frames.
    #[error("data chunk length {data_len} is not a multiple of block align {block_align}")]
    UnalignedData {
        /// Declared data chunk length.
        data_len: u32,
        /// Bytes per frame.
        block_align: u16,
    },

    /// More samples requested than the data chunk holds.
    #[error("requested {requested} samples but only {remaining} remain")]
    ReadPastEnd {
        /// Samples asked for.
        requested: u32,
        /// Samples left in the data chunk.
        remaining: u32,
    },

    /// Output would not fit the 32-bit RIFF size fields.
    #[error("{samples} samples of {block_align} bytes exceed the RIFF size limit")]
    TooLarge {
        /// Declared sample count.
        samples: u32,
        /// Bytes per frame.
        block_align: u16,
    },

    /// More samples written than the header declared.
    #[error("attempted to write {attempted} samples, header declares {declared}")]
    TooManySamples {
        /// Sample count fixed in the header.
        declared: u32,
        /// Total the write would have reached.
        attempted: u64,
    },

    /// Writer finished before the declared sample count was reached.
    #[error("wrote {written} of {declared} declared samples")]
    Incomplete {
        /// Sample count fixed in the header.
        declared: u32,
        /// Samples actually written.
        written: u32,
    },

    /// A sample's channel count does not match the stream.
    #[error(transparent)]
    ChannelMismatch(#[from] ChannelMismatch),

    /// Underlying read/write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Category of a pipeline fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing chunk, misaligned data, unsupported layout.
    MalformedContainer,
    /// The two sides of a pair cannot be combined.
    IncompatibleFormat,
    /// Two files claim the same side of one output.
    NamingConflict,
    /// One side of a pair never resolved.
    OrphanPair,
    /// File open/read/write/delete failure.
    IoFailure,
}

/// Errors from processing one pair or file.
#[derive(Debug, Error)]
pub enum Error {
    /// A source or output file is malformed.
    #[error("{}: {source}", .path.display())]
    Container {
        /// File being decoded or encoded.
        path: PathBuf,
        /// Codec error.
        #[source]
        source: ContainerError,
    },

    /// The left and right files cannot be joined.
    #[error("{} + {}: {source}", .left.display(), .right.display())]
    Incompatible {
        /// Left source file.
        left: PathBuf,
        /// Right source file.
        right: PathBuf,
        /// First mismatch found.
        #[source]
        source: FormatMismatch,
    },

    /// Naming conflict or orphaned side.
    #[error(transparent)]
    Pair(#[from] PairError),

    /// The output exists and overwriting is disabled.
    #[error("output '{}' already exists", .0.display())]
    OutputExists(PathBuf),

    /// The output name resolves to one of the pair's own sources.
    #[error("output '{}' is also a source of its pair", .0.display())]
    OutputIsSource(PathBuf),

    /// Filesystem failure.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a container error for `path`.
    pub fn container(path: impl Into<PathBuf>, source: ContainerError) -> Self {
        Error::Container {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The fault category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Container {
                source: ContainerError::Io(_),
                ..
            }
            | Error::Io { .. }
            | Error::OutputExists(_) => ErrorKind::IoFailure,
            Error::Container { .. } => ErrorKind::MalformedContainer,
            Error::Incompatible { .. } => ErrorKind::IncompatibleFormat,
            Error::Pair(PairError::NamingConflict { .. }) | Error::OutputIsSource(_) => {
                ErrorKind::NamingConflict
            }
            Error::Pair(PairError::Orphan { .. } | PairError::Empty { .. }) => ErrorKind::OrphanPair,
        }
    }

    /// The file this error is about, if it concerns a single file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Container { path, .. }
            | Error::Io { path, .. }
            | Error::OutputExists(path)
            | Error::OutputIsSource(path) => Some(path),
            Error::Incompatible { .. } | Error::Pair(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use wavjoin_core::Side;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn container_display_names_file() {
        let err = Error::container("/takes/a.L.wav", ContainerError::MissingChunk("data"));
        let msg = err.to_string();
        assert_eq!(msg, "/takes/a.L.wav: missing 'data' chunk");
        assert_eq!(err.kind(), ErrorKind::MalformedContainer);
        assert!(err.source().is_some());
    }

    #[test]
    fn incompatible_display_names_both_files() {
        let err = Error::Incompatible {
            left: "a.L.wav".into(),
            right: "a.R.wav".into(),
            source: FormatMismatch::SampleRate {
                left: 44100,
                right: 48000,
            },
        };
        assert_eq!(
            err.to_string(),
            "a.L.wav + a.R.wav: Sample rates not equal: L 44100 R 48000"
        );
        assert_eq!(err.kind(), ErrorKind::IncompatibleFormat);
        assert!(err.path().is_none());
    }

    #[test]
    fn pair_kinds() {
        let conflict = Error::from(PairError::NamingConflict {
            output: "a.wav".into(),
            side: Side::Left,
            first: "a.L.wav".into(),
            second: "b.L.wav".into(),
        });
        assert_eq!(conflict.kind(), ErrorKind::NamingConflict);

        let orphan = Error::from(PairError::Orphan {
            output: "a.wav".into(),
            missing: Side::Right,
            present: "a.L.wav".into(),
        });
        assert_eq!(orphan.kind(), ErrorKind::OrphanPair);
    }

    #[test]
    fn output_is_source_is_naming_conflict() {
        let err = Error::OutputIsSource("/takes/x.L.wav".into());
        assert_eq!(err.kind(), ErrorKind::NamingConflict);
        assert_eq!(err.path(), Some(Path::new("/takes/x.L.wav")));
        assert_eq!(
            err.to_string(),
            "output '/takes/x.L.wav' is also a source of its pair"
        );
    }

    #[test]
    fn io_inside_container_is_io_failure() {
        let err = Error::container("x.wav", ContainerError::Io(mock_io_err()));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(err.path(), Some(Path::new("x.wav")));
    }

    #[test]
    fn io_display() {
        let err = Error::io("/a/b.wav", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("/a/b.wav"), "got: {msg}");
        assert!(msg.contains("mock"), "got: {msg}");
    }
}
