//! wavjoin core - the I/O-free half of the L/R to stereo joiner.
//!
//! This crate holds everything that can be reasoned about without touching a
//! file: the PCM format descriptor, sample containers, the signed bit packing
//! used by the WAV codec, and the three pipeline stages that sit between
//! decoding and encoding.
//!
//! # Pipeline Stages
//!
//! - [`resolve_pairs`] - groups `name.L.wav` / `name.R.wav` style file names
//!   into [`ChannelPair`]s keyed by the stereo output name
//! - [`validate_pair`] - checks that two decoded mono streams can be combined
//!   and returns the shared [`AudioFormat`]
//! - [`interleave`] - zips two mono [`SampleSequence`]s into one stereo sequence
//!
//! # Data Types
//!
//! - [`AudioFormat`] - the `fmt ` chunk fields; block align and byte rate are derived
//! - [`StreamInfo`] - a format plus the declared data chunk length
//! - [`Sample`] / [`SampleSequence`] - signed integer sample frames
//!
//! # Example
//!
//! ```rust
//! use wavjoin_core::{NamingScheme, resolve_pairs};
//!
//! let names = ["song.L.wav", "song.R.wav", "notes.txt"];
//! let pairs = resolve_pairs(names, &NamingScheme::default());
//!
//! let pair = pairs.get("song.wav").unwrap().as_ref().unwrap();
//! assert_eq!(pair.left.as_deref(), Some("song.L.wav"));
//! assert_eq!(pair.right.as_deref(), Some("song.R.wav"));
//! ```

pub mod format;
pub mod merge;
pub mod pair;
pub mod pcm;
pub mod sample;
pub mod validate;

pub use format::{
    AudioFormat, FORMAT_EXTENSIBLE, FORMAT_IEEE_FLOAT, FORMAT_PCM, StreamInfo,
};
pub use merge::interleave;
pub use pair::{ChannelPair, NamingScheme, PairError, PairSet, Side, resolve_pairs};
pub use pcm::{decode_sample, encode_sample, from_unsigned, signed_range, to_unsigned};
pub use sample::{ChannelMismatch, Sample, SampleSequence};
pub use validate::{FormatMismatch, validate_pair};
