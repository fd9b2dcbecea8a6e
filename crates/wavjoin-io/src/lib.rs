//! WAV container codec and file pipeline for wavjoin.
//!
//! This crate provides:
//!
//! - **Container codec**: [`WavReader`] and [`WavWriter`] for RIFF/WAVE PCM at
//!   any byte-aligned bit depth
//! - **File helpers**: [`read_wav_info`], [`read_wav`] and [`write_wav`]
//! - **Join pipeline**: [`merge_pair`] and [`merge_all`] turning `name.L.wav` +
//!   `name.R.wav` into `name.wav`
//! - **Candidate listing**: [`list_candidates`] for directory scans
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wavjoin_core::NamingScheme;
//! use wavjoin_io::{MergeOptions, list_candidates, merge_all};
//!
//! let dir = std::path::Path::new("takes");
//! let names = list_candidates(dir, "wav")?;
//! for outcome in merge_all(dir, &names, &NamingScheme::default(), MergeOptions::default()) {
//!     match outcome.result {
//!         Ok(report) => println!("wrote {}", report.output.display()),
//!         Err(e) => eprintln!("{}: {e}", outcome.output_name),
//!     }
//! }
//! ```

mod chunk;
mod error;
mod file;
mod pipeline;
mod reader;
mod scan;
mod writer;

pub use error::{ContainerError, Error, ErrorKind};
pub use file::{read_wav, read_wav_info, write_wav};
pub use pipeline::{MergeOptions, MergeReport, PairOutcome, merge_all, merge_entry, merge_pair};
pub use reader::WavReader;
pub use scan::list_candidates;
pub use writer::WavWriter;

/// Convenience result type for wavjoin I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
