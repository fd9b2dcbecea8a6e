//! Per-pair join pipeline: decode, validate, interleave, encode.
//!
//! Each pair is processed on its own. A fault aborts only the pair it
//! occurs in; [`merge_all`] returns one [`PairOutcome`] per output name.

use crate::error::Error;
use crate::file::{open_reader, write_wav};
use crate::Result;
use std::path::{Path, PathBuf};
use wavjoin_core::{
    AudioFormat, ChannelPair, NamingScheme, PairError, interleave, resolve_pairs, validate_pair,
};

/// What to do around a successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Remove both source files once the output is complete.
    pub delete_sources: bool,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            delete_sources: false,
            overwrite: true,
        }
    }
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Written stereo file.
    pub output: PathBuf,
    /// Left source file.
    pub left: PathBuf,
    /// Right source file.
    pub right: PathBuf,
    /// Format of the output (two channels).
    pub format: AudioFormat,
    /// Frames written.
    pub sample_count: u32,
    /// Whether the sources were removed.
    pub sources_deleted: bool,
}

/// Outcome for one output name.
#[derive(Debug)]
pub struct PairOutcome {
    /// Stereo output file name.
    pub output_name: String,
    /// Join result.
    pub result: Result<MergeReport>,
}

/// Join the two sides of `pair`, reading and writing inside `dir`.
///
/// The sources are closed before the output is written, the output is staged
/// and only moved into place once complete, and the sources are deleted (if
/// requested) only after that.
pub fn merge_pair(dir: &Path, pair: &ChannelPair, options: MergeOptions) -> Result<MergeReport> {
    let (left_name, right_name) = pair.sources()?;
    let left_path = dir.join(left_name);
    let right_path = dir.join(right_name);
    let output = dir.join(&pair.output_name);

    if output == left_path || output == right_path {
        return Err(Error::OutputIsSource(output));
    }
    if !options.overwrite && output.exists() {
        return Err(Error::OutputExists(output));
    }

    let (format, stereo) = {
        tracing::info!(file = %left_path.display(), "opening left source");
        let mut left = open_reader(&left_path)?;
        tracing::info!(file = %right_path.display(), "opening right source");
        let mut right = open_reader(&right_path)?;

        let mono = validate_pair(&left.info(), &right.info()).map_err(|source| {
            Error::Incompatible {
                left: left_path.clone(),
                right: right_path.clone(),
                source,
            }
        })?;

        let left_samples = left
            .read_all()
            .map_err(|e| Error::container(&left_path, e))?;
        let right_samples = right
            .read_all()
            .map_err(|e| Error::container(&right_path, e))?;

        (mono.with_channels(2), interleave(&left_samples, &right_samples))
    };

    tracing::info!(
        file = %output.display(),
        samples = stereo.len(),
        "writing stereo output"
    );
    write_wav(&output, format, &stereo, options.overwrite)?;

    if options.delete_sources {
        for source in [&left_path, &right_path] {
            std::fs::remove_file(source).map_err(|e| Error::io(source, e))?;
        }
        tracing::info!(left = %left_path.display(), right = %right_path.display(), "removed sources");
    }

    Ok(MergeReport {
        output,
        left: left_path,
        right: right_path,
        format,
        sample_count: stereo.len() as u32,
        sources_deleted: options.delete_sources,
    })
}

/// Process one entry of a resolved pair set.
pub fn merge_entry(
    dir: &Path,
    output_name: &str,
    entry: &std::result::Result<ChannelPair, PairError>,
    options: MergeOptions,
) -> PairOutcome {
    let result = match entry {
        Ok(pair) => merge_pair(dir, pair, options),
        Err(conflict) => Err(Error::Pair(conflict.clone())),
    };
    match &result {
        Ok(report) => tracing::info!(output = output_name, samples = report.sample_count, "joined"),
        Err(e) => tracing::warn!(output = output_name, error = %e, "pair failed"),
    }
    PairOutcome {
        output_name: output_name.to_string(),
        result,
    }
}

/// Resolve `names` into pairs and join every pair found in `dir`.
///
/// Always processes every output name; failures are reported in the
/// returned outcomes, in output-name order.
pub fn merge_all<S: AsRef<str>>(
    dir: &Path,
    names: &[S],
    scheme: &NamingScheme,
    options: MergeOptions,
) -> Vec<PairOutcome> {
    let pairs = resolve_pairs(names.iter().map(AsRef::as_ref), scheme);
    tracing::debug!(pairs = pairs.len(), "resolved pairs");
    pairs
        .iter()
        .map(|(output_name, entry)| merge_entry(dir, output_name, entry, options))
        .collect()
}
