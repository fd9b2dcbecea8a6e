//! Left/right file pairing by name.
//!
//! Files are paired purely by name: `take1.L.wav` and `take1.R.wav` both map
//! to the stereo output `take1.wav` under the default [`NamingScheme`].
//! [`resolve_pairs`] is a pure function over a list of names; it keeps no
//! state between calls.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Which channel of the stereo output a source file provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left channel.
    Left,
    /// Right channel.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "L",
            Side::Right => "R",
        })
    }
}

/// Pairing faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    /// Two files claim the same side of one output.
    #[error("mis-matched {side} files for '{output}': '{first}' and '{second}'")]
    NamingConflict {
        /// Stereo output name both files map to.
        output: String,
        /// The side claimed twice.
        side: Side,
        /// File that claimed the side first.
        first: String,
        /// File that claimed it again.
        second: String,
    },

    /// Only one side of a pair was found.
    #[error("no {missing} file for '{output}' (found only '{present}')")]
    Orphan {
        /// Stereo output name.
        output: String,
        /// The side that never resolved.
        missing: Side,
        /// The file that did resolve.
        present: String,
    },

    /// Neither side of a pair was found.
    #[error("no source files for '{output}'")]
    Empty {
        /// Stereo output name.
        output: String,
    },
}

/// Name markers identifying left, right and stereo files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    /// Substring marking a left-channel file (default `.L.wav`).
    pub left_marker: String,
    /// Substring marking a right-channel file (default `.R.wav`).
    pub right_marker: String,
    /// Replacement for the marker in the output name (default `.wav`).
    pub stereo_marker: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            left_marker: ".L.wav".to_string(),
            right_marker: ".R.wav".to_string(),
            stereo_marker: ".wav".to_string(),
        }
    }
}

impl NamingScheme {
    /// Create a scheme from explicit markers.
    pub fn new(
        left_marker: impl Into<String>,
        right_marker: impl Into<String>,
        stereo_marker: impl Into<String>,
    ) -> Self {
        Self {
            left_marker: left_marker.into(),
            right_marker: right_marker.into(),
            stereo_marker: stereo_marker.into(),
        }
    }

    /// Classify a file name as a left or right source and derive its output
    /// name by replacing the first occurrence of the marker.
    ///
    /// The left marker is checked first. Returns `None` for names matching
    /// neither marker.
    pub fn classify(&self, name: &str) -> Option<(Side, String)> {
        if !self.left_marker.is_empty() && name.contains(&self.left_marker) {
            let output = name.replacen(&self.left_marker, &self.stereo_marker, 1);
            return Some((Side::Left, output));
        }
        if !self.right_marker.is_empty() && name.contains(&self.right_marker) {
            let output = name.replacen(&self.right_marker, &self.stereo_marker, 1);
            return Some((Side::Right, output));
        }
        None
    }
}

/// The left and right sources of one stereo output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPair {
    /// Stereo output file name.
    pub output_name: String,
    /// Left-channel source file, once discovered.
    pub left: Option<String>,
    /// Right-channel source file, once discovered.
    pub right: Option<String>,
}

impl ChannelPair {
    /// Pair with neither side filled.
    pub fn empty(output_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            left: None,
            right: None,
        }
    }

    /// Pair with a single side filled.
    pub fn single(output_name: impl Into<String>, side: Side, source: impl Into<String>) -> Self {
        let mut pair = Self::empty(output_name);
        match side {
            Side::Left => pair.left = Some(source.into()),
            Side::Right => pair.right = Some(source.into()),
        }
        pair
    }

    /// Source file for `side`.
    pub fn side(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    /// Both sides are present.
    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Combine two partial pairs for the same output.
    ///
    /// Fails if both already fill the same side.
    pub fn merge(self, other: ChannelPair) -> Result<ChannelPair, PairError> {
        for side in [Side::Left, Side::Right] {
            if let (Some(first), Some(second)) = (self.side(side), other.side(side)) {
                return Err(PairError::NamingConflict {
                    output: self.output_name.clone(),
                    side,
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }

        Ok(ChannelPair {
            output_name: self.output_name,
            left: self.left.or(other.left),
            right: self.right.or(other.right),
        })
    }

    /// The `(left, right)` source names of a complete pair.
    pub fn sources(&self) -> Result<(&str, &str), PairError> {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(l), Some(r)) => Ok((l, r)),
            (Some(l), None) => Err(PairError::Orphan {
                output: self.output_name.clone(),
                missing: Side::Right,
                present: l.to_string(),
            }),
            (None, Some(r)) => Err(PairError::Orphan {
                output: self.output_name.clone(),
                missing: Side::Left,
                present: r.to_string(),
            }),
            (None, None) => Err(PairError::Empty {
                output: self.output_name.clone(),
            }),
        }
    }
}

/// Resolved pairs keyed by output name, in name order.
///
/// An entry is `Err` when its names conflicted. Entries that are `Ok` may
/// still be one-sided; check them with [`ChannelPair::sources`].
pub type PairSet = BTreeMap<String, Result<ChannelPair, PairError>>;

/// Group candidate file names into channel pairs.
///
/// Names matching neither marker are ignored. A naming conflict poisons only
/// its own output name; later names for that output are skipped.
pub fn resolve_pairs<I, S>(names: I, scheme: &NamingScheme) -> PairSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = PairSet::new();

    for name in names {
        let name = name.as_ref();
        let Some((side, output)) = scheme.classify(name) else {
            continue;
        };

        let single = ChannelPair::single(output.clone(), side, name);
        let merged = match pairs.remove(&output) {
            None => Ok(single),
            Some(Ok(existing)) => existing.merge(single),
            Some(Err(conflict)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(file = name, output = %output, "skipping file for conflicted output");
                Err(conflict)
            }
        };
        pairs.insert(output, merged);
    }

    pairs
}
