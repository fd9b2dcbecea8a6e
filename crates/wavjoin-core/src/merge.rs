//! Mono to stereo interleaving.

use crate::sample::SampleSequence;

/// Zip two mono sequences into one stereo sequence.
///
/// Frame `i` of the result is `(left[i], right[i])`. The output owns fresh
/// storage; both inputs are left untouched.
///
/// # Panics
///
/// Panics if either input is not mono or if their lengths differ. Callers
/// run [`validate_pair`](crate::validate_pair) first, which rules both out
/// for decoded streams.
pub fn interleave(left: &SampleSequence, right: &SampleSequence) -> SampleSequence {
    assert_eq!(left.channels(), 1, "left input must be mono");
    assert_eq!(right.channels(), 1, "right input must be mono");
    assert_eq!(
        left.len(),
        right.len(),
        "left and right inputs must have the same length"
    );

    SampleSequence::from_stereo_frames(
        left.iter()
            .zip(right.iter())
            .map(|(l, r)| (l.first(), r.first())),
    )
}
