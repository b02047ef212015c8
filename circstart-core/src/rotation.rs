//! Rotation point selection and sequence rotation.
//!
//! The selector walks the intergenic intervals in reverse coordinate order
//! (rightmost first) and picks the nearest non-coding position at or
//! before the requested target, moving backward rather than forward so the
//! new origin stays as close as possible to the originally requested cut
//! point without bisecting a gene. The rotation itself is a pure
//! permutation of the sequence.

use crate::types::{Interval, RotationOutcome};

/// Searches the intergenic intervals for an admissible rotation offset.
///
/// `intergenic` must be in ascending coordinate order (as produced by
/// [`IntervalModel::from_features`](crate::intervals::IntervalModel::from_features));
/// the scan runs over it right to left and the first match wins:
///
/// - intervals entirely after the target are skipped;
/// - a target inside an interval is already legal (`newend == target`);
/// - otherwise the target lies inside a gene past the interval's right
///   edge, and the point snaps backward to that edge (`newend == r.end`).
///
/// An exhausted scan, including the empty intergenic set, yields
/// [`RotationOutcome::NoLegalPoint`].
///
/// # Examples
///
/// ```rust
/// use circstart_core::rotation::select_rotation_point;
/// use circstart_core::types::{Interval, RotationOutcome};
///
/// // genes cover [4,6] of a 10 bp sequence
/// let intergenic = vec![Interval::new(1, 3), Interval::new(7, 10)];
///
/// assert_eq!(
///     select_rotation_point(&intergenic, 9),
///     RotationOutcome::AlreadyLegal { newend: 9 }
/// );
/// assert_eq!(
///     select_rotation_point(&intergenic, 5),
///     RotationOutcome::Moved { newend: 3 }
/// );
/// ```
#[must_use]
pub fn select_rotation_point(intergenic: &[Interval], target: usize) -> RotationOutcome {
    for region in intergenic.iter().rev() {
        if target < region.begin {
            continue;
        }
        if target <= region.end {
            return RotationOutcome::AlreadyLegal { newend: target };
        }
        // region.end < target: the target sits inside a gene to the right
        return RotationOutcome::Moved { newend: region.end };
    }
    RotationOutcome::NoLegalPoint
}

/// Rotates a sequence left by `offset` characters.
///
/// Returns `sequence[offset..] + sequence[..offset]`. The offset is taken
/// modulo the sequence length, so rotating by the full length (or by zero)
/// reproduces the input. No characters are added, removed, or case-changed.
#[must_use]
pub fn rotate_left(sequence: &[u8], offset: usize) -> Vec<u8> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let cut = offset % sequence.len();
    let mut rotated = Vec::with_capacity(sequence.len());
    rotated.extend_from_slice(&sequence[cut..]);
    rotated.extend_from_slice(&sequence[..cut]);
    rotated
}
