//! Interval model construction for circular sequences.
//!
//! Converts the ordered gene features of one sequence into two disjoint,
//! coordinate-sorted interval sets over the closed range `[1, L]`: the
//! intragenic (gene) intervals and their exact complement, the intergenic
//! intervals. The intergenic set is what the rotation point search walks.
//!
//! Features must arrive in ascending start order. The annotation reader
//! sorts on ingestion, and the builder still asserts the ordering during
//! its pairwise scan so an unsorted caller fails loudly instead of
//! silently producing wrong or missing gaps.

use crate::types::{CircstartError, Feature, Interval};

/// The intragenic/intergenic partition of one sequence's coordinate space.
///
/// Invariant: `intragenic` and `intergenic`, taken together as point sets,
/// exactly partition `[1, length]`, and the two sets are disjoint.
///
/// # Examples
///
/// ```rust
/// use circstart_core::intervals::IntervalModel;
/// use circstart_core::types::Feature;
///
/// let features = vec![Feature { seqid: "c1".to_string(), start: 4, stop: 6 }];
/// let model = IntervalModel::from_features(&features, 10)?;
///
/// assert_eq!(model.intergenic.len(), 2); // [1,3] and [7,10]
/// # Ok::<(), circstart_core::types::CircstartError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IntervalModel {
    /// Length `L` of the coordinate space, from the original (untrimmed)
    /// sequence.
    pub length: usize,
    /// Gene intervals in ascending coordinate order.
    pub intragenic: Vec<Interval>,
    /// Complement of the gene intervals within `[1, length]`, ascending.
    /// Maximal gaps only: a gap is emitted only when consecutive genes
    /// leave at least one base between them.
    pub intergenic: Vec<Interval>,
}

impl IntervalModel {
    /// Builds the partition from one identifier's features.
    ///
    /// Emits a leading gap `[1, first.start - 1]` when the first gene does
    /// not begin at position 1, a gap `[r1.stop + 1, r2.start - 1]` between
    /// consecutive genes separated by at least one base, and a trailing gap
    /// `[last.stop + 1, length]` when the last gene does not reach the end.
    /// An empty feature set yields a single intergenic interval spanning
    /// the whole sequence.
    ///
    /// # Errors
    ///
    /// - [`CircstartError::InvalidSequenceLength`] when `length` is zero.
    /// - [`CircstartError::FeatureOutOfRange`] when a feature lies outside
    ///   `[1, length]` (a zero start is also out of range).
    /// - [`CircstartError::UnsortedFeatures`] when a later feature starts
    ///   before an earlier one.
    pub fn from_features(features: &[Feature], length: usize) -> Result<Self, CircstartError> {
        if length == 0 {
            return Err(CircstartError::InvalidSequenceLength);
        }

        let mut intragenic = Vec::with_capacity(features.len());
        for feature in features {
            if feature.start < 1 || feature.stop > length || feature.start > feature.stop {
                return Err(CircstartError::FeatureOutOfRange {
                    start: feature.start,
                    stop: feature.stop,
                    length,
                });
            }
            intragenic.push(Interval::new(feature.start, feature.stop));
        }

        let mut intergenic = Vec::new();
        match intragenic.first() {
            Some(first) if first.begin > 1 => intergenic.push(Interval::new(1, first.begin - 1)),
            Some(_) => {}
            None => intergenic.push(Interval::new(1, length)),
        }

        for pair in intragenic.windows(2) {
            let (r1, r2) = (pair[0], pair[1]);
            if r2.begin < r1.begin {
                return Err(CircstartError::UnsortedFeatures);
            }
            // A gap exists only when at least one base separates the genes.
            if r2.begin >= r1.end + 2 {
                intergenic.push(Interval::new(r1.end + 1, r2.begin - 1));
            }
        }

        if let Some(last) = intragenic.last() {
            if last.end < length {
                intergenic.push(Interval::new(last.end + 1, length));
            }
        }

        Ok(Self {
            length,
            intragenic,
            intergenic,
        })
    }
}
