use std::fmt;

use thiserror::Error;

/// A gene feature parsed from an annotation table.
///
/// Coordinates are 1-based and inclusive, matching the tab-delimited
/// annotation source (identifier at column 0, start/stop at columns 3/4).
/// `start <= stop` is enforced at parse time.
///
/// # Examples
///
/// ```rust
/// use circstart_core::types::Feature;
///
/// let feature = Feature {
///     seqid: "contig_1".to_string(),
///     start: 4,
///     stop: 6,
/// };
/// assert_eq!(feature.stop - feature.start + 1, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Sequence identifier the feature is annotated on.
    pub seqid: String,
    /// 1-based inclusive start coordinate.
    pub start: usize,
    /// 1-based inclusive stop coordinate.
    pub stop: usize,
}

/// A closed interval `[begin, end]` on the 1-based sequence coordinate space.
///
/// Intervals are never empty: `begin <= end` holds for every constructed
/// value. Intragenic intervals cover annotated genes; intergenic intervals
/// are their exact complement within `[1, L]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// 1-based inclusive left boundary.
    pub begin: usize,
    /// 1-based inclusive right boundary.
    pub end: usize,
}

impl Interval {
    /// Creates a closed interval `[begin, end]`.
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of positions covered by the interval.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.begin + 1
    }

    /// A closed interval always covers at least one position.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Tests whether a 1-based position lies inside the interval.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.begin <= position && position <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// Outcome of the rotation point search.
///
/// The search walks the intergenic intervals from the right and either
/// accepts the requested target position, snaps backward to the nearest
/// intergenic right boundary, or reports that no legal point exists.
/// The no-legal-point case is an explicit outcome rather than a silent
/// drop so callers can audit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The target position already lies inside an intergenic region;
    /// the sequence is emitted unrotated (`newend == newlen`).
    AlreadyLegal {
        /// Chosen rotation offset, equal to the target length.
        newend: usize,
    },
    /// The target position fell inside a gene; the rotation point was
    /// snapped backward to the right boundary of the nearest intergenic
    /// region at or before the target.
    Moved {
        /// Chosen rotation offset (`newend < newlen`).
        newend: usize,
    },
    /// The scan exhausted every intergenic interval without a match
    /// (including the empty intergenic set). The sequence is emitted
    /// unrotated and the anomaly is recorded as a warning.
    NoLegalPoint,
}

impl RotationOutcome {
    /// The chosen rotation offset, if one was found.
    #[must_use]
    pub const fn newend(&self) -> Option<usize> {
        match self {
            Self::AlreadyLegal { newend } | Self::Moved { newend } => Some(*newend),
            Self::NoLegalPoint => None,
        }
    }

    /// Whether applying this outcome permutes the sequence.
    #[must_use]
    pub const fn is_rotated(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

impl fmt::Display for RotationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyLegal { newend } => write!(f, "already legal at {newend}"),
            Self::Moved { newend } => write!(f, "moved to {newend}"),
            Self::NoLegalPoint => write!(f, "no legal rotation point"),
        }
    }
}

/// Errors produced while reading inputs or building the interval model.
#[derive(Debug, Error)]
pub enum CircstartError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing a FASTA input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A feature line did not match the expected table schema
    #[error("malformed feature line {line}: {reason}")]
    MalformedFeature {
        /// 1-based line number within the source table.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },
    /// Features violated the ascending-start ordering precondition
    #[error("features are not sorted by start coordinate")]
    UnsortedFeatures,
    /// A feature lies outside the sequence coordinate space
    #[error("feature {start}..{stop} outside sequence of length {length}")]
    FeatureOutOfRange {
        /// 1-based inclusive start of the offending feature.
        start: usize,
        /// 1-based inclusive stop of the offending feature.
        stop: usize,
        /// Length of the coordinate space the feature was checked against.
        length: usize,
    },
    /// Sequence length is invalid for interval construction
    #[error("invalid sequence length")]
    InvalidSequenceLength,
    /// Strict mode promoted recorded data-quality warnings to an error
    #[error("strict mode: {0} data-quality warning(s) recorded")]
    StrictMode(usize),
}
