use crate::types::RotationOutcome;

/// One rotated (or deliberately unrotated) output sequence.
#[derive(Debug, Clone)]
pub struct RotatedRecord {
    /// Sequence identifier.
    pub id: String,
    /// Header text after the identifier, carried through unchanged.
    pub description: Option<String>,
    /// How the rotation point search concluded for this sequence.
    pub outcome: RotationOutcome,
    /// Output residues: the trimmed sequence, left-rotated when the
    /// outcome moved the origin.
    pub residues: Vec<u8>,
    /// Length `L` of the original (untrimmed) sequence, the coordinate
    /// space the features were annotated on.
    pub original_length: usize,
    /// Length of the trimmed sequence, the rotation target.
    pub trimmed_length: usize,
}

impl RotatedRecord {
    /// The full output header text (identifier plus description).
    #[must_use]
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.id, description),
            None => self.id.clone(),
        }
    }
}

/// Counters summarizing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationSummary {
    /// Sequences present in the original catalog.
    pub total: usize,
    /// Sequences whose origin was moved.
    pub rotated: usize,
    /// Sequences whose target position was already intergenic.
    pub already_legal: usize,
    /// Sequences emitted unrotated because no legal point exists.
    pub unrotatable: usize,
    /// Sequences skipped because no feature was annotated for them.
    pub skipped_no_features: usize,
    /// Sequences skipped because their inputs were inconsistent
    /// (missing trimmed record, features outside the coordinate space).
    pub skipped_invalid: usize,
}

/// Result of one origin-rotation run.
///
/// Records appear in the original catalog's order. Identifiers with no
/// annotated feature are absent from `records`; every other anomaly is
/// visible either as an unrotated record with a
/// [`RotationOutcome::NoLegalPoint`] outcome or as a warning.
#[derive(Debug, Default)]
pub struct RotationReport {
    /// Output records in catalog order.
    pub records: Vec<RotatedRecord>,
    /// Data-quality warnings recorded across ingestion and rotation.
    pub warnings: Vec<String>,
    /// Run counters.
    pub summary: RotationSummary,
}
