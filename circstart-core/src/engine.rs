//! Per-identifier orchestration of the rotation pipeline.
//!
//! For every sequence in the original (untrimmed) catalog the engine
//! derives the intergenic intervals from the identifier's features over
//! the original length, searches them for a rotation point at the trimmed
//! length, and rotates the trimmed residues at the chosen point.
//! Identifiers are independent, so the per-identifier work fans out across
//! a rayon thread pool; collection restores catalog order.

use std::path::Path;

use rayon::prelude::*;

use crate::annotation::AnnotationSet;
use crate::config::CircstartConfig;
use crate::intervals::IntervalModel;
use crate::results::{RotatedRecord, RotationReport, RotationSummary};
use crate::rotation::{rotate_left, select_rotation_point};
use crate::sequence::io::read_fasta_catalog;
use crate::sequence::{SequenceCatalog, SequenceRecord};
use crate::types::{CircstartError, RotationOutcome};

/// How one identifier's processing concluded.
enum Disposition {
    /// An output record was produced (rotated or deliberately unrotated).
    Emitted(Box<RotatedRecord>),
    /// No feature is annotated for the identifier; no output is produced.
    NoFeatures,
    /// Features exist but the trimmed catalog has no such sequence.
    MissingTrimmed(String),
    /// Interval construction rejected the identifier's features.
    Invalid { id: String, reason: String },
}

/// Origin-rotation engine.
///
/// # Examples
///
/// ```rust,no_run
/// use circstart_core::OriginRotator;
/// use circstart_core::config::CircstartConfig;
///
/// let rotator = OriginRotator::new(CircstartConfig::default());
/// let (report, _annotations) =
///     rotator.rotate_files("trimmed.fa", "original.fa", &["genes.gff"])?;
///
/// println!("{} sequences rotated", report.summary.rotated);
/// # Ok::<(), circstart_core::types::CircstartError>(())
/// ```
#[derive(Debug, Default)]
pub struct OriginRotator {
    /// Configuration options for the run.
    pub config: CircstartConfig,
}

impl OriginRotator {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: CircstartConfig) -> Self {
        Self { config }
    }

    /// Loads the three input sources and runs the rotation pipeline.
    ///
    /// `trimmed` and `original` are FASTA files; `annotations` are
    /// tab-delimited feature tables, read in argument order. Returns the
    /// report together with the loaded annotation set so callers can write
    /// the combined annotation output.
    ///
    /// # Errors
    ///
    /// Returns [`CircstartError`] when any input cannot be opened or
    /// parsed at the file level. Per-line and per-identifier problems are
    /// warnings in the report, not errors.
    pub fn rotate_files<P, Q, A>(
        &self,
        trimmed: P,
        original: Q,
        annotations: &[A],
    ) -> Result<(RotationReport, AnnotationSet), CircstartError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        A: AsRef<Path>,
    {
        let trimmed_catalog = read_fasta_catalog(trimmed)?;
        let original_catalog = read_fasta_catalog(original)?;

        let mut annotation_set = AnnotationSet::new();
        for path in annotations {
            annotation_set.read_file(path)?;
        }
        annotation_set.finish();

        let report = self.rotate_catalogs(&trimmed_catalog, &original_catalog, &annotation_set);
        Ok((report, annotation_set))
    }

    /// Runs the rotation pipeline over already-loaded inputs.
    ///
    /// Every identifier present in `original` with at least one feature
    /// yields an output record; identifiers without features are skipped
    /// and counted. Warnings from catalog construction and annotation
    /// ingestion are carried into the report.
    #[must_use]
    pub fn rotate_catalogs(
        &self,
        trimmed: &SequenceCatalog,
        original: &SequenceCatalog,
        annotations: &AnnotationSet,
    ) -> RotationReport {
        let mut warnings: Vec<String> = Vec::new();
        warnings.extend(original.warnings().iter().cloned());
        warnings.extend(trimmed.warnings().iter().cloned());
        warnings.extend(annotations.warnings().iter().cloned());

        let originals: Vec<&SequenceRecord> = original.iter().collect();
        let dispositions: Vec<Disposition> = originals
            .par_iter()
            .map(|record| process_record(record, trimmed, annotations))
            .collect();

        let mut summary = RotationSummary {
            total: originals.len(),
            ..Default::default()
        };
        let mut records = Vec::new();
        for disposition in dispositions {
            match disposition {
                Disposition::Emitted(record) => {
                    match record.outcome {
                        RotationOutcome::Moved { .. } => summary.rotated += 1,
                        RotationOutcome::AlreadyLegal { .. } => summary.already_legal += 1,
                        RotationOutcome::NoLegalPoint => {
                            summary.unrotatable += 1;
                            warnings.push(format!(
                                "no legal rotation point for '{}'; sequence emitted unrotated",
                                record.id
                            ));
                        }
                    }
                    records.push(*record);
                }
                Disposition::NoFeatures => summary.skipped_no_features += 1,
                Disposition::MissingTrimmed(id) => {
                    summary.skipped_invalid += 1;
                    warnings.push(format!(
                        "'{id}' has features but no trimmed sequence; skipped"
                    ));
                }
                Disposition::Invalid { id, reason } => {
                    summary.skipped_invalid += 1;
                    warnings.push(format!("skipping '{id}': {reason}"));
                }
            }
        }

        RotationReport {
            records,
            warnings,
            summary,
        }
    }
}

/// Runs the interval builder, point selector, and rewriter for one
/// identifier.
fn process_record(
    record: &SequenceRecord,
    trimmed: &SequenceCatalog,
    annotations: &AnnotationSet,
) -> Disposition {
    let Some(features) = annotations.features_for(&record.id) else {
        return Disposition::NoFeatures;
    };
    let Some(trimmed_record) = trimmed.get(&record.id) else {
        return Disposition::MissingTrimmed(record.id.clone());
    };

    let model = match IntervalModel::from_features(features, record.len()) {
        Ok(model) => model,
        Err(err) => {
            return Disposition::Invalid {
                id: record.id.clone(),
                reason: err.to_string(),
            }
        }
    };

    let outcome = select_rotation_point(&model.intergenic, trimmed_record.len());
    let residues = match outcome {
        RotationOutcome::Moved { newend } => rotate_left(&trimmed_record.residues, newend),
        RotationOutcome::AlreadyLegal { .. } | RotationOutcome::NoLegalPoint => {
            trimmed_record.residues.clone()
        }
    };

    Disposition::Emitted(Box::new(RotatedRecord {
        id: record.id.clone(),
        description: trimmed_record.description.clone(),
        outcome,
        residues,
        original_length: record.len(),
        trimmed_length: trimmed_record.len(),
    }))
}
