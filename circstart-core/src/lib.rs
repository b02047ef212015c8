//! # Circstart - Origin Rotation for Circular Sequences
//!
//! Rewrites circular genomic sequences so their origin (position 1) falls
//! inside a non-coding (intergenic) region rather than inside a gene,
//! after an upstream trimming step may have shortened the sequence.
//!
//! ## Overview
//!
//! For every sequence identifier the pipeline consumes three inputs: the
//! original (untrimmed) FASTA record supplying the coordinate-space
//! length, the trimmed FASTA record to rotate, and the gene features
//! annotated on the original coordinates. It complements the gene
//! intervals within `[1, L]`, searches the resulting intergenic intervals
//! for the nearest legal rotation point at or before the trimmed length,
//! and emits the trimmed sequence rotated at that point, together with a
//! combined copy of the annotation tables.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use circstart_core::OriginRotator;
//! use circstart_core::config::CircstartConfig;
//!
//! let rotator = OriginRotator::new(CircstartConfig::default());
//! let (report, _annotations) =
//!     rotator.rotate_files("trimmed.fa", "original.fa", &["genes.gff"])?;
//!
//! println!(
//!     "rotated {} of {} sequences",
//!     report.summary.rotated, report.summary.total
//! );
//! # Ok::<(), circstart_core::types::CircstartError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`annotation`]: feature-table reading and the per-identifier map
//! - [`config`]: run configuration
//! - [`engine`]: per-identifier orchestration of the pipeline
//! - [`intervals`]: intragenic/intergenic interval model construction
//! - [`output`]: rotated-FASTA and combined-annotation writers
//! - [`results`]: run report, output records, and counters
//! - [`rotation`]: rotation point selection and sequence rotation
//! - [`sequence`]: FASTA records, catalogs, and I/O
//! - [`types`]: core data types and the error enum
//!
//! ## Error Handling
//!
//! File-level failures return [`Result<T, CircstartError>`](types::CircstartError).
//! Per-line and per-identifier problems never abort a batch: malformed
//! feature lines, unsorted features, identifiers missing a trimmed
//! sequence, and sequences with no legal rotation point are all recorded
//! as warnings in the [`RotationReport`](results::RotationReport), and the
//! no-legal-point case still emits its sequence, unrotated.

pub mod annotation;
pub mod config;
pub mod engine;
pub mod intervals;
pub mod output;
pub mod results;
pub mod rotation;
pub mod sequence;
pub mod types;

pub use engine::OriginRotator;
pub use types::CircstartError;
