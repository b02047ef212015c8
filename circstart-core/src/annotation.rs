//! Feature-annotation table reading.
//!
//! Annotation sources are tab-delimited tables: the sequence identifier at
//! column 0 and the 1-based inclusive start/stop coordinates at columns 3
//! and 4. Lines beginning with `#` are comments. Every input line,
//! comments and rejects included, is captured verbatim so the combined
//! annotation output reproduces the sources exactly.
//!
//! Feature lines are parsed against an explicit schema and collected into
//! an explicit per-identifier map. A malformed line fails only itself: it
//! is recorded as a diagnostic and skipped, never aborting the batch.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{CircstartError, Feature};

/// Minimum tab-separated columns a feature line must carry (through the
/// stop coordinate at column 4).
const MIN_FEATURE_COLUMNS: usize = 5;

/// Parses one non-comment table line into a [`Feature`].
///
/// # Errors
///
/// Returns [`CircstartError::MalformedFeature`] when the line has fewer
/// than five tab-separated columns, a coordinate fails to parse as a
/// positive integer, or `start > stop`.
pub fn parse_feature_line(line: &str, line_number: usize) -> Result<Feature, CircstartError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < MIN_FEATURE_COLUMNS {
        return Err(CircstartError::MalformedFeature {
            line: line_number,
            reason: format!(
                "expected at least {MIN_FEATURE_COLUMNS} tab-separated columns, found {}",
                columns.len()
            ),
        });
    }

    let start: usize = columns[3].trim().parse().map_err(|_| CircstartError::MalformedFeature {
        line: line_number,
        reason: format!("start coordinate '{}' is not an integer", columns[3]),
    })?;
    let stop: usize = columns[4].trim().parse().map_err(|_| CircstartError::MalformedFeature {
        line: line_number,
        reason: format!("stop coordinate '{}' is not an integer", columns[4]),
    })?;

    if start < 1 {
        return Err(CircstartError::MalformedFeature {
            line: line_number,
            reason: "coordinates are 1-based; start must be positive".to_string(),
        });
    }
    if start > stop {
        return Err(CircstartError::MalformedFeature {
            line: line_number,
            reason: format!("start {start} is greater than stop {stop}"),
        });
    }

    Ok(Feature {
        seqid: columns[0].to_string(),
        start,
        stop,
    })
}

/// Features from one or more annotation tables, keyed by identifier.
///
/// Load tables with [`read_file`](Self::read_file) or
/// [`read_from`](Self::read_from), then call [`finish`](Self::finish)
/// once: it validates the ascending-start ordering precondition per
/// identifier, recording a data-quality warning and sorting where the
/// source violated it.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    features: HashMap<String, Vec<Feature>>,
    raw_lines: Vec<String>,
    warnings: Vec<String>,
}

impl AnnotationSet {
    /// Creates an empty annotation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one annotation table from a file.
    ///
    /// # Errors
    ///
    /// Returns [`CircstartError::IoError`] when the file cannot be opened
    /// or read. Malformed lines are not errors: they become recorded
    /// warnings.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CircstartError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let source = path.display().to_string();
        self.read_from(BufReader::new(file), &source)
    }

    /// Reads one annotation table from any buffered reader.
    ///
    /// `source` labels the table in diagnostics (usually its file name).
    ///
    /// # Errors
    ///
    /// Returns [`CircstartError::IoError`] when reading fails.
    pub fn read_from<R: BufRead>(&mut self, reader: R, source: &str) -> Result<(), CircstartError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            self.raw_lines.push(line.clone());

            let content = line.trim_end_matches('\r');
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            match parse_feature_line(content, line_number) {
                Ok(feature) => self.insert(feature),
                Err(err) => self.warnings.push(format!("{source}: {err}")),
            }
        }
        Ok(())
    }

    /// Appends a feature under its identifier, creating the entry when the
    /// identifier has not been seen before.
    fn insert(&mut self, feature: Feature) {
        self.features
            .entry(feature.seqid.clone())
            .or_insert_with(Vec::new)
            .push(feature);
    }

    /// Validates per-identifier feature ordering after all tables are read.
    ///
    /// Identifiers whose features arrived out of ascending-start order get
    /// one warning each and are sorted, so downstream interval construction
    /// always sees its documented precondition satisfied.
    pub fn finish(&mut self) {
        let mut unsorted: Vec<String> = self
            .features
            .iter()
            .filter(|(_, list)| !list.windows(2).all(|pair| pair[0].start <= pair[1].start))
            .map(|(id, _)| id.clone())
            .collect();
        unsorted.sort();

        for id in unsorted {
            self.warnings.push(format!(
                "features for '{id}' were not sorted by start coordinate; sorted on ingestion"
            ));
            if let Some(list) = self.features.get_mut(&id) {
                list.sort_by_key(|feature| feature.start);
            }
        }
    }

    /// The features recorded for an identifier, in ascending start order
    /// once [`finish`](Self::finish) has run.
    #[must_use]
    pub fn features_for(&self, id: &str) -> Option<&[Feature]> {
        self.features.get(id).map(|list| list.as_slice())
    }

    /// Every input line in reading order, verbatim.
    #[must_use]
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Data-quality warnings recorded while reading and finishing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of identifiers with at least one parsed feature.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature parsed from any table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
