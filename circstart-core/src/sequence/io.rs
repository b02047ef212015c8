use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use crate::types::CircstartError;

use super::{SequenceCatalog, SequenceRecord};

/// Reads a FASTA file into a catalog using rust-bio.
///
/// Record order follows the file; wrapped sequence lines are concatenated
/// by the reader, so each record's length is its true residue count.
///
/// # Errors
///
/// Returns [`CircstartError::IoError`] when the file cannot be opened and
/// [`CircstartError::ParseError`] when a record is not valid FASTA.
pub fn read_fasta_catalog<P: AsRef<Path>>(path: P) -> Result<SequenceCatalog, CircstartError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut catalog = SequenceCatalog::new();

    for result in reader.records() {
        let record = result.map_err(|e| CircstartError::ParseError(e.to_string()))?;
        catalog.insert(SequenceRecord {
            id: record.id().to_string(),
            description: record.desc().map(String::from),
            residues: record.seq().to_vec(),
        });
    }

    Ok(catalog)
}
