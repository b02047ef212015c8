use std::io::Write;

use crate::results::RotationReport;
use crate::types::CircstartError;

/// Writes the report's records as FASTA.
///
/// Each record is a header line (`>identifier description`) followed by
/// the residues on a single unwrapped line, in catalog order.
pub fn write_fasta_format<W: Write>(
    writer: &mut W,
    report: &RotationReport,
) -> Result<(), CircstartError> {
    for record in &report.records {
        writeln!(writer, ">{}", record.header())?;
        writer.write_all(&record.residues)?;
        writeln!(writer)?;
    }
    Ok(())
}
