use std::io::Write;

use crate::annotation::AnnotationSet;
use crate::types::CircstartError;

/// Writes the combined annotation table.
///
/// Reproduces every line of every input table verbatim, in the order the
/// tables were read. Comment lines pass through untouched; they never
/// contributed feature data but remain part of the combined output.
pub fn write_combined_gff<W: Write>(
    writer: &mut W,
    annotations: &AnnotationSet,
) -> Result<(), CircstartError> {
    for line in annotations.raw_lines() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
