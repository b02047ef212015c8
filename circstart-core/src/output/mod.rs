//! Output writers for the two run artifacts.
//!
//! - **Rotated FASTA**: one record per processed identifier, header line
//!   plus the residues on a single line (the record format the downstream
//!   pipeline steps consume).
//! - **Combined annotation table**: every input annotation line, comments
//!   included, reproduced verbatim in reading order.
//!
//! Both writers are generic over [`std::io::Write`], so output can go to
//! a file, stdout, or an in-memory buffer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use circstart_core::OriginRotator;
//! use circstart_core::config::CircstartConfig;
//! use circstart_core::output::{write_combined_gff, write_fasta_format};
//! use std::fs::File;
//!
//! let rotator = OriginRotator::new(CircstartConfig::default());
//! let (report, annotations) =
//!     rotator.rotate_files("trimmed.fa", "original.fa", &["genes.gff"])?;
//!
//! let mut fasta_out = File::create("rotated.fa")?;
//! write_fasta_format(&mut fasta_out, &report)?;
//!
//! let mut gff_out = File::create("combined.gff")?;
//! write_combined_gff(&mut gff_out, &annotations)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod formats {
    pub mod fasta;
    pub mod gff;
}

pub use formats::{fasta::write_fasta_format, gff::write_combined_gff};
