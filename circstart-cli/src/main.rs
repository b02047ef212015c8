//! # Circstart CLI - Command-Line Origin Rotation
//!
//! A command-line interface for moving the origin of circular genomic
//! sequences into intergenic regions after trimming.
//!
//! ## Usage
//!
//! ```bash
//! # Rotate trimmed sequences against their original lengths and genes
//! circstart -i trimmed.fa -r original.fa -a genes.gff -o rotated.fa
//!
//! # Several annotation tables, plus the combined annotation output
//! circstart -i trimmed.fa -r original.fa -a a.gff -a b.gff -g combined.gff
//!
//! # Fail the run on any data-quality warning
//! circstart -i trimmed.fa -r original.fa -a genes.gff --strict
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Trimmed FASTA file to rotate
//! - `-r, --reference <FILE>`: Original (untrimmed) FASTA file supplying lengths
//! - `-a, --annotation <FILE>`: Feature annotation table (repeatable)
//! - `-g, --annotation-out <FILE>`: Write the combined annotation tables
//! - `-o, --output <FILE>`: Rotated FASTA output (default: stdout)
//! - `-q, --quiet`: Suppress diagnostics and the completion summary
//! - `--strict`: Treat data-quality warnings as errors

use clap::{Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use circstart_core::CircstartError;
use circstart_core::OriginRotator;
use circstart_core::config::CircstartConfig;
use circstart_core::output::{write_combined_gff, write_fasta_format};

/// Main entry point for the circstart CLI.
///
/// Parses command-line arguments, runs the rotation pipeline, and writes
/// the rotated FASTA and optional combined annotation outputs.
fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("circstart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Moves the origin of circular sequences into intergenic regions")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Trimmed FASTA file to rotate"),
        )
        .arg(
            Arg::new("reference")
                .short('r')
                .long("reference")
                .value_name("FILE")
                .required(true)
                .help("Original (untrimmed) FASTA file supplying coordinate-space lengths"),
        )
        .arg(
            Arg::new("annotation")
                .short('a')
                .long("annotation")
                .value_name("FILE")
                .action(ArgAction::Append)
                .required(true)
                .help("Feature annotation table (may be given multiple times)"),
        )
        .arg(
            Arg::new("annotation-out")
                .short('g')
                .long("annotation-out")
                .value_name("FILE")
                .help("Write the combined annotation tables to FILE"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Rotated FASTA output (default: stdout)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress diagnostics and the completion summary"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Treat data-quality warnings as errors"),
        )
        .get_matches();

    let config = CircstartConfig {
        quiet: matches.get_flag("quiet"),
        strict: matches.get_flag("strict"),
    };
    let rotator = OriginRotator::new(config);

    let input = matches.get_one::<String>("input").unwrap();
    let reference = matches.get_one::<String>("reference").unwrap();
    let annotation_files: Vec<&String> = matches.get_many::<String>("annotation").unwrap().collect();

    let (report, annotations) = rotator.rotate_files(input, reference, &annotation_files)?;

    if let Some(path) = matches.get_one::<String>("annotation-out") {
        let mut writer = BufWriter::new(File::create(path)?);
        write_combined_gff(&mut writer, &annotations)?;
        writer.flush()?;
    }

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    write_fasta_format(&mut writer, &report)?;
    writer.flush()?;

    if !rotator.config.quiet {
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
        eprintln!(
            "Rotation complete! {} of {} sequences rotated, {} already legal, {} without a legal point, {} skipped.",
            report.summary.rotated,
            report.summary.total,
            report.summary.already_legal,
            report.summary.unrotatable,
            report.summary.skipped_no_features + report.summary.skipped_invalid
        );
    }

    if rotator.config.strict && !report.warnings.is_empty() {
        return Err(Box::new(CircstartError::StrictMode(report.warnings.len())));
    }

    Ok(())
}
