mod common;

use std::fs;

use tempfile::TempDir;

use crate::common::{
    GENES_GFF, ORIGINAL_FASTA, TRIMMED_FASTA, circstart_cmd, run_circstart, write_fixture,
};

#[test]
fn rotates_at_nearest_intergenic_boundary() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", TRIMMED_FASTA);
    let original = write_fixture(dir.path(), "original.fa", ORIGINAL_FASTA);
    let genes = write_fixture(dir.path(), "genes.gff", GENES_GFF);

    let (stdout, stderr) = run_circstart(&trimmed, &original, &[&genes], &[]);

    // trimmed length 5 falls inside the gene [4,6]; the point snaps to 3
    // and the trimmed sequence is left-rotated: ABCDE -> DEABC
    assert_eq!(stdout, ">contig_1 circular plasmid\nDEABC\n");
    assert!(stderr.contains("Rotation complete! 1 of 1 sequences rotated"));
}

#[test]
fn target_already_intergenic_is_emitted_unchanged() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", ">contig_1\nABCDEFGHI\n");
    let original = write_fixture(dir.path(), "original.fa", ">contig_1\nABCDEFGHIJ\n");
    let genes = write_fixture(dir.path(), "genes.gff", "contig_1\ttest\tgene\t4\t6\t.\n");

    let (stdout, stderr) = run_circstart(&trimmed, &original, &[&genes], &[]);

    // trimmed length 9 lies inside the intergenic region [7,10]
    assert_eq!(stdout, ">contig_1\nABCDEFGHI\n");
    assert!(stderr.contains("1 already legal"));
}

#[test]
fn identifiers_without_features_are_skipped() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(
        dir.path(),
        "trimmed.fa",
        ">contig_1\nABCDE\n>no_genes\nACGTACGT\n",
    );
    let original = write_fixture(
        dir.path(),
        "original.fa",
        ">contig_1\nABCDEFGHIJ\n>no_genes\nACGTACGTAC\n",
    );
    let genes = write_fixture(dir.path(), "genes.gff", GENES_GFF);

    let (stdout, stderr) = run_circstart(&trimmed, &original, &[&genes], &[]);

    assert!(!stdout.contains("no_genes"));
    assert!(stdout.contains(">contig_1"));
    assert!(stderr.contains("1 skipped"));
}

#[test]
fn full_coverage_gene_emits_unrotated_with_warning() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", ">contig_1\nABCDE\n");
    let original = write_fixture(dir.path(), "original.fa", ">contig_1\nABCDEFGHIJ\n");
    let genes = write_fixture(dir.path(), "genes.gff", "contig_1\ttest\tgene\t1\t10\t.\n");

    let (stdout, stderr) = run_circstart(&trimmed, &original, &[&genes], &[]);

    assert_eq!(stdout, ">contig_1\nABCDE\n");
    assert!(stderr.contains("warning: no legal rotation point for 'contig_1'"));
    assert!(stderr.contains("1 without a legal point"));
}

#[test]
fn combined_annotation_output_is_verbatim() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", TRIMMED_FASTA);
    let original = write_fixture(dir.path(), "original.fa", ORIGINAL_FASTA);
    let first = write_fixture(dir.path(), "a.gff", GENES_GFF);
    let second = write_fixture(dir.path(), "b.gff", "# second table\nother\ttest\tgene\t1\t2\t.\n");
    let combined = dir.path().join("combined.gff");

    run_circstart(
        &trimmed,
        &original,
        &[&first, &second],
        &["-g", combined.to_str().unwrap()],
    );

    let written = fs::read_to_string(&combined).unwrap();
    let expected = format!("{GENES_GFF}# second table\nother\ttest\tgene\t1\t2\t.\n");
    assert_eq!(written, expected);
}

#[test]
fn output_file_matches_stdout() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", TRIMMED_FASTA);
    let original = write_fixture(dir.path(), "original.fa", ORIGINAL_FASTA);
    let genes = write_fixture(dir.path(), "genes.gff", GENES_GFF);
    let rotated = dir.path().join("rotated.fa");

    run_circstart(
        &trimmed,
        &original,
        &[&genes],
        &["-o", rotated.to_str().unwrap()],
    );

    let written = fs::read_to_string(&rotated).unwrap();
    assert_eq!(written, ">contig_1 circular plasmid\nDEABC\n");
}

#[test]
fn quiet_suppresses_diagnostics_and_summary() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", ">contig_1\nABCDE\n");
    let original = write_fixture(dir.path(), "original.fa", ">contig_1\nABCDEFGHIJ\n");
    let genes = write_fixture(dir.path(), "genes.gff", "contig_1\ttest\tgene\t1\t10\t.\n");

    let (_, stderr) = run_circstart(&trimmed, &original, &[&genes], &["-q"]);
    assert!(stderr.is_empty());
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", ">contig_1\nABCDE\n");
    let original = write_fixture(dir.path(), "original.fa", ">contig_1\nABCDEFGHIJ\n");
    // full-coverage gene: the run records a no-legal-point warning
    let genes = write_fixture(dir.path(), "genes.gff", "contig_1\ttest\tgene\t1\t10\t.\n");

    let mut cmd = circstart_cmd();
    cmd.arg("-i")
        .arg(&trimmed)
        .arg("-r")
        .arg(&original)
        .arg("-a")
        .arg(&genes)
        .arg("--strict");

    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("strict mode"));
}

#[test]
fn strict_mode_passes_on_clean_input() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", TRIMMED_FASTA);
    let original = write_fixture(dir.path(), "original.fa", ORIGINAL_FASTA);
    let genes = write_fixture(dir.path(), "genes.gff", GENES_GFF);

    run_circstart(&trimmed, &original, &[&genes], &["--strict"]);
}

#[test]
fn malformed_feature_line_warns_but_run_succeeds() {
    let dir = TempDir::new().unwrap();
    let trimmed = write_fixture(dir.path(), "trimmed.fa", TRIMMED_FASTA);
    let original = write_fixture(dir.path(), "original.fa", ORIGINAL_FASTA);
    let genes = write_fixture(
        dir.path(),
        "genes.gff",
        "contig_1\ttest\tgene\t4\t6\t.\ncontig_1\tbroken line\n",
    );

    let (stdout, stderr) = run_circstart(&trimmed, &original, &[&genes], &[]);
    assert_eq!(stdout, ">contig_1 circular plasmid\nDEABC\n");
    assert!(stderr.contains("malformed feature line 2"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let genes = write_fixture(dir.path(), "genes.gff", GENES_GFF);

    let mut cmd = circstart_cmd();
    cmd.arg("-i")
        .arg(dir.path().join("missing.fa"))
        .arg("-r")
        .arg(dir.path().join("also_missing.fa"))
        .arg("-a")
        .arg(&genes);
    cmd.assert().failure();
}

#[test]
fn help_describes_inputs() {
    let mut cmd = circstart_cmd();
    cmd.arg("--help");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("Trimmed FASTA file to rotate"));
    assert!(text.contains("--reference"));
    assert!(text.contains("--annotation"));
}
