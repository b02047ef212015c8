#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Builds a `circstart` invocation.
pub fn circstart_cmd() -> Command {
    Command::cargo_bin("circstart").unwrap()
}

/// Writes a fixture file into `dir` and returns its path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// The boundary-selection fixture: a 10 bp original with one gene at
/// [4,6], trimmed to 5 bp, so the rotation point snaps from 5 back to 3.
pub const ORIGINAL_FASTA: &str = ">contig_1 circular plasmid\nABCDEFGHIJ\n";
pub const TRIMMED_FASTA: &str = ">contig_1 circular plasmid\nABCDE\n";
pub const GENES_GFF: &str = "# fixture annotation\ncontig_1\ttest\tgene\t4\t6\t.\t+\t.\tID=g1\n";

/// Runs circstart over a fixture set and returns (stdout, stderr).
pub fn run_circstart(
    trimmed: &Path,
    original: &Path,
    annotations: &[&Path],
    extra_args: &[&str],
) -> (String, String) {
    let mut cmd = circstart_cmd();
    cmd.arg("-i").arg(trimmed).arg("-r").arg(original);
    for annotation in annotations {
        cmd.arg("-a").arg(annotation);
    }
    cmd.args(extra_args);

    let output = cmd.assert().success().get_output().clone();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}
