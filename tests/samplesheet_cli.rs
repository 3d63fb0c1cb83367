//! End-to-end tests for the `samplesheet` subcommand
//!
//! Each test lays out a sequencing directory in a temp dir, runs the binary
//! and checks the samplesheet it prints together with its exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sequencing_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        std::fs::write(dir.path().join(name), b"").expect("Failed to create file");
    }
    dir
}

fn reference_dir() -> TempDir {
    sequencing_dir(&[
        "s1_r1_.fastq",
        "s1_r2_.fastq",
        "s1.fastq",
        "s2_r1.fastq",
        "s1.fasta",
        "s3.fasta",
    ])
}

fn samplesheet_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ngs-samplesheet").expect("binary should build");
    cmd.arg("samplesheet").arg(dir.path());
    cmd
}

#[test]
fn test_csv_samplesheet_on_stdout() {
    let dir = reference_dir();
    let output = samplesheet_cmd(&dir)
        .args(["-1", "_r1_", "-2", "_r2_"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "sample,fastq_1,fastq_2,long_reads,assembly");
    assert_eq!(lines.len(), 4, "header plus s1, s2_r1 and s3: {stdout}");

    let s1: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(s1[0], "s1");
    assert!(s1[1].ends_with("s1_r1_.fastq"));
    assert!(s1[2].ends_with("s1_r2_.fastq"));
    assert!(s1[3].ends_with("s1.fastq"));
    assert!(s1[4].ends_with("s1.fasta"));

    assert!(lines[2].starts_with("s2_r1,,,"));
    assert!(lines[3].starts_with("s3,,,,"));
}

#[test]
fn test_json_samplesheet() {
    let dir = reference_dir();
    let output = samplesheet_cmd(&dir)
        .args(["-1", "_r1_", "-2", "_r2_", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["sample"], "s3");
    assert!(rows[2]["fastq_1"].is_null());
}

#[test]
fn test_missing_directory_exits_with_not_found() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("ngs-samplesheet").unwrap();
    cmd.arg("samplesheet")
        .arg(dir.path().join("nope"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist or is not a directory"));
}

#[test]
fn test_malformed_filename_exits_with_failure() {
    let dir = sequencing_dir(&["s1.fastq", "s2.gz"]);
    samplesheet_cmd(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("s2.gz"));
}

#[test]
fn test_pairing_mismatch_names_sample() {
    let dir = reference_dir();
    samplesheet_cmd(&dir)
        .args(["-1", "_r1", "-2", "_r2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'s2'"));
}

#[test]
fn test_unrecognized_files_warn_but_succeed() {
    let dir = sequencing_dir(&["s1.fastq", "README.md"]);
    samplesheet_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Miscellaneous file"))
        .stdout(predicate::str::contains("s1,,,"));
}

#[test]
fn test_empty_directory_writes_header_only() {
    let dir = sequencing_dir(&[]);
    samplesheet_cmd(&dir)
        .assert()
        .success()
        .stdout("sample,fastq_1,fastq_2,long_reads,assembly\n")
        .stderr(predicate::str::contains("No input files found"));
}

#[test]
fn test_identical_markers_rejected() {
    let dir = reference_dir();
    samplesheet_cmd(&dir)
        .args(["-1", "_r1_", "-2", "_r1_"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn test_substring_mode_changes_grouping() {
    let dir = sequencing_dir(&["PR1MER.fastq"]);

    samplesheet_cmd(&dir)
        .args(["-1", "R1", "-2", "R2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PR1MER,"));

    // Substring matching sees a mate-1 file without its mate
    samplesheet_cmd(&dir)
        .args(["-1", "R1", "-2", "R2", "--marker-match", "substring"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("uneven number of reads"));
}

#[test]
fn test_output_file_requires_force_to_overwrite() {
    let dir = reference_dir();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("samplesheet.tsv");
    std::fs::write(&out, "existing").unwrap();

    samplesheet_cmd(&dir)
        .args(["-1", "_r1_", "-2", "_r2_", "-f", "tsv", "-o"])
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "existing");

    samplesheet_cmd(&dir)
        .args(["-1", "_r1_", "-2", "_r2_", "-f", "tsv", "--force", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("sample\tfastq_1\tfastq_2\tlong_reads\tassembly\n"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn test_fatal_error_leaves_output_untouched() {
    let dir = reference_dir();
    let out_dir = TempDir::new().unwrap();

    // "_r1" also marks s2_r1.fastq, which has no mate
    let fresh = out_dir.path().join("fresh.csv");
    samplesheet_cmd(&dir)
        .args(["-1", "_r1", "-2", "_r2", "-o"])
        .arg(&fresh)
        .assert()
        .code(1);
    assert!(!fresh.exists());

    let existing = out_dir.path().join("existing.csv");
    std::fs::write(&existing, "previous run").unwrap();
    samplesheet_cmd(&dir)
        .args(["-1", "_r1", "-2", "_r2", "--force", "-o"])
        .arg(&existing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'s2'"));
    assert_eq!(std::fs::read_to_string(&existing).unwrap(), "previous run");
}

#[test]
fn test_uneven_long_reads_are_reported() {
    let dir = sequencing_dir(&["s1_R1_.fq", "s1_R2_.fq", "s1.ont.fq", "s1.pacbio.fq"]);
    let output = samplesheet_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("rows were aligned by position"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 3, "header plus two s1 rows: {stdout}");
}
