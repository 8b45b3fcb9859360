use assert_cmd::Command;
use bench_merge::models::ReportFile;
use bench_merge::processors::{IntegrityChecker, LineMerger};
use bench_merge::readers::ReportReader;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RUN_1: &str = "\
Running MPIR benchmark
 Category base
  Program multiply (weight 1.00)
      128       128 =>  12345678
      512       512 =>   1234567.5
  Program multiply (weight 1.00) =>  3345.2,  1.39
";

const RUN_2: &str = "\
Running MPIR benchmark
 Category base
  Program multiply (weight 1.00)
      128       128 =>  12000000
      512       512 =>   1300000.0
  Program multiply (weight 1.00) =>  3400.0,  1.42
";

const MERGED: &str = "\
Running MPIR benchmark
 Category base
  Program multiply (weight 1.00)
      128       128  => 12000000
      512       512  => 1234567.5
  Program multiply (weight 1.00)  => 3345.2,1.39
";

fn bench_merge() -> Command {
    let mut cmd = Command::cargo_bin("bench-merge").expect("Failed to find bench-merge binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_reports(dir: &TempDir, contents: &[&str]) -> Vec<PathBuf> {
    contents
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let path = dir.path().join(format!("run{}.txt", i + 1));
            std::fs::write(&path, content).expect("Failed to write report");
            path
        })
        .collect()
}

#[test]
fn test_merges_benchmark_runs() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &[RUN_1, RUN_2]);

    bench_merge()
        .args(&files)
        .assert()
        .success()
        .stdout(MERGED)
        .stderr(predicate::str::contains("Lines differ").not());
}

#[test]
fn test_merge_is_order_independent() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &[RUN_2, RUN_1]);

    bench_merge().args(&files).assert().success().stdout(MERGED);
}

#[test]
fn test_single_report() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["a=>1,2\nplain\n"]);

    bench_merge()
        .args(&files)
        .assert()
        .success()
        .stdout("a => 1,2\nplain\n");
}

#[test]
fn test_label_mismatch_warns_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["bench1=>1,2,3\nx=>5\n", "bench2=>4,5,6\nx=>4\n"]);

    bench_merge()
        .args(&files)
        .assert()
        .success()
        .stdout("bench1 => 1,2,3\nx => 4\n")
        .stderr(predicate::str::contains("Lines differ"));
}

#[test]
fn test_label_mismatch_shown_under_strict_log_filter() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["x=>1\n", "y=>0\n"]);

    bench_merge()
        .env("RUST_LOG", "error")
        .args(&files)
        .assert()
        .success()
        .stdout("x => 1\n")
        .stderr(predicate::str::contains("Lines differ"));
}

#[test]
fn test_label_only_line_in_later_report_warns() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["bench1=>1\n", "bench1\n"]);

    bench_merge()
        .args(&files)
        .assert()
        .success()
        .stdout("bench1 => 1\n")
        .stderr(predicate::str::contains("Lines differ"));
}

#[test]
fn test_value_count_mismatch_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["x=>1,2\n", "x=>1,2,3\n"]);

    bench_merge()
        .args(&files)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("do not line up"));
}

#[test]
fn test_line_count_mismatch_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let ten = "x=>1\n".repeat(10);
    let nine = "x=>1\n".repeat(9);
    let files = write_reports(&temp_dir, &[ten.as_str(), nine.as_str()]);

    bench_merge()
        .args(&files)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Line count mismatch"));
}

#[test]
fn test_non_numeric_value_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &["x=>1,oops\n", "x=>1,2\n"]);

    bench_merge()
        .args(&files)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not convert"));
}

#[test]
fn test_missing_file_fails() {
    bench_merge()
        .arg("/nonexistent/run1.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File I/O error"));
}

#[test]
fn test_requires_files() {
    bench_merge().assert().failure();
}

#[test]
fn test_output_file_and_mmap() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &[RUN_1, RUN_2]);
    let output = temp_dir.path().join("out").join("merged.txt");

    bench_merge()
        .arg("--mmap")
        .arg("-o")
        .arg(&output)
        .args(&files)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&output).unwrap(), MERGED);
}

#[test]
fn test_library_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let files = write_reports(&temp_dir, &[RUN_1, RUN_2, RUN_1]);

    let reports: Vec<ReportFile> = ReportReader::new().read_all(&files).unwrap();
    let integrity = IntegrityChecker::new().check_reports(&reports).unwrap();
    assert_eq!(integrity.total_lines, 6);

    let merged = LineMerger::new().merge_reports(&reports).unwrap();
    let text: String = merged
        .iter()
        .map(|line| {
            if line.text.ends_with('\n') {
                line.text.clone()
            } else {
                format!("{}\n", line.text)
            }
        })
        .collect();
    assert_eq!(text, MERGED);
    assert!(merged.iter().all(|line| line.label_mismatches.is_empty()));
    assert_eq!(reports[0].path(), Path::new(&files[0]));
}
