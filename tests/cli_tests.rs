//! Integration tests for the CLI application
//!
//! These tests verify that the CLI commands work correctly with real data files.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

/// Helper to create test data files
struct TestDataFiles {
    pub csv_file: NamedTempFile,
    pub malformed_file: NamedTempFile,
}

impl TestDataFiles {
    fn new() -> std::io::Result<Self> {
        let mut csv_file = NamedTempFile::with_suffix(".csv")?;
        writeln!(csv_file, "0.0,0.0,left")?;
        writeln!(csv_file, "4.0,0.0,right")?;
        writeln!(csv_file, "0.0,2.0,left")?;
        writeln!(csv_file, "4.0,2.0,right")?;
        writeln!(csv_file, "10.0,10.0,far")?;
        csv_file.flush()?;

        let mut malformed_file = NamedTempFile::with_suffix(".csv")?;
        writeln!(malformed_file, "1.0,2.0,A")?;
        writeln!(malformed_file, "1.0,two,B")?;
        malformed_file.flush()?;

        Ok(TestDataFiles {
            csv_file,
            malformed_file,
        })
    }
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treesvm"))
        .args(args)
        .output()
        .expect("Failed to run CLI")
}

#[test]
fn test_cli_classes_command() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");

    let output = run_cli(&["classes", "--data", test_data.csv_file.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "Classes command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Samples: 5"));
    assert!(stdout.contains("Features: 2"));
    assert!(stdout.contains("Classes: 3"));
    assert!(stdout.contains("left: 2 samples"));
    assert!(stdout.contains("far: 1 samples"));
}

#[test]
fn test_cli_geometry_linear() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");

    let output = run_cli(&["geometry", "--data", test_data.csv_file.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "Geometry command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("left (n=2): 1.000000"));
    assert!(stdout.contains("far (n=1): 0.000000"));
    assert!(stdout.contains("left: 0.000000 16.000000 181.000000"));
}

#[test]
fn test_cli_geometry_report_and_info() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("geometry.json");

    let output = run_cli(&[
        "geometry",
        "--data",
        test_data.csv_file.path().to_str().unwrap(),
        "--kernel",
        "rbf",
        "--gamma",
        "0.5",
        "--cache-size",
        "16",
        "--output",
        report_path.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "Geometry command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(report_path.exists(), "Report file was not created");

    let info_output = run_cli(&["info", report_path.to_str().unwrap()]);

    assert!(
        info_output.status.success(),
        "Info command failed: {}",
        String::from_utf8_lossy(&info_output.stderr)
    );

    let stdout = String::from_utf8_lossy(&info_output.stdout);
    assert!(stdout.contains("Class Geometry Summary"));
    assert!(stdout.contains("Kernel: rbf(gamma=0.5)"));
    assert!(stdout.contains("Classes: 3"));
    assert!(stdout.contains("Cache Size: 16"));
}

#[test]
fn test_cli_other_kernels() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");

    for kernel in ["polynomial", "chi-square"] {
        let output = run_cli(&[
            "geometry",
            "--data",
            test_data.csv_file.path().to_str().unwrap(),
            "--kernel",
            kernel,
        ]);

        assert!(
            output.status.success(),
            "Geometry with {kernel} kernel failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_cli_error_handling() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");

    // Nonexistent data file
    let output = run_cli(&["classes", "--data", "nonexistent_file.csv"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    // Malformed data file
    let output = run_cli(&["geometry", "--data", test_data.malformed_file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    // Invalid kernel parameter
    let output = run_cli(&[
        "geometry",
        "--data",
        test_data.csv_file.path().to_str().unwrap(),
        "--kernel",
        "rbf",
        "--gamma=-1",
    ]);
    assert_eq!(output.status.code(), Some(1));

    // Negative tolerance
    let output = run_cli(&[
        "geometry",
        "--data",
        test_data.csv_file.path().to_str().unwrap(),
        "--tolerance=-0.5",
    ]);
    assert_eq!(output.status.code(), Some(1));

    // Missing report
    let output = run_cli(&["info", "nonexistent_report.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("classes"));
    assert!(stdout.contains("geometry"));
    assert!(stdout.contains("info"));
}
