use std::fs::{self, File};
use std::io::Write;
use stylecheck_rs::driver;
use tempfile::tempdir;

#[test]
fn test_report_written_next_to_input() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("example.py");
    let mut file = File::create(&file_path).unwrap();

    let content = "import os\n\ndef main():\n    pass\n";
    write!(file, "{}", content).unwrap();

    let report_path = driver::check_file(&file_path).unwrap();

    // The base name keeps its extension.
    assert_eq!(report_path, dir.path().join("style_report_example.py.txt"));

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with("=== File Structure ===\n"));
    assert!(report.contains("Total lines of code: 4"));
    assert!(report.contains("Imported packages: os"));
    assert!(report.contains("Functions: main"));
    assert!(report.contains("Functions/methods without type annotations: main"));
}

#[test]
fn test_analyze_file_reads_without_writing() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("lonely.py");
    fs::write(&file_path, "class Calm:\n    pass\n").unwrap();

    let report = driver::analyze_file(&file_path).unwrap();
    assert_eq!(report.file_structure.classes, vec!["Calm"]);

    assert!(!dir.path().join("style_report_lonely.py.txt").exists());
}

#[test]
fn test_missing_file_errors() {
    let dir = tempdir().unwrap();
    let result = driver::check_file(&dir.path().join("nope.py"));
    assert!(result.is_err());
}

#[test]
fn test_unparseable_file_writes_no_report() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("broken.py");
    fs::write(&file_path, "def broken(:\n").unwrap();

    assert!(driver::check_file(&file_path).is_err());
    assert!(!dir.path().join("style_report_broken.py.txt").exists());
}
