use crate::checker::StyleChecker;
use crate::report::{self, AnalysisReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// The file-reading/-writing collaborator around the core. Everything below
// this module treats source text as input and report text as output;
// touching the filesystem happens only here and in main.

/// Reads and analyzes the target file without writing anything.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let checker = StyleChecker::parse(&source, &file_label(path))?;
    Ok(checker.analyze())
}

/// Checks the target file and writes the report next to it as
/// `style_report_<file_name>.txt`, returning the report path.
///
/// The base name keeps its original extension, so `example.py` produces
/// `style_report_example.py.txt`.
pub fn check_file(path: &Path) -> Result<PathBuf> {
    let report = analyze_file(path)?;
    let text = report::render(&report);

    let report_path = path.with_file_name(format!("style_report_{}.txt", file_label(path)));
    fs::write(&report_path, text)
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    Ok(report_path)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
