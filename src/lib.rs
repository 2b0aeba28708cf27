// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the core checker logic.
/// This includes the `StyleChecker` struct that owns the parsed source
/// unit and runs the analysis passes.
pub mod checker;

/// Module containing the structural extraction visitor.
/// This is responsible for collecting imports, classes, functions, and
/// docstrings from the Python AST.
pub mod structure;

/// Module containing the audit rule visitors.
/// This includes the type-annotation audit and the naming-convention
/// audit.
pub mod rules;

/// Module defining the report data structures and the text formatter.
/// This includes `AnalysisReport` and its section sub-records.
pub mod report;

/// Module containing the file-reading and report-writing driver.
/// This is the I/O collaborator around the core; the core itself performs
/// no file I/O.
pub mod driver;

/// Module containing utility functions.
/// This includes line counting and docstring extraction helpers.
pub mod utils;
