use indexmap::IndexMap;
use serde::Serialize;

/// Structural facts about the checked file.
///
/// All three name lists preserve source-encounter order and keep
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStructure {
    /// Number of newline-delimited lines in the source text.
    pub total_lines: usize,
    /// Imported names, one entry per alias.
    pub imports: Vec<String>,
    /// Class names.
    pub classes: Vec<String>,
    /// Function names, qualified as `<Class>_<name>` for methods.
    pub functions: Vec<String>,
}

/// Result of the annotation audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAnnotations {
    /// Functions with no parameter or return annotation at all.
    pub missing: Vec<String>,
}

impl TypeAnnotations {
    /// Derived: true iff no function is missing annotations. Never stored
    /// separately from `missing`.
    pub fn all_annotated(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of the naming audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingConventions {
    /// Class names failing the class rule.
    pub invalid_classes: Vec<String>,
    /// Function names failing the function rule.
    pub invalid_functions: Vec<String>,
}

impl NamingConventions {
    /// Derived: true iff both invalid sets are empty. Never stored
    /// separately from them.
    pub fn all_valid(&self) -> bool {
        self.invalid_classes.is_empty() && self.invalid_functions.is_empty()
    }
}

/// The aggregate result of one check run.
///
/// Each pass fills its own section; the formatter reads the whole thing and
/// never touches the tree. Docstrings are keyed by the unqualified
/// definition name, so a bare name shared by two definitions holds only the
/// last-extracted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub file_structure: FileStructure,
    pub docstrings: IndexMap<String, String>,
    pub type_annotations: TypeAnnotations,
    pub naming_conventions: NamingConventions,
}

/// Renders the report text: four fixed sections joined by newlines, each
/// ending in a blank line.
pub fn render(report: &AnalysisReport) -> String {
    let mut lines = Vec::new();

    lines.push("=== File Structure ===".to_string());
    lines.push(format!(
        "Total lines of code: {}",
        report.file_structure.total_lines
    ));
    lines.push(format!(
        "Imported packages: {}",
        report.file_structure.imports.join(", ")
    ));
    lines.push(format!("Classes: {}", report.file_structure.classes.join(", ")));
    lines.push(format!(
        "Functions: {}",
        report.file_structure.functions.join(", ")
    ));
    lines.push(String::new());

    lines.push("=== DocStrings ===".to_string());
    for (name, docstring) in &report.docstrings {
        lines.push(format!("{}:\n{}\n", name, docstring));
    }
    lines.push(String::new());

    lines.push("=== Type Annotations ===".to_string());
    if report.type_annotations.all_annotated() {
        lines.push("All functions and methods use type annotations.".to_string());
    } else {
        lines.push(format!(
            "Functions/methods without type annotations: {}",
            report.type_annotations.missing.join(", ")
        ));
    }
    lines.push(String::new());

    lines.push("=== Naming Conventions ===".to_string());
    if report.naming_conventions.all_valid() {
        lines.push("All names adhere to the specified naming conventions.".to_string());
    } else {
        if !report.naming_conventions.invalid_classes.is_empty() {
            lines.push(format!(
                "Classes not in CamelCase: {}",
                report.naming_conventions.invalid_classes.join(", ")
            ));
        }
        if !report.naming_conventions.invalid_functions.is_empty() {
            lines.push(format!(
                "Functions/methods not in snake_case: {}",
                report.naming_conventions.invalid_functions.join(", ")
            ));
        }
    }
    lines.push(String::new());

    lines.join("\n")
}
