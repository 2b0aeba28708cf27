use crate::report::{AnalysisReport, FileStructure, NamingConventions, TypeAnnotations};
use crate::rules::annotations::AnnotationVisitor;
use crate::rules::naming::NamingVisitor;
use crate::structure::StructureVisitor;
use crate::utils;
use anyhow::{anyhow, Result};
use rustpython_ast::{Mod, ModModule};
use rustpython_parser::{parse, Mode};

/// The style checker for a single source unit.
///
/// Owns the parsed module together with the original text and its file
/// label for the duration of one check run. The module is immutable after
/// parsing, so the analysis passes can read it in any order, or in
/// parallel.
#[derive(Debug)]
pub struct StyleChecker {
    file_name: String,
    source: String,
    module: ModModule,
}

impl StyleChecker {
    /// Parses the source text into a checker instance.
    ///
    /// A syntactically invalid file is fatal to the whole run: the error
    /// carries the file label and no partial analysis is attempted.
    pub fn parse(source: &str, file_name: &str) -> Result<Self> {
        let tree = parse(source, Mode::Module, file_name)
            .map_err(|err| anyhow!("failed to parse {}: {}", file_name, err))?;
        let module = match tree {
            Mod::Module(module) => module,
            _ => return Err(anyhow!("{}: expected a module", file_name)),
        };

        Ok(Self {
            file_name: file_name.to_string(),
            source: source.to_string(),
            module,
        })
    }

    /// The label the source text was supplied under.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Runs the three analysis passes and assembles the report.
    ///
    /// The passes share nothing but the read-only module, so the structural
    /// walk runs alongside the two audits. Each pass is total over a parsed
    /// module, which is why this returns `AnalysisReport` rather than a
    /// `Result`.
    pub fn analyze(&self) -> AnalysisReport {
        let (structure, (annotations, naming)) = rayon::join(
            || self.extract_structure(),
            || rayon::join(|| self.audit_annotations(), || self.audit_naming()),
        );

        AnalysisReport {
            file_structure: FileStructure {
                total_lines: utils::count_lines(&self.source),
                imports: structure.imports,
                classes: structure.classes,
                functions: structure.functions,
            },
            docstrings: structure.docstrings,
            type_annotations: TypeAnnotations {
                missing: annotations.missing,
            },
            naming_conventions: NamingConventions {
                invalid_classes: naming.invalid_classes,
                invalid_functions: naming.invalid_functions,
            },
        }
    }

    fn extract_structure(&self) -> StructureVisitor {
        let mut visitor = StructureVisitor::new();
        for stmt in &self.module.body {
            visitor.visit_stmt(stmt);
        }
        visitor
    }

    fn audit_annotations(&self) -> AnnotationVisitor {
        let mut visitor = AnnotationVisitor::new();
        for stmt in &self.module.body {
            visitor.visit_stmt(stmt);
        }
        visitor
    }

    fn audit_naming(&self) -> NamingVisitor {
        let mut visitor = NamingVisitor::new();
        for stmt in &self.module.body {
            visitor.visit_stmt(stmt);
        }
        visitor
    }
}
