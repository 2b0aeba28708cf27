use rustpython_ast::{Arguments, ExceptHandler, Stmt};

/// Visitor that collects functions and methods with no type annotations.
///
/// The rule is deliberately lenient: a single annotated positional
/// parameter, or an annotated return type, is enough to count a function as
/// annotated. Only a function with zero annotated parameters and no return
/// annotation is reported.
pub struct AnnotationVisitor {
    /// Bare names of functions missing annotations, in encounter order.
    pub missing: Vec<String>,
}

impl AnnotationVisitor {
    /// Creates a new `AnnotationVisitor`.
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    /// Visits a statement node in the AST.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                if !has_annotations(&node.args, node.returns.is_some()) {
                    self.missing.push(node.name.to_string());
                }
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFunctionDef(node) => {
                if !has_annotations(&node.args, node.returns.is_some()) {
                    self.missing.push(node.name.to_string());
                }
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            // Recurse into class bodies so methods are audited too.
            Stmt::ClassDef(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::If(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::For(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFor(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::While(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::With(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncWith(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Try(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for handler in &node.handlers {
                    if let ExceptHandler::ExceptHandler(handler_node) = handler {
                        for stmt in &handler_node.body {
                            self.visit_stmt(stmt);
                        }
                    }
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.finalbody {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::TryStar(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for handler in &node.handlers {
                    if let ExceptHandler::ExceptHandler(handler_node) = handler {
                        for stmt in &handler_node.body {
                            self.visit_stmt(stmt);
                        }
                    }
                }
                for stmt in &node.orelse {
                    self.visit_stmt(stmt);
                }
                for stmt in &node.finalbody {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Match(node) => {
                for case in &node.cases {
                    for stmt in &case.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for AnnotationVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// True when any regular positional parameter carries an annotation, or the
/// return type does. Pos-only, keyword-only, and vararg annotations are not
/// consulted.
fn has_annotations(args: &Arguments, has_return_annotation: bool) -> bool {
    args.args.iter().any(|arg| arg.def.annotation.is_some()) || has_return_annotation
}
