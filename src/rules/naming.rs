use rustpython_ast::{ExceptHandler, Stmt};

/// Visitor that collects class and function names violating the naming
/// rules.
///
/// The class rule checks only the first character and the absence of
/// underscores, so a name like `XMLParser` passes without being strict
/// CamelCase. The function rule mirrors Python's `str.islower` plus a
/// space check.
pub struct NamingVisitor {
    /// Class names failing the class rule, in encounter order.
    pub invalid_classes: Vec<String>,
    /// Function names failing the function rule, in encounter order.
    pub invalid_functions: Vec<String>,
}

impl NamingVisitor {
    /// Creates a new `NamingVisitor`.
    pub fn new() -> Self {
        Self {
            invalid_classes: Vec::new(),
            invalid_functions: Vec::new(),
        }
    }

    /// Visits a statement node in the AST.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::ClassDef(node) => {
                if !valid_class_name(node.name.as_str()) {
                    self.invalid_classes.push(node.name.to_string());
                }
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::FunctionDef(node) => {
                if !valid_function_name(node.name.as_str()) {
                    self.invalid_functions.push(node.name.to_string());
                }
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFunctionDef(node) => {
                if !valid_function_name(node.name.as_str()) {
                    self.invalid_functions.push(node.name.to_string());
                }
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

impl Default for NamingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// A class name is valid when its first character is uppercase and it
/// contains no underscore.
fn valid_class_name(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_uppercase()) && !name.contains('_')
}

/// A function name is valid when it is lowercase in the `str.islower` sense
/// (at least one lowercase character, no uppercase characters) and contains
/// no space. Parsed identifiers can never contain a space, but the check is
/// part of the rule as stated.
fn valid_function_name(name: &str) -> bool {
    is_lowercase_name(name) && !name.contains(' ')
}

fn is_lowercase_name(name: &str) -> bool {
    name.chars().any(char::is_lowercase) && !name.chars().any(char::is_uppercase)
}
