use crate::utils;
use indexmap::IndexMap;
use rustpython_ast::{ExceptHandler, Stmt};

/// One entry on the scope stack: the kind of definition whose body is
/// currently being walked.
#[derive(Debug)]
enum Scope {
    Class(String),
    Function,
}

/// The structural extraction visitor.
///
/// A single depth-first walk over the module that collects imports, class
/// names, function names, and per-definition docstrings. The scope stack is
/// pushed and popped around each definition body, so enter/exit always
/// balance.
pub struct StructureVisitor {
    /// Imported names, one entry per alias, in encounter order.
    pub imports: Vec<String>,
    /// Class names in encounter order.
    pub classes: Vec<String>,
    /// Function names in encounter order. A function whose immediately
    /// enclosing scope is a class is recorded as `<Class>_<name>`.
    pub functions: Vec<String>,
    /// Docstring text (or sentinel) keyed by the unqualified definition
    /// name. A reused bare name overwrites the earlier entry in place.
    pub docstrings: IndexMap<String, String>,
    /// Enclosing definitions of the statement being visited.
    scope_stack: Vec<Scope>,
}

impl StructureVisitor {
    /// Creates an empty `StructureVisitor`.
    pub fn new() -> Self {
        Self {
            imports: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
            docstrings: IndexMap::new(),
            scope_stack: Vec::new(),
        }
    }

    /// Visits a statement node in the AST.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            // Handle function definitions
            Stmt::FunctionDef(node) => {
                self.visit_function_def(node.name.as_str(), &node.body);
            }
            // Async defs are treated exactly like sync defs
            Stmt::AsyncFunctionDef(node) => {
                self.visit_function_def(node.name.as_str(), &node.body);
            }
            // Handle class definitions
            Stmt::ClassDef(node) => {
                self.classes.push(node.name.to_string());
                self.record_docstring("class", node.name.as_str(), &node.body);

                // Push the class scope for nested definitions (methods and
                // inner classes), pop once the whole subtree is done.
                self.scope_stack.push(Scope::Class(node.name.to_string()));
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                self.scope_stack.pop();
            }
            // Handle imports: one entry per imported name, keeping the
            // original name rather than any `as` rename.
            Stmt::Import(node) => {
                for alias in &node.names {
                    self.imports.push(alias.name.to_string());
                }
            }
            // Handle 'from ... import'
            Stmt::ImportFrom(node) => {
                for alias in &node.names {
                    self.imports.push(alias.name.to_string());
                }
            }
            // Control flow handling - traverse bodies recursively so
            // definitions inside conditionals and loops are still found.
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

    // Shared handler for FunctionDef and AsyncFunctionDef.
    fn visit_function_def(&mut self, name: &str, body: &[Stmt]) {
        // Shallow qualification: prefix with the class name only when the
        // immediate enclosing scope is a class, never a full dotted path.
        let recorded = match self.scope_stack.last() {
            Some(Scope::Class(class_name)) => format!("{}_{}", class_name, name),
            _ => name.to_string(),
        };
        self.functions.push(recorded);
        self.record_docstring("function", name, body);

        self.scope_stack.push(Scope::Function);
        for stmt in body {
            self.visit_stmt(stmt);
        }
        self.scope_stack.pop();
    }

    /// Stores the docstring for a definition, keyed by its bare name.
    ///
    /// A missing docstring is represented by the sentinel
    /// `"<kind> <name>: DocString not found."`, never by an error.
    fn record_docstring(&mut self, kind: &str, name: &str, body: &[Stmt]) {
        let text = match utils::docstring(body) {
            Some(text) => text,
            None => format!("{} {}: DocString not found.", kind, name),
        };
        self.docstrings.insert(name.to_string(), text);
    }
}

impl Default for StructureVisitor {
    fn default() -> Self {
        Self::new()
    }
}
