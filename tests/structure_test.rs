use rustpython_parser::{parse, Mode};
use stylecheck_rs::structure::StructureVisitor;

macro_rules! visit_code {
    ($code:expr, $visitor:ident) => {
        let tree = parse($code, Mode::Module, "test.py").expect("Failed to parse");
        let mut $visitor = StructureVisitor::new();

        if let rustpython_ast::Mod::Module(module) = tree {
            for stmt in &module.body {
                $visitor.visit_stmt(stmt);
            }
        }
    };
}

#[test]
fn test_imports_in_encounter_order() {
    let code = r#"
import os
import sys
from collections import OrderedDict, defaultdict
import zlib
"#;
    visit_code!(code, visitor);

    assert_eq!(
        visitor.imports,
        vec!["os", "sys", "OrderedDict", "defaultdict", "zlib"]
    );
}

#[test]
fn test_import_records_original_name_not_alias() {
    let code = r#"
import numpy as np
from os.path import join as path_join
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.imports, vec!["numpy", "join"]);
}

#[test]
fn test_duplicate_imports_kept() {
    let code = r#"
import os
import os
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.imports, vec!["os", "os"]);
}

#[test]
fn test_method_qualified_by_enclosing_class() {
    let code = r#"
class Bar:
    def foo(self):
        pass

def foo():
    pass
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.classes, vec!["Bar"]);
    assert_eq!(visitor.functions, vec!["Bar_foo", "foo"]);
}

#[test]
fn test_function_after_class_is_not_qualified() {
    // The scope stack is popped when the class body ends, so a later
    // top-level function stays bare.
    let code = r#"
class First:
    def method(self):
        pass

class Second:
    pass

def free():
    pass
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.classes, vec!["First", "Second"]);
    assert_eq!(visitor.functions, vec!["First_method", "free"]);
}

#[test]
fn test_inner_class_method_uses_nearest_class() {
    let code = r#"
class Outer:
    class Inner:
        def m(self):
            pass
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.classes, vec!["Outer", "Inner"]);
    // Only the immediately enclosing class qualifies, never a dotted path.
    assert_eq!(visitor.functions, vec!["Inner_m"]);
}

#[test]
fn test_async_function_recorded() {
    let code = r#"
class Client:
    async def fetch(self):
        pass

async def run():
    pass
"#;
    visit_code!(code, visitor);

    assert_eq!(visitor.functions, vec!["Client_fetch", "run"]);
}

#[test]
fn test_definitions_inside_control_flow_found() {
    let code = r#"
if True:
    def conditional():
        pass

for i in range(3):
    def looped():
        pass

try:
    def tried():
        pass
except ValueError:
    def handled():
        pass
finally:
    def final():
        pass
"#;
    visit_code!(code, visitor);

    assert_eq!(
        visitor.functions,
        vec!["conditional", "looped", "tried", "handled", "final"]
    );
}

#[test]
fn test_docstring_stored_verbatim() {
    let code = r#"
def documented():
    """Does the documented thing."""
    pass
"#;
    visit_code!(code, visitor);

    assert_eq!(
        visitor.docstrings.get("documented").map(String::as_str),
        Some("Does the documented thing.")
    );
}

#[test]
fn test_docstring_sentinel_exact() {
    let code = r#"
def baz():
    pass

class Quux:
    pass
"#;
    visit_code!(code, visitor);

    assert_eq!(
        visitor.docstrings.get("baz").map(String::as_str),
        Some("function baz: DocString not found.")
    );
    assert_eq!(
        visitor.docstrings.get("Quux").map(String::as_str),
        Some("class Quux: DocString not found.")
    );
}

#[test]
fn test_docstring_key_collision_last_write_wins() {
    // A free function and a method sharing a bare name collide in the
    // docstrings mapping: the later extraction overwrites the text while
    // the key keeps its original position.
    let code = r#"
def helper():
    """first"""
    pass

class Toolbox:
    def helper(self):
        """second"""
        pass
"#;
    visit_code!(code, visitor);

    assert_eq!(
        visitor.docstrings.get("helper").map(String::as_str),
        Some("second")
    );
    let keys: Vec<&String> = visitor.docstrings.keys().collect();
    assert_eq!(keys, vec!["helper", "Toolbox"]);
}

#[test]
fn test_docstrings_keyed_by_bare_method_name() {
    let code = r#"
class Greeter:
    def greet(self):
        """Says hello."""
        pass
"#;
    visit_code!(code, visitor);

    // The functions list holds the qualified name, the docstring key stays
    // bare.
    assert_eq!(visitor.functions, vec!["Greeter_greet"]);
    assert_eq!(
        visitor.docstrings.get("greet").map(String::as_str),
        Some("Says hello.")
    );
    assert!(visitor.docstrings.get("Greeter_greet").is_none());
}
