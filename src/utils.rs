use rustpython_ast::{self as ast, Expr, Stmt};

/// Counts the newline-delimited lines of the raw source text.
///
/// This matches how the report states "Total lines of code": a trailing
/// newline does not start an extra line.
pub fn count_lines(source: &str) -> usize {
    source.lines().count()
}

/// Extracts the leading docstring from a definition body, if present.
///
/// A docstring is the first statement of the body when that statement is a
/// bare string constant expression. The text is returned verbatim, without
/// any dedenting or trimming.
pub fn docstring(body: &[Stmt]) -> Option<String> {
    if let Some(Stmt::Expr(node)) = body.first() {
        if let Expr::Constant(constant) = &*node.value {
            if let ast::Constant::Str(s) = &constant.value {
                return Some(s.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_ast::Mod;
    use rustpython_parser::{parse, Mode};

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        // Trailing newline does not add a line.
        assert_eq!(count_lines("a\nb\n"), 2);
    }

    fn first_function_body(source: &str) -> Vec<Stmt> {
        let tree = parse(source, Mode::Module, "test.py").expect("Failed to parse");
        if let Mod::Module(module) = tree {
            if let Some(Stmt::FunctionDef(node)) = module.body.into_iter().next() {
                return node.body;
            }
        }
        panic!("expected a function definition");
    }

    #[test]
    fn test_docstring_present() {
        let body = first_function_body("def f():\n    \"does a thing\"\n    pass\n");
        assert_eq!(docstring(&body).as_deref(), Some("does a thing"));
    }

    #[test]
    fn test_docstring_absent() {
        let body = first_function_body("def f():\n    pass\n");
        assert_eq!(docstring(&body), None);
    }

    #[test]
    fn test_non_string_leading_constant_is_not_a_docstring() {
        let body = first_function_body("def f():\n    42\n    pass\n");
        assert_eq!(docstring(&body), None);
    }
}
