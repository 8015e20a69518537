/// Keyword opening a class declaration
const CLASS_KEYWORD: &str = "class";

/// Keyword opening a function declaration
const FUNC_KEYWORD: &str = "def";

/// Conventional suffix of a Python module file
const MODULE_SUFFIX: &str = ".py";

/// Substring marking an initializer file
const INIT_MARKER: &str = "init";

/// Substring marking a test file
const TEST_MARKER: &str = "test";

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Top-level class declaration carrying the captured class name
    ClassDecl(String),

    /// Top-level function declaration carrying the captured function name
    FuncDecl(String),

    /// Top-level assignment carrying every target name from its left-hand side
    ConstAssign(Vec<String>),

    /// Any other line; contributes nothing
    Other,
}

/// Classify a single line of source text.
///
/// Checks are mutually exclusive and first-match-wins: class declaration,
/// then function declaration, then constant assignment. Indentation is the
/// count of leading space characters only; tabs contribute zero, so a
/// tab-indented body line reads as top-level. The assignment check does not
/// recognize statement keywords or comparison operators, so a top-level
/// `if a == b:` is captured as a constant named `ifa`.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(CLASS_KEYWORD) {
        return LineKind::ClassDecl(strip_declaration(line, CLASS_KEYWORD));
    }

    let indentation = leading_spaces(line);

    if indentation == 0 && line.starts_with(FUNC_KEYWORD) {
        return LineKind::FuncDecl(strip_declaration(line, FUNC_KEYWORD));
    }

    if indentation == 0 && line.contains('=') {
        return LineKind::ConstAssign(assignment_targets(line));
    }

    LineKind::Other
}

/// Module-file filter: initializer and test files are rejected by substring
/// match on the file name. A real directory entry never has an empty name,
/// so the suffix check inside the empty-name branch never rejects anything
/// in practice.
pub fn is_module_file(name: &str) -> bool {
    if name.is_empty() && !name.ends_with(MODULE_SUFFIX) {
        return false;
    }
    !(name.contains(INIT_MARKER) || name.contains(TEST_MARKER))
}

/// Count of leading space characters on the line
fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Remove every occurrence of the keyword from the line, then drop
/// everything from the first `(` onward. A `(` with nothing after it
/// survives. Whatever remains, leading whitespace and trailing colon
/// included, is the captured name.
fn strip_declaration(line: &str, keyword: &str) -> String {
    let stripped = line.replace(keyword, "");
    match stripped.find('(') {
        Some(pos) if pos + 1 < stripped.len() => stripped[..pos].to_string(),
        _ => stripped,
    }
}

/// Split the text before the first `=` into assignment target names: space
/// characters removed, comma-separated, trailing empty segments dropped.
/// An entirely empty left-hand side still yields one empty token.
fn assignment_targets(line: &str) -> Vec<String> {
    let lhs = line.split('=').next().unwrap_or("").replace(' ', "");
    if lhs.is_empty() {
        return vec![String::new()];
    }

    let mut targets: Vec<String> = lhs.split(',').map(str::to_string).collect();
    while targets.last().is_some_and(|t| t.is_empty()) {
        targets.pop();
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("class Foo(Base):", " Foo" ; "base list stripped from first paren")]
    #[test_case("class Foo:", " Foo:" ; "no paren keeps trailing colon")]
    #[test_case("class Foo(", " Foo(" ; "lone trailing paren survives")]
    #[test_case("class  Spaced (Base):", "  Spaced " ; "inner spacing preserved")]
    fn classifies_class_declarations(line: &str, expected: &str) {
        assert_eq!(classify(line), LineKind::ClassDecl(expected.to_string()));
    }

    #[test]
    fn class_keyword_is_removed_everywhere_in_the_line() {
        // "classes = []" starts with the class keyword and shadows the
        // assignment check entirely
        assert_eq!(
            classify("classes = []"),
            LineKind::ClassDecl("es = []".to_string())
        );
    }

    #[test_case("def bar(x, y):", " bar" ; "params stripped from first paren")]
    #[test_case("def bar():", " bar" ; "empty params stripped")]
    #[test_case("def defend():", " end" ; "keyword removed inside the name too")]
    fn classifies_function_declarations(line: &str, expected: &str) {
        assert_eq!(classify(line), LineKind::FuncDecl(expected.to_string()));
    }

    #[test]
    fn indented_function_is_not_captured() {
        assert_eq!(classify("    def bar(x, y):"), LineKind::Other);
    }

    #[test]
    fn tab_indented_function_is_not_captured() {
        // The line does not start with the keyword, and the tab keeps the
        // space count at zero, so neither branch fires
        assert_eq!(classify("\tdef bar():"), LineKind::Other);
    }

    #[test_case("x = 1", &["x"] ; "single target")]
    #[test_case("x, y = 1, 2", &["x", "y"] ; "tuple unpacking targets")]
    #[test_case("x,y,z = 1, 2, 3", &["x", "y", "z"] ; "dense tuple targets")]
    #[test_case("MAX = MIN = 0", &["MAX"] ; "chained assignment keeps first segment")]
    #[test_case("x, = (1,)", &["x"] ; "trailing empty target dropped")]
    #[test_case("result = compute(1, 2)", &["result"] ; "call arguments ignored")]
    #[test_case("if a == b:", &["ifa"] ; "top level comparison misfires")]
    #[test_case("= 5", &[""] ; "empty left hand side yields one empty token")]
    fn classifies_constant_assignments(line: &str, expected: &[&str]) {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(classify(line), LineKind::ConstAssign(expected));
    }

    #[test]
    fn tab_indented_assignment_reads_as_top_level() {
        // Tabs are not counted as indentation and are not removed from the
        // captured target either
        assert_eq!(
            classify("\tx = 5"),
            LineKind::ConstAssign(vec!["\tx".to_string()])
        );
    }

    #[test]
    fn indented_assignment_is_not_captured() {
        assert_eq!(classify("    x = 5"), LineKind::Other);
    }

    #[test_case("" ; "empty line")]
    #[test_case("import os" ; "import statement")]
    #[test_case("print('hello')" ; "bare call")]
    #[test_case("# comment" ; "comment line")]
    fn ignores_other_lines(line: &str) {
        assert_eq!(classify(line), LineKind::Other);
    }

    #[test_case("shapes.py", true ; "plain module accepted")]
    #[test_case("README", true ; "extension is not actually checked")]
    #[test_case("__init__.py", false ; "initializer rejected")]
    #[test_case("initialize.py", false ; "init substring rejected anywhere")]
    #[test_case("test_utils.py", false ; "test file rejected")]
    #[test_case("latest.py", false ; "test substring rejected anywhere")]
    fn filters_module_files(name: &str, expected: bool) {
        assert_eq!(is_module_file(name), expected);
    }
}
