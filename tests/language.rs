use std::{error::Error, fs};

use boolparser::{
    error::{ParseError, RuntimeError},
    evaluate,
    host::{Host, Scope},
    interpreter::value::core::Value,
    parse,
};
use walkdir::WalkDir;

fn run(src: &str) -> Result<Value, Box<dyn Error>> {
    evaluate(src, true, &Scope::new(), &Host::in_memory())
}

fn assert_success(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "expression: {src}"),
        Err(e) => panic!("Expression failed: {src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = run(src) {
        panic!("Expression succeeded with {value} but was expected to fail: {src}")
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src, true, &Scope::new(), &Host::in_memory()) {
        Ok(_) => panic!("Expression parsed but was expected to fail: {src}"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str, strict: bool) -> RuntimeError {
    let thunk = parse(src, strict, &Scope::new(), &Host::in_memory())
        .unwrap_or_else(|e| panic!("Expression failed to parse: {src}\nError: {e}"));
    match thunk.eval() {
        Ok(value) => panic!("Expression evaluated to {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (src, expected) = line.split_once("=>")
                                      .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'",
                                                                number + 1));
            count += 1;
            match run(src.trim()) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected.trim(),
                                        "{path:?}:{}: {src}",
                                        number + 1),
                Err(e) => panic!("{path:?}:{}: {src}\nError: {e}", number + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn literal_thunks_are_idempotent() {
    let thunk = parse("[1, 2] + 'x'", true, &Scope::new(), &Host::in_memory()).unwrap();
    let first = thunk.eval().unwrap();
    assert_eq!(first, thunk.eval().unwrap());
    assert_eq!(first, Value::from("1,2x"));
}

#[test]
fn values_keep_their_types() {
    assert_eq!(run("1 + 1").unwrap(), Value::Number(2.0));
    assert_eq!(run("'a'").unwrap(), Value::from("a"));
    assert_eq!(run("1 == 1").unwrap(), Value::Bool(true));
    assert_eq!(run("true xor false").unwrap(), Value::Bool(true));
    assert!(matches!(run("[1]").unwrap(), Value::List(_)));
    assert!(matches!(run("/a/g").unwrap(), Value::Regex(_)));
}

#[test]
fn comparisons_bind_before_logic() {
    assert_success("1 == 1 and 2 == 3", "false");
    assert_success("1 == 2 or 2 == 2 and 3 == 3", "true");
    assert_success("1 < 2 xor 2 < 3", "false");
}

#[test]
fn literal_comparison_right_side_takes_no_chain() {
    assert_failure("1 + 1 == 1 + 1");
    assert_success("1 + 1 == (1 + 1)", "true");
}

#[test]
fn parenthesized_operands_keep_their_chain() {
    assert_success("!(true) and false", "true");
    assert_success("!(1) == 2", "true");
    assert_success("!(1) + 1", "false");
    assert_success("2 * (3) + 1", "8");
    assert_success("1 == (1) + 1", "false");
    assert_success("false and (true) or true", "false");
}

#[test]
fn list_literals_accept_single_quotes() {
    assert_success("/foo/ in ['foobar','baz']", "true");
    assert_eq!(run("['a', \"b\"]").unwrap(), run("[\"a\",\"b\"]").unwrap());
    assert!(matches!(parse_error("['a', x]"), ParseError::InvalidList { .. }));
}

#[test]
fn arithmetic_is_only_followed_by_comparisons() {
    assert_failure("1 + 1 and true");
    assert_success("(1 + 1) and true", "true");
    assert_success("1 + 1 > 0 and true", "true");
    assert_success("2 * 2 is number", "true");
}

#[test]
fn whitespace_is_optional_between_symbols() {
    assert_success("1+2*3", "7");
    assert_success("(1==1) and (2==2)", "true");
    assert_failure("(1==1)and(2==2)");
    assert_success("  'a'  ==  'a'  ", "true");
}

#[test]
fn unsupported_regex_comparisons_fail() {
    assert!(matches!(runtime_error("/a/ < 'b'", true),
                     RuntimeError::UnsupportedRegexComparison { .. }));
    assert!(matches!(runtime_error("'a' in /a/", true),
                     RuntimeError::UnsupportedRegexComparison { .. }));
    assert!(matches!(runtime_error("/a/ in 'abc'", true),
                     RuntimeError::NotAContainer { .. }));
}

#[test]
fn containment_needs_a_container() {
    assert!(matches!(runtime_error("1 in 5", true), RuntimeError::NotAContainer { .. }));
    assert!(matches!(runtime_error("5 starts with 5", true), RuntimeError::TypeError { .. }));
}

#[test]
fn strict_mode_reports_unterminated_literals() {
    assert!(matches!(parse_error("(1 == 1"), ParseError::UnexpectedEndOfExpression { .. }));
    assert!(matches!(parse_error("'abc"), ParseError::UnexpectedEndOfString { .. }));
    assert!(matches!(parse_error("[1, 2"), ParseError::UnexpectedEndOfList { .. }));
    assert!(matches!(parse_error("/abc"), ParseError::UnexpectedEndOfRegex { .. }));
    assert!(matches!(parse_error("{abc"), ParseError::UnexpectedEndOfMacro { .. }));
    assert!(matches!(parse_error(""), ParseError::UnexpectedEndOfExpression { .. }));
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfExpression { .. }));
}

#[test]
fn strict_mode_reports_bad_input() {
    assert_eq!(parse_error("1 2"),
               ParseError::UnexpectedToken { token: "2".to_string(),
                                             index: 2, });
    assert_eq!(parse_error("1)"), ParseError::UnbalancedParenthesis { index: 1 });
    assert!(matches!(parse_error("++5"), ParseError::ExpectedVariable { .. }));
    assert!(matches!(parse_error("[1, x]"), ParseError::InvalidList { .. }));
    assert!(matches!(parse_error("/(/"), ParseError::InvalidRegex { .. }));
}

#[test]
fn assignment_is_only_allowed_first() {
    assert!(matches!(parse_error("(x = 5)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("a and x = 5"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1 == x = 5"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn lenient_mode_keeps_partial_results() {
    let lenient = |src: &str| {
        parse(src, false, &Scope::new(), &Host::in_memory()).map(|thunk| thunk.eval())
    };

    assert_eq!(lenient("1 == 1 junk").unwrap().unwrap(), Value::Bool(true));
    assert_eq!(lenient("'abc").unwrap().unwrap(), Value::from("abc"));
    assert_eq!(lenient("(true and false").unwrap().unwrap(), Value::Bool(false));
    assert_eq!(lenient("1)").unwrap().unwrap(), Value::Number(1.0));
}

#[test]
fn lenient_mode_defers_failures_to_evaluation() {
    assert!(matches!(runtime_error("1 +", false), RuntimeError::IncompleteExpression { .. }));
    assert!(matches!(runtime_error("[1, x]", false), RuntimeError::IncompleteExpression { .. }));
    assert!(matches!(runtime_error("/(/", false), RuntimeError::IncompleteExpression { .. }));
    assert!(matches!(runtime_error("", false), RuntimeError::IncompleteExpression { .. }));
}

#[test]
fn errors_render_their_index() {
    let message = parse_error("1 2").to_string();
    assert!(message.contains("index 2"), "unexpected message: {message}");
}
