use std::sync::LazyLock;

use regex::Regex;

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})")).expect("valid token pattern")
}

/// `true` or `false` as a whole word.
pub static BOOL: LazyLock<Regex> = LazyLock::new(|| anchored(r"(?:true|false)\b"));

/// A variable name.
pub static VARIABLE: LazyLock<Regex> = LazyLock::new(|| anchored(r"[A-Za-z_][A-Za-z0-9_]*"));

/// A decimal number, optionally negative.
pub static NUMBER: LazyLock<Regex> = LazyLock::new(|| anchored(r"-?(?:\d+(?:\.\d+)?|\.\d+)"));

/// Regex flags following the closing `/`.
pub static REGEX_FLAGS: LazyLock<Regex> = LazyLock::new(|| anchored(r"[dgimsuvy]*"));

/// A comparison operator. Word operators include their trailing space.
pub static COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    anchored(r"==|!=|<=?|>=?|in |not in |starts with |ends with ")
});

/// `is` followed by a type name.
pub static TYPE_COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    anchored(r"is (?:string|number|boolean|list|dictionary|closure)\b")
});

/// An arithmetic operator.
pub static MATH: LazyLock<Regex> = LazyLock::new(|| anchored(r"\+|-|\*{1,2}|/|%"));

/// A logical operator in any letter case, with its trailing space.
pub static OPERATOR: LazyLock<Regex> = LazyLock::new(|| anchored(r"(?i:and|xor|or) "));

/// An assignment operator that is not the start of `==`.
pub static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| anchored(r"[+\-*/]?=(?:[^=]|$)"));

/// The assignment operator itself.
pub static ASSIGNMENT_OPERATOR: LazyLock<Regex> = LazyLock::new(|| anchored(r"[+\-*/]?="));

/// `++` or `--`.
pub static STEP: LazyLock<Regex> = LazyLock::new(|| anchored(r"\+\+|--"));

/// A variable name directly followed by `++` or `--`.
pub static POST_STEP: LazyLock<Regex> = LazyLock::new(|| {
    anchored(r"[A-Za-z_][A-Za-z0-9_]*(?:\+\+|--)")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_operators_need_their_space() {
        assert!(COMPARISON.is_match("in [1]"));
        assert!(!COMPARISON.is_match("index"));
        assert!(OPERATOR.is_match("AND b"));
        assert!(!OPERATOR.is_match("order"));
    }

    #[test]
    fn assignment_is_not_equality() {
        assert!(ASSIGNMENT.is_match("= 5"));
        assert!(ASSIGNMENT.is_match("+=1"));
        assert!(ASSIGNMENT.is_match("="));
        assert!(!ASSIGNMENT.is_match("== 5"));
    }

    #[test]
    fn booleans_are_whole_words() {
        assert!(BOOL.is_match("true"));
        assert!(!BOOL.is_match("trueish"));
        assert!(!BOOL.is_match("false_flag"));
    }
}
