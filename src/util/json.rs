/// Rewrites single-quoted strings in JSON-like text as double-quoted ones.
///
/// Double-quoted strings are copied unchanged. Inside a single-quoted string
/// `\'` becomes a plain quote and a bare `"` is escaped; other escapes are
/// kept as written.
///
/// ## Example
/// ```
/// use boolparser::util::json::normalize_quotes;
///
/// assert_eq!(normalize_quotes("['a', \"b\"]"), "[\"a\", \"b\"]");
/// assert_eq!(normalize_quotes(r"['it\'s']"), "[\"it's\"]");
/// ```
#[must_use]
pub fn normalize_quotes(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, '\'') => {
                quote = Some('\'');
                normalized.push('"');
            },
            (None, '"') => {
                quote = Some('"');
                normalized.push('"');
            },
            (None, _) => normalized.push(c),
            (Some(_), '\\') => match chars.next() {
                Some('\'') if quote == Some('\'') => normalized.push('\''),
                Some(escaped) => {
                    normalized.push('\\');
                    normalized.push(escaped);
                },
                None => normalized.push('\\'),
            },
            (Some('\''), '\'') => {
                quote = None;
                normalized.push('"');
            },
            (Some('\''), '"') => normalized.push_str("\\\""),
            (Some('"'), '"') => {
                quote = None;
                normalized.push('"');
            },
            (Some(_), _) => normalized.push(c),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quoted_text_is_untouched() {
        let text = r#"[1, "a'b", "c\"d", [true]]"#;
        assert_eq!(normalize_quotes(text), text);
    }

    #[test]
    fn single_quotes_become_double_quotes() {
        assert_eq!(normalize_quotes("['foobar','baz']"), r#"["foobar","baz"]"#);
        assert_eq!(normalize_quotes("[['x'], 2]"), r#"[["x"], 2]"#);
    }

    #[test]
    fn quotes_inside_single_quoted_strings_are_escaped() {
        assert_eq!(normalize_quotes(r#"['say "hi"']"#), r#"["say \"hi\""]"#);
        assert_eq!(normalize_quotes(r"['a\'b', 'c\nd']"), r#"["a'b", "c\nd"]"#);
    }
}
