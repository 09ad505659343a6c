use regex::{Regex, RegexBuilder};

/// Flags accepted after the closing `/` of a regex literal.
pub const REGEX_FLAGS: &str = "dgimsuvy";

/// A compiled regex literal.
///
/// Keeps the literal's source and flags next to the compiled matcher so the
/// value can be rendered back as `/source/flags`.
///
/// Flag handling:
/// - `i` matches case-insensitively,
/// - `m` lets `^` and `$` match at line boundaries,
/// - `s` lets `.` match newlines,
/// - `y` anchors the match at the start of the tested text,
/// - `d`, `g`, `u` and `v` are accepted and have no effect on testing.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    flags:  String,
    regex:  Regex,
}

impl RegexPattern {
    /// Compiles a pattern with the given literal flags.
    ///
    /// # Example
    /// ```
    /// use boolparser::interpreter::value::pattern::RegexPattern;
    ///
    /// let pattern = RegexPattern::new("dog|cat", "i").unwrap();
    /// assert!(pattern.is_match("A CAT"));
    /// assert_eq!(pattern.to_string(), "/dog|cat/i");
    /// ```
    pub fn new(source: &str, flags: &str) -> Result<Self, regex::Error> {
        let anchored = if flags.contains('y') {
            format!(r"\A(?:{source})")
        } else {
            source.to_string()
        };
        let regex = RegexBuilder::new(&anchored).case_insensitive(flags.contains('i'))
                                                .multi_line(flags.contains('m'))
                                                .dot_matches_new_line(flags.contains('s'))
                                                .build()?;

        Ok(Self { source: source.to_string(),
                  flags: flags.to_string(),
                  regex })
    }

    /// The pattern text between the slashes.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags following the closing slash.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Tests whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl std::fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
