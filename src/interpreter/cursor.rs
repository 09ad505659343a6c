use regex::Regex;

use crate::grammar::PartKind;

/// Something the cursor can look for at a position in the text.
pub trait Symbol {
    /// Whether `text` starts with this symbol.
    fn matches_start(&self, text: &str) -> bool;
}

impl Symbol for str {
    fn matches_start(&self, text: &str) -> bool {
        text.starts_with(self)
    }
}

impl Symbol for char {
    fn matches_start(&self, text: &str) -> bool {
        text.starts_with(*self)
    }
}

impl Symbol for Regex {
    fn matches_start(&self, text: &str) -> bool {
        self.find(text).is_some_and(|m| m.start() == 0)
    }
}

/// Escape-aware scanner over an expression.
///
/// The cursor owns all mutable parse state: the position, the parenthesis
/// depth, whether a backslash was just skipped at the current position, and
/// the trace of grammar rules entered so far. One cursor serves exactly one
/// parse.
///
/// Positions are counted in characters, not bytes.
///
/// # Example
/// ```
/// use boolparser::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new(r"\'a'");
///
/// // The escaped quote is not a quote, and the backslash is skipped.
/// assert!(!cursor.test_symbol("'", 0));
/// assert_eq!(cursor.index(), 1);
///
/// // Taking the character yields the quote itself.
/// assert_eq!(cursor.take(1), "'");
/// assert!(cursor.test_symbol("a", 0));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    text:          String,
    /// Byte offset of every character, followed by the text length.
    offsets:       Vec<usize>,
    index:         usize,
    depth:         i32,
    jumped_escape: bool,
    parts:         Vec<PartKind>,
}

impl Cursor {
    /// Creates a cursor at the start of `text` with depth `-1`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let offsets = text.char_indices()
                          .map(|(offset, _)| offset)
                          .chain(std::iter::once(text.len()))
                          .collect();
        Self { text: text.to_string(),
               offsets,
               index: 0,
               depth: -1,
               jumped_escape: false,
               parts: Vec::new() }
    }

    /// The full text being scanned.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current character index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current parenthesis depth. `-1` before the outermost expression has
    /// been entered, `0` inside it.
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    pub(crate) fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    /// The character at the current index.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The text from the current index onwards.
    #[must_use]
    pub fn rest(&self) -> &str {
        self.rest_at(self.index)
    }

    fn rest_at(&self, position: usize) -> &str {
        let position = position.min(self.len());
        &self.text[self.offsets[position]..]
    }

    /// Whether the scan has reached the end of the text.
    ///
    /// Besides the real end, a whitespace character followed by nothing but
    /// (at least one more) whitespace also counts as the end.
    #[must_use]
    pub fn at_end(&self) -> bool {
        let mut rest = self.rest().chars();
        match rest.next() {
            None => true,
            Some(c) if c.is_whitespace() => {
                let ahead = rest.as_str();
                !ahead.is_empty() && ahead.chars().all(char::is_whitespace)
            },
            Some(_) => false,
        }
    }

    /// Consumes `length` characters and returns them.
    pub fn take(&mut self, length: usize) -> String {
        self.jumped_escape = false;
        let start = self.index.min(self.len());
        let end = (self.index + length).min(self.len());
        self.index += length;
        self.text[self.offsets[start]..self.offsets[end]].to_string()
    }

    /// Consumes all whitespace at the current position.
    pub fn discard_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.take(1);
        }
    }

    /// Tests whether `symbol` starts `offset` characters ahead, honouring
    /// backslash escapes.
    ///
    /// A run of backslashes directly in front of the symbol escapes it: the
    /// test fails, and when testing at the current position (`offset == 0`)
    /// exactly one backslash is skipped so that the next `take` yields the
    /// escaped text. Repeated tests at the same position skip nothing more.
    pub fn test_symbol<S: Symbol + ?Sized>(&mut self, symbol: &S, offset: usize) -> bool {
        let mut position = self.index + offset;
        if self.jumped_escape {
            position = position.saturating_sub(1);
        }
        let escapes = self.rest_at(position).chars().take_while(|c| *c == '\\').count();

        if !symbol.matches_start(self.rest_at(position + escapes)) {
            return false;
        }
        if escapes == 0 {
            return true;
        }
        if !self.jumped_escape && offset == 0 {
            self.index += 1;
            self.jumped_escape = true;
        }
        false
    }

    /// Returns the text matched by an anchored `pattern` at the current
    /// position, without consuming it.
    #[must_use]
    pub fn peek_match(&self, pattern: &Regex) -> Option<&str> {
        pattern.find(self.rest()).filter(|m| m.start() == 0).map(|m| m.as_str())
    }

    /// Records that a grammar rule was entered.
    pub fn enter(&mut self, kind: PartKind) {
        self.parts.push(kind);
    }

    /// The grammar rules entered so far, in order.
    #[must_use]
    pub fn parts(&self) -> &[PartKind] {
        &self.parts
    }

    /// Whether the only rule entered so far is a variable reference.
    #[must_use]
    pub fn is_leading_variable(&self) -> bool {
        self.parts == [PartKind::Variable]
    }

    /// The text from the current index up to the next whitespace, for error
    /// messages.
    #[must_use]
    pub fn upcoming_token(&self) -> String {
        self.rest().split_whitespace().next().unwrap_or_default().to_string()
    }
}
