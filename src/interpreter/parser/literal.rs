use std::rc::Rc;

use crate::{
    error::{ParseError, RuntimeError},
    grammar::PartKind,
    interpreter::{
        evaluator::core::{EvalResult, Thunk, VariableRef},
        parser::{
            core::{Continuation, ParseResult, Parser},
            patterns::{BOOL, NUMBER, REGEX_FLAGS, VARIABLE},
        },
        value::{core::Value, pattern::RegexPattern},
        variables::Variables,
    },
    util::{json::normalize_quotes, num::text_to_number},
};

impl Parser {
    pub(crate) fn test_literal(&mut self) -> bool {
        self.test_bool()
        || self.test_variable()
        || self.test_string()
        || self.test_list()
        || self.test_number()
        || self.test_regex()
        || self.test_macro()
    }

    /// Parses a literal and whatever `continuation` allows to follow it.
    ///
    /// Grammar: `literal := bool | variable | string | list | number | regex
    /// | macro`
    ///
    /// A variable that is the very first rule of the whole expression may be
    /// followed by an assignment, which then consumes the rest of the input.
    pub(crate) fn parse_literal(&mut self, continuation: Continuation) -> ParseResult<Thunk> {
        let value = if self.test_bool() {
            self.parse_bool()
        } else if self.test_variable() {
            let variable = self.parse_variable();
            if self.cursor.is_leading_variable() {
                self.cursor.discard_whitespace();
                if self.test_assignment() {
                    return self.parse_assignment(variable);
                }
            }
            variable.thunk
        } else if self.test_string() {
            self.parse_string()?
        } else if self.test_list() {
            let index = self.cursor.index();
            let list = self.parse_list();
            self.recover(list, index)?
        } else if self.test_number() {
            self.parse_number()
        } else if self.test_regex() {
            let index = self.cursor.index();
            let regex = self.parse_regex();
            self.recover(regex, index)?
        } else if self.test_macro() {
            self.parse_macro()?
        } else {
            return self.unexpected();
        };

        self.cursor.discard_whitespace();
        self.parse_continuation(value, continuation)
    }

    fn test_bool(&mut self) -> bool {
        self.cursor.test_symbol(&*BOOL, 0)
    }

    pub(crate) fn test_variable(&mut self) -> bool {
        self.cursor.test_symbol(&*VARIABLE, 0)
    }

    fn test_string(&mut self) -> bool {
        self.cursor.test_symbol("'", 0)
    }

    fn test_list(&mut self) -> bool {
        self.cursor.test_symbol("[", 0)
    }

    fn test_number(&mut self) -> bool {
        self.cursor.test_symbol(&*NUMBER, 0)
    }

    fn test_regex(&mut self) -> bool {
        self.cursor.test_symbol("/", 0)
    }

    fn test_macro(&mut self) -> bool {
        self.cursor.test_symbol("{", 0)
    }

    /// Consumes the text matched by `pattern`.
    pub(crate) fn take_match(&mut self, pattern: &regex::Regex) -> String {
        let length = self.cursor.peek_match(pattern).map_or(0, |m| m.chars().count());
        self.cursor.take(length)
    }

    fn read_bool(&mut self) -> bool {
        self.cursor.enter(PartKind::Bool);
        self.take_match(&BOOL) == "true"
    }

    fn parse_bool(&mut self) -> Thunk {
        Thunk::constant(Value::Bool(self.read_bool()))
    }

    /// Parses a variable reference. The returned thunk reads the variable
    /// anew on every evaluation.
    pub(crate) fn parse_variable(&mut self) -> VariableRef {
        self.cursor.enter(PartKind::Variable);
        let name = self.take_match(&VARIABLE);
        let variables = Rc::clone(&self.variables);
        let lookup = name.clone();
        VariableRef { name,
                      thunk: Thunk::new(move || Ok(variables.resolve(&lookup))) }
    }

    /// Parses a string literal. Characters escaped with a backslash are
    /// taken literally, so `'it\'s'` is `it's`.
    fn parse_string(&mut self) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::String);
        self.cursor.take(1);

        let mut text = String::new();
        while !self.test_string_end()? {
            text.push_str(&self.cursor.take(1));
        }
        self.cursor.take(1);

        Ok(Thunk::constant(Value::Text(text)))
    }

    fn test_string_end(&mut self) -> ParseResult<bool> {
        if self.cursor.at_end() {
            if self.strict {
                return Err(ParseError::UnexpectedEndOfString { index: self.cursor.index() });
            }
            return Ok(true);
        }
        Ok(self.cursor.test_symbol("'", 0))
    }

    /// Reads a bracket-balanced list literal and decodes it as JSON.
    ///
    /// Strings may be quoted with `'` as well as `"`.
    fn read_list(&mut self) -> ParseResult<Value> {
        self.cursor.enter(PartKind::List);
        let index = self.cursor.index();
        let mut text = self.cursor.take(1);

        let mut nesting = 0_usize;
        while nesting > 0 || !self.test_list_end()? {
            if self.test_list() {
                nesting += 1;
            } else if self.test_list_end()? {
                nesting = nesting.saturating_sub(1);
            }
            text.push_str(&self.cursor.take(1));
        }
        text.push_str(&self.cursor.take(1));

        let json = serde_json::from_str::<serde_json::Value>(&normalize_quotes(&text)).map_err(|e| {
                       ParseError::InvalidList { details: e.to_string(),
                                                 index }
                   })?;
        Ok(Value::from_json(json).unwrap_or_else(|| Value::Text(String::new())))
    }

    fn parse_list(&mut self) -> ParseResult<Thunk> {
        self.read_list().map(Thunk::constant)
    }

    fn test_list_end(&mut self) -> ParseResult<bool> {
        if self.cursor.at_end() {
            if self.strict {
                return Err(ParseError::UnexpectedEndOfList { index: self.cursor.index() });
            }
            return Ok(true);
        }
        Ok(self.cursor.test_symbol("]", 0))
    }

    fn read_number(&mut self) -> f64 {
        self.cursor.enter(PartKind::Number);
        text_to_number(&self.take_match(&NUMBER))
    }

    fn parse_number(&mut self) -> Thunk {
        Thunk::constant(Value::Number(self.read_number()))
    }

    /// Reads a regex literal: `/pattern/flags`. An escaped `/` belongs to
    /// the pattern.
    fn read_regex(&mut self) -> ParseResult<RegexPattern> {
        self.cursor.enter(PartKind::Regex);
        let index = self.cursor.index();
        self.cursor.take(1);

        let mut source = String::new();
        while !self.test_regex_end()? {
            source.push_str(&self.cursor.take(1));
        }
        self.cursor.take(1);
        let flags = self.take_match(&REGEX_FLAGS);

        RegexPattern::new(&source, &flags).map_err(|e| ParseError::InvalidRegex { details: e.to_string(),
                                                                                  index })
    }

    fn parse_regex(&mut self) -> ParseResult<Thunk> {
        self.read_regex().map(|pattern| Thunk::constant(Value::from(pattern)))
    }

    fn test_regex_end(&mut self) -> ParseResult<bool> {
        if self.cursor.at_end() {
            if self.strict {
                return Err(ParseError::UnexpectedEndOfRegex { index: self.cursor.index() });
            }
            return Ok(true);
        }
        Ok(self.cursor.test_symbol("/", 0))
    }

    /// Parses a brace-balanced macro literal.
    ///
    /// The literal is expanded by the host on every evaluation, and the
    /// expanded text is read back as a value with [`Parser::parse_macro_value`].
    fn parse_macro(&mut self) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Macro);
        let index = self.cursor.index();
        let mut raw = self.cursor.take(1);

        let mut nesting = 0_usize;
        while nesting > 0 || !self.test_macro_end()? {
            if self.test_macro() {
                nesting += 1;
            } else if self.test_macro_end()? {
                nesting = nesting.saturating_sub(1);
            }
            raw.push_str(&self.cursor.take(1));
        }
        raw.push_str(&self.cursor.take(1));

        let variables = Rc::clone(&self.variables);
        Ok(Thunk::new(move || expand_macro(&raw, &variables, index)))
    }

    fn test_macro_end(&mut self) -> ParseResult<bool> {
        if self.cursor.at_end() {
            if self.strict {
                return Err(ParseError::UnexpectedEndOfMacro { index: self.cursor.index() });
            }
            return Ok(true);
        }
        Ok(self.cursor.test_symbol("}", 0))
    }

    /// Reads the text a macro expanded to as a single value.
    ///
    /// Tries a boolean, a number, a list and a regex, in that order. Text
    /// that starts with none of them is returned verbatim as text.
    ///
    /// # Returns
    /// - `Ok(Value)`: The value the text denotes.
    /// - `Err(ParseError)`: If the text starts like a list or regex but is
    ///   not a valid one.
    pub(crate) fn parse_macro_value(&mut self) -> ParseResult<Value> {
        if self.test_bool() {
            Ok(Value::Bool(self.read_bool()))
        } else if self.test_number() {
            Ok(Value::Number(self.read_number()))
        } else if self.test_list() {
            self.read_list()
        } else if self.test_regex() {
            self.read_regex().map(Value::from)
        } else {
            Ok(Value::Text(self.cursor.text().to_string()))
        }
    }
}

/// Expands a macro literal and reads the result back as a value.
fn expand_macro(raw: &str, variables: &Rc<Variables>, index: usize) -> EvalResult<Value> {
    let expanded = variables.host().macros.expand(raw, variables.scope());
    let mut parser = Parser::with_variables(&expanded, true, Rc::clone(variables));
    parser.parse_macro_value()
          .map_err(|e| RuntimeError::MacroExpansion { details: e.to_string(),
                                                      index })
}
