use std::rc::Rc;

use tracing::trace;

use crate::{
    error::ParseError,
    grammar::PartKind,
    host::{Host, Scope},
    interpreter::{
        cursor::Cursor,
        evaluator::{core::Thunk, logic},
        value::core::Value,
        variables::Variables,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Which rules may follow a parsed value.
///
/// The context a literal is parsed in decides how far it reaches to the
/// right. A literal at the start of an expression may be followed by any
/// chain. A literal inside a logical chain may still be compared or used in
/// arithmetic but leaves the next logical operator to the chain. A literal
/// operand of a comparison or arithmetic chain takes nothing at all.
///
/// A parenthesized expression always takes its full trailing chain,
/// wherever it appears: `!(a) == b` negates the comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Continuation {
    pub(crate) comparison: bool,
    pub(crate) operator:   bool,
    pub(crate) math:       bool,
}

impl Continuation {
    pub(crate) const FULL: Self = Self { comparison: true,
                                         operator:   true,
                                         math:       true, };
    pub(crate) const LOGIC_OPERAND: Self = Self { comparison: true,
                                                  operator:   false,
                                                  math:       true, };
    pub(crate) const NONE: Self = Self { comparison: false,
                                         operator:   false,
                                         math:       false, };
}

/// Compiles expressions into thunks.
///
/// A parser is created for a scope and owns a private child of it, where
/// named arguments are bound. Each call to [`Parser::parse`] scans its input
/// with a fresh cursor; the returned thunk keeps access to the private scope
/// and the host, and can be evaluated any number of times.
///
/// # Example
/// ```
/// use boolparser::{host::{Host, Scope},
///                  interpreter::{parser::Parser, value::core::Value}};
///
/// let scope = Scope::new();
/// let mut parser = Parser::new(&scope, [("limit".to_string(), Value::Number(3.0))],
///                              Host::in_memory());
///
/// let thunk = parser.parse("limit > 2 and 'abc' starts with 'a'", true).unwrap();
/// assert_eq!(thunk.eval().unwrap(), Value::Bool(true));
/// ```
pub struct Parser {
    pub(crate) cursor:    Cursor,
    pub(crate) strict:    bool,
    pub(crate) variables: Rc<Variables>,
}

impl Parser {
    /// Creates a parser for `scope`.
    ///
    /// Every named argument is declared in the parser's private scope,
    /// except those whose name starts with `_`.
    ///
    /// # Parameters
    /// - `scope`: The scope expressions run in. Writes to variables that do
    ///   not exist yet are declared here.
    /// - `arguments`: Named values visible to the expressions.
    /// - `host`: The session and global stores and the macro expander.
    pub fn new<I>(scope: &Scope, arguments: I, host: Host) -> Self
        where I: IntoIterator<Item = (String, Value)>
    {
        let private = scope.child();
        for (name, value) in arguments {
            if name.starts_with('_') {
                continue;
            }
            private.declare(&name, value);
        }
        Self::with_variables("", true, Rc::new(Variables::new(private, host)))
    }

    pub(crate) fn with_variables(text: &str, strict: bool, variables: Rc<Variables>) -> Self {
        Self { cursor: Cursor::new(text),
               strict,
               variables }
    }

    /// The scope named arguments are bound in.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        self.variables.scope()
    }

    /// The grammar rules entered by the most recent parse, in order.
    #[must_use]
    pub fn parts(&self) -> &[PartKind] {
        self.cursor.parts()
    }

    /// Compiles `text` into a thunk.
    ///
    /// In strict mode any syntax error fails the parse. In lenient mode the
    /// parser stops at the first problem and returns what it has; parts it
    /// could not complete fail only when evaluated.
    ///
    /// # Parameters
    /// - `text`: The expression.
    /// - `strict`: Whether syntax errors are reported.
    ///
    /// # Returns
    /// - `Ok(Thunk)`: The compiled expression.
    /// - `Err(ParseError)`: In strict mode, the first syntax error.
    pub fn parse(&mut self, text: &str, strict: bool) -> ParseResult<Thunk> {
        trace!(text, strict, "parsing expression");
        self.cursor = Cursor::new(text);
        self.strict = strict;

        let thunk = self.parse_expression(Continuation::FULL)?;

        if self.strict && !self.cursor.at_end() {
            let index = self.cursor.index();
            if self.cursor.test_symbol(")", 0) {
                return Err(ParseError::UnbalancedParenthesis { index });
            }
            return Err(self.unexpected_token());
        }
        Ok(thunk)
    }

    /// Parses an expression: the outermost one, or a parenthesized one when
    /// the depth is already zero or more.
    ///
    /// Grammar: `expression := '('? body ')'? trailing`
    pub(crate) fn parse_expression(&mut self, continuation: Continuation) -> ParseResult<Thunk> {
        self.cursor.set_depth(self.cursor.depth() + 1);
        if self.cursor.depth() != 0 {
            self.cursor.enter(PartKind::Expression);
            self.cursor.take(1);
        }
        self.cursor.discard_whitespace();

        let body = self.parse_body()?;

        self.cursor.discard_whitespace();
        if !self.test_expression_end()? {
            // Only reachable when lenient: keep what was parsed so far.
            self.cursor.set_depth(self.cursor.depth() - 1);
            return Ok(body);
        }
        if self.cursor.depth() != 0 {
            self.cursor.take(1);
        }
        self.cursor.set_depth(self.cursor.depth() - 1);
        self.cursor.discard_whitespace();

        self.parse_continuation(body, continuation)
    }

    /// Parses the first element of an expression.
    fn parse_body(&mut self) -> ParseResult<Thunk> {
        if self.test_expression() {
            self.parse_expression(Continuation::FULL)
        } else if self.test_flip() {
            self.parse_flip(Continuation::FULL)
        } else if self.test_pre_math() {
            self.parse_pre_math(Continuation::FULL)
        } else if self.test_post_math() {
            self.parse_post_math(Continuation::FULL)
        } else if self.test_literal() {
            self.parse_literal(Continuation::FULL)
        } else {
            self.unexpected()
        }
    }

    /// Parses logical negation.
    ///
    /// Grammar: `flip := '!' (expression | literal | flip) trailing`
    ///
    /// A negated literal takes no trailing rules of its own, so `!a == b`
    /// compares `!a` with `b`, while `!(a) == b` negates the whole
    /// comparison. The negation itself may be followed by a comparison or a
    /// logical chain, never by arithmetic.
    pub(crate) fn parse_flip(&mut self, continuation: Continuation) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Flip);
        self.cursor.take(1);

        let operand = if self.test_expression() {
            self.parse_expression(Continuation::FULL)?
        } else if self.test_literal() {
            self.parse_literal(Continuation::NONE)?
        } else if self.test_flip() {
            self.parse_flip(Continuation::NONE)?
        } else {
            self.unexpected()?
        };

        let negated = logic::flip(operand);
        self.cursor.discard_whitespace();
        self.parse_continuation(negated, Continuation { math: false, ..continuation })
    }

    /// Parses whatever `continuation` allows to follow `value`.
    pub(crate) fn parse_continuation(&mut self,
                                     value: Thunk,
                                     continuation: Continuation)
                                     -> ParseResult<Thunk> {
        if continuation.comparison && self.test_comparison() {
            return self.parse_comparison(value, continuation);
        }
        if continuation.comparison && self.test_type_comparison() {
            return self.parse_type_comparison(value, continuation);
        }
        if continuation.operator && self.test_operator() {
            return self.parse_operator(value);
        }
        if continuation.math && self.test_math() {
            return self.parse_math(value, continuation);
        }
        Ok(value)
    }

    /// Tests whether the current expression ends here.
    ///
    /// The end of the input ends the outermost expression; inside
    /// parentheses it is an error unless the parse is lenient. A `)` ends a
    /// parenthesized expression. Anything else is an error in strict mode
    /// and returns `false` in lenient mode.
    fn test_expression_end(&mut self) -> ParseResult<bool> {
        if self.cursor.at_end() {
            if self.cursor.depth() == 0 || !self.strict {
                return Ok(true);
            }
            return Err(ParseError::UnexpectedEndOfExpression { index: self.cursor.index() });
        }
        if self.cursor.depth() > 0 && self.cursor.test_symbol(")", 0) {
            return Ok(true);
        }
        if self.cursor.depth() == 0 && self.cursor.test_symbol(")", 0) {
            // Left for the caller to report as unbalanced.
            return Ok(true);
        }
        if self.strict {
            return Err(self.unexpected_token());
        }
        Ok(false)
    }

    pub(crate) fn test_expression(&mut self) -> bool {
        self.cursor.test_symbol("(", 0)
    }

    pub(crate) fn test_flip(&mut self) -> bool {
        self.cursor.test_symbol("!", 0)
    }

    /// Handles input no rule accepts.
    ///
    /// Strict parses fail; lenient parses continue with a thunk that fails
    /// when evaluated.
    pub(crate) fn unexpected(&self) -> ParseResult<Thunk> {
        if !self.strict {
            return Ok(Thunk::incomplete(self.cursor.index()));
        }
        if self.cursor.at_end() {
            return Err(ParseError::UnexpectedEndOfExpression { index: self.cursor.index() });
        }
        Err(self.unexpected_token())
    }

    /// Turns a parse failure into an incomplete thunk when lenient.
    pub(crate) fn recover(&self, result: ParseResult<Thunk>, index: usize) -> ParseResult<Thunk> {
        match result {
            Err(_) if !self.strict => Ok(Thunk::incomplete(index)),
            other => other,
        }
    }

    pub(crate) fn unexpected_token(&self) -> ParseError {
        ParseError::UnexpectedToken { token: self.cursor.upcoming_token(),
                                      index: self.cursor.index(), }
    }
}
