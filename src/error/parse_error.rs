#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant carries the character index in the expression text at which
/// the failure was detected.
pub enum ParseError {
    /// The input ended while an expression was still open.
    UnexpectedEndOfExpression {
        /// Character index of the failure.
        index: usize,
    },
    /// The input ended before the closing `'` of a string literal.
    UnexpectedEndOfString {
        /// Character index of the failure.
        index: usize,
    },
    /// The input ended before the closing `]` of a list literal.
    UnexpectedEndOfList {
        /// Character index of the failure.
        index: usize,
    },
    /// The input ended before the closing `/` of a regex literal.
    UnexpectedEndOfRegex {
        /// Character index of the failure.
        index: usize,
    },
    /// The input ended before the closing `}` of a macro literal.
    UnexpectedEndOfMacro {
        /// Character index of the failure.
        index: usize,
    },
    /// Found text that no grammar rule accepts at this position.
    UnexpectedToken {
        /// The offending text, up to the next whitespace.
        token: String,
        /// Character index of the failure.
        index: usize,
    },
    /// An increment or decrement operator was not followed by a variable.
    ExpectedVariable {
        /// Character index of the failure.
        index: usize,
    },
    /// A list literal was not valid JSON.
    InvalidList {
        /// Details reported by the JSON decoder.
        details: String,
        /// Character index of the list literal.
        index:   usize,
    },
    /// A regex literal could not be compiled.
    InvalidRegex {
        /// Details reported by the regex compiler.
        details: String,
        /// Character index of the regex literal.
        index:   usize,
    },
    /// A closing parenthesis appeared without a matching opening one.
    UnbalancedParenthesis {
        /// Character index of the failure.
        index: usize,
    },
}

impl ParseError {
    /// Returns the character index at which the error was detected.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::UnexpectedEndOfExpression { index }
            | Self::UnexpectedEndOfString { index }
            | Self::UnexpectedEndOfList { index }
            | Self::UnexpectedEndOfRegex { index }
            | Self::UnexpectedEndOfMacro { index }
            | Self::UnexpectedToken { index, .. }
            | Self::ExpectedVariable { index }
            | Self::InvalidList { index, .. }
            | Self::InvalidRegex { index, .. }
            | Self::UnbalancedParenthesis { index } => *index,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfExpression { index } => {
                write!(f, "Error at index {index}: Unexpected end of expression.")
            },
            Self::UnexpectedEndOfString { index } => {
                write!(f, "Error at index {index}: Unexpected end of string.")
            },
            Self::UnexpectedEndOfList { index } => {
                write!(f, "Error at index {index}: Unexpected end of list.")
            },
            Self::UnexpectedEndOfRegex { index } => {
                write!(f, "Error at index {index}: Unexpected end of regex.")
            },
            Self::UnexpectedEndOfMacro { index } => {
                write!(f, "Error at index {index}: Unexpected end of macro.")
            },
            Self::UnexpectedToken { token, index } => {
                write!(f, "Error at index {index}: Unexpected token: {token}.")
            },
            Self::ExpectedVariable { index } => write!(f,
                                                       "Error at index {index}: Expected a variable name after increment or decrement."),
            Self::InvalidList { details, index } => {
                write!(f, "Error at index {index}: Invalid list literal: {details}.")
            },
            Self::InvalidRegex { details, index } => {
                write!(f, "Error at index {index}: Invalid regex literal: {details}.")
            },
            Self::UnbalancedParenthesis { index } => write!(f,
                                                            "Error at index {index}: Closing parenthesis ')' without a matching '('."),
        }
    }
}

impl std::error::Error for ParseError {}
