#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a compiled thunk.
///
/// The `index` of each variant is the character index of the grammar rule
/// that produced the failing thunk.
pub enum RuntimeError {
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// Character index of the rule.
        index:   usize,
    },
    /// The right-hand side of `in` / `not in` cannot contain values.
    NotAContainer {
        /// Type name of the offending value.
        found: String,
        /// Character index of the rule.
        index: usize,
    },
    /// A regex took part in a comparison that only supports `==` and `!=`
    /// (or `in` / `not in` when the regex is on the left).
    UnsupportedRegexComparison {
        /// The comparison operator.
        operator: String,
        /// Character index of the rule.
        index:    usize,
    },
    /// Evaluated a part of a lenient parse that was never completed.
    IncompleteExpression {
        /// Character index at which parsing gave up.
        index: usize,
    },
    /// The text produced by a macro could not be turned into a value.
    MacroExpansion {
        /// Details about the failure.
        details: String,
        /// Character index of the macro literal.
        index:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, index } => {
                write!(f, "Error at index {index}: Type error: {details}.")
            },
            Self::NotAContainer { found, index } => write!(f,
                                                           "Error at index {index}: Cannot test containment in a value of type {found}."),
            Self::UnsupportedRegexComparison { operator, index } => write!(f,
                                                                           "Error at index {index}: Operator '{operator}' is not supported for regex values."),
            Self::IncompleteExpression { index } => write!(f,
                                                           "Error at index {index}: Expression is incomplete and cannot be evaluated."),
            Self::MacroExpansion { details, index } => {
                write!(f, "Error at index {index}: Macro expansion failed: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
