/// Core parsing logic.
///
/// Defines the `Parser`, its entry point, parenthesized expressions,
/// negation and the rules that decide what may follow a parsed value.
pub mod core;

/// Literal parsing.
///
/// Parses booleans, variables, strings, lists, numbers, regexes and macros,
/// and turns macro output back into values.
pub mod literal;

/// Binary chain parsing.
///
/// Parses comparisons, type comparisons, arithmetic chains and logical
/// chains, and folds chains by operator precedence.
pub mod binary;

/// Variable mutation parsing.
///
/// Parses assignments and prefix or postfix increments and decrements.
pub mod mutation;

/// Token patterns.
///
/// The anchored regular expressions the parser tests the input against.
pub mod patterns;

pub use self::core::{ParseResult, Parser};
