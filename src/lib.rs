//! # boolparser
//!
//! boolparser compiles small boolean and arithmetic expressions into
//! reusable thunks. Expressions read and write variables across three
//! storage tiers (a lexical scope chain, a session store and a global
//! store), compare values with loose coercion, test text against regex
//! literals, and splice in host macro expansions.
//!
//! ```
//! use boolparser::{evaluate, host::{Host, Scope}, interpreter::value::core::Value};
//!
//! let scope = Scope::new();
//! scope.declare("mood", Value::from("happy"));
//!
//! let result = evaluate("mood == 'happy' and /ha+p/ == mood", true, &scope, &Host::in_memory());
//! assert_eq!(result.unwrap(), Value::Bool(true));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    host::{Host, Scope},
    interpreter::{evaluator::core::Thunk, parser::Parser, value::core::Value},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling an
/// expression or evaluating the resulting thunk. Every error carries the
/// character index of the grammar rule it belongs to.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (parse, evaluation).
/// - Attaches character indices and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Defines the vocabulary of the expression language.
///
/// This module declares the operator and type-name enums shared by the
/// parser and the evaluator, the fixed fold orders of arithmetic and logical
/// chains, and the kinds of grammar rules recorded in the part trace.
pub mod grammar;
/// The collaborators an expression runs against.
///
/// This module defines the variable scope chain, the persisted stores for
/// the session and global tiers, and the macro expander, together with
/// in-memory implementations of each.
pub mod host;
/// Orchestrates compilation and evaluation of expressions.
///
/// This module ties together the cursor, the parser, the evaluator, the
/// value model and variable access.
///
/// # Responsibilities
/// - Scans expression text with escape-aware lookahead.
/// - Compiles expressions into thunks.
/// - Evaluates thunks with loose coercion rules.
pub mod interpreter;
/// General utilities for number conversion.
///
/// This module provides the conversions between numbers and text used
/// throughout the value model and the evaluator.
pub mod util;

/// Compiles an expression for `scope` without named arguments.
///
/// # Examples
/// ```
/// use boolparser::{host::{Host, Scope}, parse};
///
/// assert!(parse("1 +", true, &Scope::new(), &Host::in_memory()).is_err());
/// assert!(parse("1 +", false, &Scope::new(), &Host::in_memory()).is_ok());
/// ```
pub fn parse(text: &str, strict: bool, scope: &Scope, host: &Host) -> Result<Thunk, ParseError> {
    Parser::new(scope, std::iter::empty(), host.clone()).parse(text, strict)
}

/// Compiles an expression and evaluates it once.
///
/// # Errors
/// Returns an error if parsing fails in strict mode, or if evaluation
/// fails.
///
/// # Examples
/// ```
/// use boolparser::{evaluate, host::{Host, Scope}, interpreter::value::core::Value};
///
/// let scope = Scope::new();
/// let host = Host::in_memory();
///
/// assert_eq!(evaluate("x = 2 + 3", true, &scope, &host).unwrap(), Value::from("5"));
/// assert_eq!(evaluate("x * 2", true, &scope, &host).unwrap(), Value::Number(10.0));
///
/// // Only ordering and equality are defined for regexes.
/// assert!(evaluate("/a/ < 'b'", true, &scope, &host).is_err());
/// ```
pub fn evaluate(text: &str,
                strict: bool,
                scope: &Scope,
                host: &Host)
                -> Result<Value, Box<dyn std::error::Error>> {
    let thunk = parse(text, strict, scope, host)?;
    Ok(thunk.eval()?)
}
