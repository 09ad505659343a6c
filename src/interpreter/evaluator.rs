/// Core evaluation types.
///
/// Defines the `Thunk`, the compiled and repeatedly invocable form of an
/// expression, and the result type all evaluation returns.
pub mod core;

/// Loose comparison rules.
///
/// Implements the coercing equality and ordering used by `==`, `!=`, `<`,
/// `<=`, `>` and `>=`, and the strict element equality used by list
/// containment.
pub mod coercion;

/// Comparison evaluation.
///
/// Evaluates every comparison operator, including the regex dispatch that
/// turns `==`, `!=`, `in` and `not in` into pattern tests.
pub mod comparison;

/// Arithmetic evaluation.
///
/// Implements `+`, `-`, `*`, `/`, `%` and `**` on arbitrary values.
pub mod arithmetic;

/// Logical operator evaluation.
///
/// Builds the thunks for `and`, `xor` and `or`, including short-circuiting.
pub mod logic;
