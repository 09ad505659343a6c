/// The cursor module scans expression text.
///
/// The cursor holds all mutable state of one parse: the position, the
/// parenthesis depth and the trace of grammar rules entered. Its lookahead
/// honours backslash escapes.
///
/// # Responsibilities
/// - Tests for symbols and patterns at the current position.
/// - Consumes text, skipping exactly one escaping backslash.
/// - Detects the end of the text, trailing whitespace included.
pub mod cursor;
/// The evaluator module computes results.
///
/// The evaluator defines thunks, the compiled form of an expression, and
/// the coercion, comparison, arithmetic and logic rules thunks apply.
///
/// # Responsibilities
/// - Defines the `Thunk` type and evaluation results.
/// - Implements loose equality and ordering.
/// - Reports runtime errors such as unsupported regex comparisons.
pub mod evaluator;
/// The parser module compiles expressions into thunks.
///
/// The parser is a recursive-descent parser driven directly by the cursor.
/// Instead of building a syntax tree it returns closures that evaluate the
/// parsed expression.
///
/// # Responsibilities
/// - Recognises every grammar rule of the expression language.
/// - Folds arithmetic and logical chains in their fixed orders.
/// - Reports syntax errors in strict mode and recovers in lenient mode.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values expressions operate on: booleans,
/// numbers, text, lists, dictionaries, regexes and opaque closures, along
/// with their conversions to numbers, text and JSON.
pub mod value;
/// The variables module routes variable reads and writes.
///
/// Reads search the scope chain, then the session store, then the global
/// store, decoding stored text as JSON. Writes update the tier that already
/// holds the variable and request a flush for the persisted tiers.
pub mod variables;
