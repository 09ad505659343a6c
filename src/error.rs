/// Parsing errors.
///
/// Defines all error types that can occur while scanning and compiling an
/// expression. Parse errors are only raised in strict mode; lenient parsing
/// ends the current rule early instead.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a compiled
/// thunk, such as type mismatches, containment tests against non-containers,
/// or evaluating a partial result of a lenient parse.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
