/// Opaque callable handles.
///
/// Defines `ClosureRef`, the value a host uses to pass a closure through an
/// expression. Closures can be stored, compared and type-tested with
/// `is closure`, but the evaluator never invokes them.
pub mod closure;
/// Regex values.
///
/// Defines `RegexPattern`, the compiled form of a `/pattern/flags` literal,
/// including the translation of the literal's flags into matcher options.
pub mod pattern;

pub mod core;
