use std::{fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A compiled expression, or part of one, ready to be evaluated.
///
/// A thunk takes no arguments and may be evaluated any number of times.
/// Literal thunks return the same value every time; thunks that read or
/// write variables recompute on every call and may change variable storage.
///
/// Cloning a thunk is cheap and shares the compiled closure.
///
/// # Example
/// ```
/// use boolparser::interpreter::{evaluator::core::Thunk, value::core::Value};
///
/// let answer = Thunk::constant(Value::Number(42.0));
/// assert_eq!(answer.eval().unwrap(), Value::Number(42.0));
/// assert_eq!(answer.eval().unwrap(), Value::Number(42.0));
/// ```
#[derive(Clone)]
pub struct Thunk(Rc<dyn Fn() -> EvalResult<Value>>);

impl Thunk {
    /// Wraps a closure.
    pub fn new(f: impl Fn() -> EvalResult<Value> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A thunk that always returns `value`.
    #[must_use]
    pub fn constant(value: Value) -> Self {
        Self::new(move || Ok(value.clone()))
    }

    /// A thunk standing in for input a lenient parse could not complete.
    /// Evaluating it fails with [`RuntimeError::IncompleteExpression`].
    #[must_use]
    pub fn incomplete(index: usize) -> Self {
        Self::new(move || Err(RuntimeError::IncompleteExpression { index }))
    }

    /// Evaluates the thunk.
    pub fn eval(&self) -> EvalResult<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thunk({:p})", Rc::as_ptr(&self.0))
    }
}

/// A variable reference together with its name.
///
/// Assignment and increment rules need to know which variable to write back
/// to, not just how to read it.
#[derive(Debug, Clone)]
pub struct VariableRef {
    /// The variable name.
    pub name:  String,
    /// Reads the variable.
    pub thunk: Thunk,
}
