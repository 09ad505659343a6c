use crate::{
    grammar::LogicOperator,
    interpreter::{evaluator::core::Thunk, value::core::Value},
};

/// Combines two thunks with a logical operator.
///
/// `and` and `or` short-circuit: the right thunk is only evaluated when the
/// left value does not decide the result, and the deciding operand itself is
/// returned. `xor` always evaluates both sides and returns a boolean.
///
/// # Example
/// ```
/// use boolparser::{grammar::LogicOperator,
///                  interpreter::{evaluator::{core::Thunk, logic::combine}, value::core::Value}};
///
/// let either = combine(LogicOperator::Or,
///                      Thunk::constant(Value::from("")),
///                      Thunk::constant(Value::from("fallback")));
/// assert_eq!(either.eval().unwrap(), Value::from("fallback"));
/// ```
#[must_use]
pub fn combine(operator: LogicOperator, left: Thunk, right: Thunk) -> Thunk {
    match operator {
        LogicOperator::And => Thunk::new(move || {
            let value = left.eval()?;
            if value.is_truthy() { right.eval() } else { Ok(value) }
        }),
        LogicOperator::Or => Thunk::new(move || {
            let value = left.eval()?;
            if value.is_truthy() { Ok(value) } else { right.eval() }
        }),
        LogicOperator::Xor => Thunk::new(move || {
            let a = left.eval()?.is_truthy();
            let b = right.eval()?.is_truthy();
            Ok(Value::Bool(a != b))
        }),
    }
}

/// Negates the truthiness of a thunk's value.
#[must_use]
pub fn flip(operand: Thunk) -> Thunk {
    Thunk::new(move || Ok(Value::Bool(!operand.eval()?.is_truthy())))
}
