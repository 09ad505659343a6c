use crate::{grammar::MathOperator, interpreter::value::core::Value};

/// Applies an arithmetic operator to two values.
///
/// `+` concatenates when either operand, reduced to a primitive, is text.
/// Every other case converts both operands to numbers. Division by zero
/// yields an infinity or `NaN`, never an error.
///
/// # Example
/// ```
/// use boolparser::{grammar::MathOperator,
///                  interpreter::{evaluator::arithmetic::apply, value::core::Value}};
///
/// assert_eq!(apply(MathOperator::Add, &Value::from("1"), &Value::Number(2.0)),
///            Value::from("12"));
/// assert_eq!(apply(MathOperator::Sub, &Value::from("5"), &Value::Number(2.0)),
///            Value::Number(3.0));
/// assert_eq!(apply(MathOperator::Div, &Value::Number(1.0), &Value::Number(0.0)),
///            Value::Number(f64::INFINITY));
/// ```
#[must_use]
pub fn apply(operator: MathOperator, left: &Value, right: &Value) -> Value {
    if operator == MathOperator::Add {
        let left = left.to_primitive();
        let right = right.to_primitive();
        if matches!(left, Value::Text(_)) || matches!(right, Value::Text(_)) {
            return Value::Text(format!("{left}{right}"));
        }
        return Value::Number(left.to_number() + right.to_number());
    }

    let a = left.to_number();
    let b = right.to_number();
    Value::Number(match operator {
                      MathOperator::Pow => power(a, b),
                      MathOperator::Mul => a * b,
                      MathOperator::Div => a / b,
                      MathOperator::Sub => a - b,
                      MathOperator::Mod => a % b,
                      MathOperator::Add => a + b,
                  })
}

/// Exponentiation where `±1 ** ±Infinity` and anything to the power of `NaN`
/// are `NaN`.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_keeps_sign_of_dividend() {
        assert_eq!(apply(MathOperator::Mod, &Value::Number(-7.0), &Value::Number(3.0)),
                   Value::Number(-1.0));
    }

    #[test]
    fn power_edge_cases() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert!(power(1.0, f64::INFINITY).is_nan());
        assert!(power(2.0, f64::NAN).is_nan());
        assert_eq!(power(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn lists_add_as_text() {
        let list = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(apply(MathOperator::Add, &list, &Value::Number(3.0)), Value::from("1,23"));
    }
}
