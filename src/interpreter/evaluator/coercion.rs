use std::rc::Rc;

use crate::{interpreter::value::core::Value, util::num::text_to_number};

/// Loose equality, as used by `==` and `!=`.
///
/// | left      | right                   | rule                                   |
/// |-----------|-------------------------|----------------------------------------|
/// | same type | primitive               | equal values (`NaN` never equals)      |
/// | same type | list, dict, regex, closure | same instance                       |
/// | number    | text                    | text converted to a number             |
/// | boolean   | anything                | boolean converted to `1` / `0` first   |
/// | reference | primitive               | reference converted to its text first  |
/// | otherwise |                         | not equal                              |
///
/// # Example
/// ```
/// use boolparser::interpreter::{evaluator::coercion::loose_equals, value::core::Value};
///
/// assert!(loose_equals(&Value::Number(1.0), &Value::from("1")));
/// assert!(loose_equals(&Value::Bool(true), &Value::from("1")));
/// assert!(loose_equals(&Value::from(vec![Value::Number(1.0), Value::Number(2.0)]),
///                      &Value::from("1,2")));
/// assert!(!loose_equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
/// ```
#[must_use]
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Closure, Dict, List, Number, Regex, Text};

    match (left, right) {
        (Number(a), Number(b)) => a == b,
        (Text(a), Text(b)) => a == b,
        (Bool(a), Bool(b)) => a == b,
        (List(a), List(b)) => Rc::ptr_eq(a, b),
        (Dict(a), Dict(b)) => Rc::ptr_eq(a, b),
        (Regex(a), Regex(b)) => Rc::ptr_eq(a, b),
        (Closure(a), Closure(b)) => a.ptr_eq(b),
        (Number(n), Text(s)) | (Text(s), Number(n)) => *n == text_to_number(s),
        (Bool(b), other) | (other, Bool(b)) => {
            loose_equals(&Number(f64::from(u8::from(*b))), other)
        },
        (reference, primitive) if primitive.is_primitive() => {
            loose_equals(&reference.to_primitive(), primitive)
        },
        (primitive, reference) if primitive.is_primitive() => {
            loose_equals(primitive, &reference.to_primitive())
        },
        _ => false,
    }
}

/// Strict element equality, as used by list containment.
///
/// Values of different types are never equal, `NaN` equals `NaN`, and
/// references are equal only when they are the same instance.
#[must_use]
pub fn same_value_zero(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Closure, Dict, List, Number, Regex, Text};

    match (left, right) {
        (Number(a), Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Text(a), Text(b)) => a == b,
        (Bool(a), Bool(b)) => a == b,
        (List(a), List(b)) => Rc::ptr_eq(a, b),
        (Dict(a), Dict(b)) => Rc::ptr_eq(a, b),
        (Regex(a), Regex(b)) => Rc::ptr_eq(a, b),
        (Closure(a), Closure(b)) => a.ptr_eq(b),
        _ => false,
    }
}

/// Loose ordering, as used by `<`, `<=`, `>` and `>=`.
///
/// Both operands are reduced to primitives. Two texts are compared code unit
/// by code unit; anything else is compared as numbers.
///
/// Returns `Some(true)` when `left` is less than `right`, `Some(false)` when
/// it is not, and `None` when the comparison is undefined because a number
/// conversion produced `NaN`. Every ordering operator is false for `None`.
///
/// # Example
/// ```
/// use boolparser::interpreter::{evaluator::coercion::less_than, value::core::Value};
///
/// assert_eq!(less_than(&Value::from("10"), &Value::Number(9.0)), Some(false));
/// assert_eq!(less_than(&Value::from("10"), &Value::from("9")), Some(true));
/// assert_eq!(less_than(&Value::from("abc"), &Value::Number(1.0)), None);
/// ```
#[must_use]
pub fn less_than(left: &Value, right: &Value) -> Option<bool> {
    let left = left.to_primitive();
    let right = right.to_primitive();

    if let (Value::Text(a), Value::Text(b)) = (&left, &right) {
        return Some(a.encode_utf16().lt(b.encode_utf16()));
    }

    let a = left.to_number();
    let b = right.to_number();
    if a.is_nan() || b.is_nan() {
        return None;
    }
    Some(a < b)
}
