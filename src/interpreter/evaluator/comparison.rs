use crate::{
    error::RuntimeError,
    grammar::ComparisonOperator,
    interpreter::{
        evaluator::{
            coercion::{less_than, loose_equals, same_value_zero},
            core::EvalResult,
        },
        value::{core::Value, pattern::RegexPattern},
    },
};

/// Evaluates a comparison between two values.
///
/// When either side is a regex the comparison becomes a pattern test, see
/// [`compare_regex`]. Otherwise:
///
/// - `==` / `!=` use [`loose_equals`].
/// - `<`, `<=`, `>`, `>=` use [`less_than`]; an undefined ordering is false.
/// - `in` / `not in` test list elements, dictionary keys or substrings.
/// - `starts with` / `ends with` require text on the left.
///
/// # Parameters
/// - `operator`: The comparison to perform.
/// - `left`, `right`: The evaluated operands.
/// - `index`: Character index of the comparison, for error reporting.
///
/// # Returns
/// - `Ok(bool)`: The outcome of the comparison.
/// - `Err(RuntimeError)`: If the operands do not support the operator.
///
/// # Example
/// ```
/// use boolparser::{grammar::ComparisonOperator,
///                  interpreter::{evaluator::comparison::compare, value::core::Value}};
///
/// let list = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
/// assert!(compare(ComparisonOperator::In, &Value::Number(2.0), &list, 0).unwrap());
/// assert!(compare(ComparisonOperator::Less, &Value::Number(2.0), &Value::from("10"), 0).unwrap());
/// ```
pub fn compare(operator: ComparisonOperator,
               left: &Value,
               right: &Value,
               index: usize)
               -> EvalResult<bool> {
    if let Value::Regex(pattern) = left {
        return compare_regex(operator, pattern, right, index);
    }
    if let Value::Regex(pattern) = right {
        return match operator {
            ComparisonOperator::Equal => Ok(pattern.is_match(&left.to_string())),
            ComparisonOperator::NotEqual => Ok(!pattern.is_match(&left.to_string())),
            _ => Err(RuntimeError::UnsupportedRegexComparison { operator: operator.to_string(),
                                                                index }),
        };
    }

    match operator {
        ComparisonOperator::Equal => Ok(loose_equals(left, right)),
        ComparisonOperator::NotEqual => Ok(!loose_equals(left, right)),
        ComparisonOperator::Less => Ok(less_than(left, right).unwrap_or(false)),
        ComparisonOperator::Greater => Ok(less_than(right, left).unwrap_or(false)),
        ComparisonOperator::LessEqual => Ok(less_than(right, left).is_some_and(|less| !less)),
        ComparisonOperator::GreaterEqual => Ok(less_than(left, right).is_some_and(|less| !less)),
        ComparisonOperator::In => contains(right, left, index),
        ComparisonOperator::NotIn => contains(right, left, index).map(|found| !found),
        ComparisonOperator::StartsWith => {
            Ok(require_text(operator, left, index)?.starts_with(&right.to_string()))
        },
        ComparisonOperator::EndsWith => {
            Ok(require_text(operator, left, index)?.ends_with(&right.to_string()))
        },
    }
}

/// Evaluates a comparison whose left operand is a regex.
///
/// `==` and `!=` test the pattern against the text form of `right`. `in` and
/// `not in` test whether any element of the list `right` matches. Every other
/// operator fails.
pub fn compare_regex(operator: ComparisonOperator,
                     pattern: &RegexPattern,
                     right: &Value,
                     index: usize)
                     -> EvalResult<bool> {
    match operator {
        ComparisonOperator::Equal => Ok(pattern.is_match(&right.to_string())),
        ComparisonOperator::NotEqual => Ok(!pattern.is_match(&right.to_string())),
        ComparisonOperator::In | ComparisonOperator::NotIn => {
            let Value::List(items) = right else {
                return Err(RuntimeError::NotAContainer { found: right.type_name().to_string(),
                                                         index });
            };
            let any = items.iter().any(|item| pattern.is_match(&item.to_string()));
            Ok(if operator == ComparisonOperator::In { any } else { !any })
        },
        _ => Err(RuntimeError::UnsupportedRegexComparison { operator: operator.to_string(),
                                                            index }),
    }
}

/// Whether `container` holds `item`.
fn contains(container: &Value, item: &Value, index: usize) -> EvalResult<bool> {
    match container {
        Value::List(items) => Ok(items.iter().any(|element| same_value_zero(element, item))),
        Value::Text(text) => Ok(text.contains(&item.to_string())),
        Value::Dict(entries) => Ok(entries.contains_key(&item.to_string())),
        other => Err(RuntimeError::NotAContainer { found: other.type_name().to_string(),
                                                   index }),
    }
}

fn require_text<'a>(operator: ComparisonOperator,
                    value: &'a Value,
                    index: usize)
                    -> EvalResult<&'a str> {
    match value {
        Value::Text(text) => Ok(text.as_str()),
        other => Err(RuntimeError::TypeError { details: format!("'{operator}' expects a string on \
                                                                 the left, found {}",
                                                                other.type_name()),
                                               index }),
    }
}
