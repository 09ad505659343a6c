use std::rc::Rc;

use boolparser::{
    grammar::{ComparisonOperator, MathOperator},
    interpreter::{
        evaluator::{
            arithmetic::apply,
            coercion::{less_than, loose_equals, same_value_zero},
            comparison::compare,
        },
        value::{core::Value, pattern::RegexPattern},
    },
};

fn list(items: &[f64]) -> Value {
    Value::from(items.iter().copied().map(Value::Number).collect::<Vec<_>>())
}

#[test]
fn loose_equality_table() {
    let text = Value::from;

    assert!(loose_equals(&Value::Number(1.0), &text("1")));
    assert!(loose_equals(&text(" 1 "), &Value::Number(1.0)));
    assert!(loose_equals(&Value::Number(0.0), &text("")));
    assert!(loose_equals(&Value::Bool(false), &text("0")));
    assert!(loose_equals(&Value::Bool(true), &Value::Number(1.0)));
    assert!(loose_equals(&list(&[1.0, 2.0]), &text("1,2")));
    assert!(loose_equals(&list(&[]), &Value::Bool(false)));
    assert!(loose_equals(&list(&[5.0]), &Value::Number(5.0)));

    assert!(!loose_equals(&text("true"), &Value::Bool(true)));
    assert!(!loose_equals(&text("a"), &text("A")));
    assert!(!loose_equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    assert!(!loose_equals(&list(&[1.0]), &list(&[1.0])));
}

#[test]
fn references_compare_by_identity() {
    let shared = list(&[1.0]);
    assert!(loose_equals(&shared, &shared.clone()));
    assert!(same_value_zero(&shared, &shared.clone()));

    let pattern = Value::Regex(Rc::new(RegexPattern::new("a", "").unwrap()));
    assert!(loose_equals(&pattern, &pattern.clone()));
}

#[test]
fn element_equality_is_strict() {
    assert!(same_value_zero(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    assert!(same_value_zero(&Value::Number(0.0), &Value::Number(-0.0)));
    assert!(!same_value_zero(&Value::Number(1.0), &Value::from("1")));
    assert!(!same_value_zero(&Value::Bool(true), &Value::Number(1.0)));
}

#[test]
fn ordering_table() {
    assert_eq!(less_than(&Value::Number(1.0), &Value::Number(2.0)), Some(true));
    assert_eq!(less_than(&Value::from("a"), &Value::from("b")), Some(true));
    assert_eq!(less_than(&Value::from("B"), &Value::from("a")), Some(true));
    assert_eq!(less_than(&Value::from("2"), &Value::Number(10.0)), Some(true));
    assert_eq!(less_than(&Value::Bool(false), &Value::Bool(true)), Some(true));
    assert_eq!(less_than(&Value::from(""), &Value::Number(1.0)), Some(true));
    assert_eq!(less_than(&Value::Number(f64::NAN), &Value::Number(1.0)), None);
}

#[test]
fn undefined_ordering_is_false_both_ways() {
    let nan = Value::from("abc");
    let one = Value::Number(1.0);
    for operator in [ComparisonOperator::Less,
                     ComparisonOperator::LessEqual,
                     ComparisonOperator::Greater,
                     ComparisonOperator::GreaterEqual]
    {
        assert!(!compare(operator, &nan, &one, 0).unwrap(), "{operator}");
        assert!(!compare(operator, &one, &nan, 0).unwrap(), "{operator}");
    }
}

#[test]
fn containment_by_container_type() {
    let words = Value::from(vec![Value::from("a"), Value::from("b")]);
    assert!(compare(ComparisonOperator::In, &Value::from("a"), &words, 0).unwrap());
    assert!(compare(ComparisonOperator::NotIn, &Value::from("c"), &words, 0).unwrap());
    assert!(compare(ComparisonOperator::In, &Value::Number(12.0), &Value::from("a12b"), 0).unwrap());
    assert!(compare(ComparisonOperator::In, &Value::Number(1.0), &Value::Bool(true), 0).is_err());
}

#[test]
fn regex_tests_text_forms() {
    let digits = Value::from(RegexPattern::new(r"^\d+$", "").unwrap());

    assert!(compare(ComparisonOperator::Equal, &digits, &Value::Number(42.0), 0).unwrap());
    assert!(compare(ComparisonOperator::Equal, &Value::Number(42.0), &digits, 0).unwrap());
    assert!(compare(ComparisonOperator::NotEqual, &digits, &Value::from("4a"), 0).unwrap());
    assert!(compare(ComparisonOperator::In, &digits, &list(&[7.0]), 0).unwrap());
    assert!(compare(ComparisonOperator::StartsWith, &digits, &Value::from("1"), 0).is_err());
}

#[test]
fn addition_concatenates_text() {
    assert_eq!(apply(MathOperator::Add, &Value::Number(1.0), &Value::Number(2.0)),
               Value::Number(3.0));
    assert_eq!(apply(MathOperator::Add, &Value::Bool(true), &Value::Number(1.0)),
               Value::Number(2.0));
    assert_eq!(apply(MathOperator::Add, &Value::Bool(true), &Value::from("!")),
               Value::from("true!"));
    assert_eq!(apply(MathOperator::Mul, &Value::from("3"), &Value::from("4")),
               Value::Number(12.0));
}
