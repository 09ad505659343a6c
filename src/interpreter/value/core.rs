use std::{collections::BTreeMap, rc::Rc};

use crate::{
    interpreter::value::{closure::ClosureRef, pattern::RegexPattern},
    util::num::{format_number, text_to_number},
};

/// Largest integer that survives a round trip through an `f64` (`2^53 - 1`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Represents a runtime value in the interpreter.
///
/// Values only exist while a thunk is being evaluated. Lists, dictionaries
/// and regexes are reference types: cloning a value shares the underlying
/// data, and loose equality between two of them compares identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals, comparisons, `!` and `xor`.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value, from string literals, unresolved variables or macros.
    Text(String),
    /// A list of values, usually decoded from a JSON array.
    List(Rc<Vec<Self>>),
    /// A dictionary with text keys, usually decoded from a JSON object.
    Dict(Rc<BTreeMap<String, Self>>),
    /// A compiled regex literal.
    Regex(Rc<RegexPattern>),
    /// An opaque host closure.
    Closure(ClosureRef),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(v: BTreeMap<String, Self>) -> Self {
        Self::Dict(Rc::new(v))
    }
}

impl From<RegexPattern> for Value {
    fn from(v: RegexPattern) -> Self {
        Self::Regex(Rc::new(v))
    }
}

impl From<ClosureRef> for Value {
    fn from(v: ClosureRef) -> Self {
        Self::Closure(v)
    }
}

impl Value {
    /// Returns the name used for this value's type by `is` comparisons and
    /// error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Dict(_) => "dictionary",
            Self::Regex(_) => "regex",
            Self::Closure(_) => "closure",
        }
    }

    /// Whether this value is a primitive (boolean, number or text).
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Number(_) | Self::Text(_))
    }

    /// Converts the value to a boolean for conditions, `!` and the logical
    /// operators.
    ///
    /// `false`, `0`, `NaN` and empty text are falsy. Every list, dictionary,
    /// regex and closure is truthy, even when empty.
    ///
    /// # Example
    /// ```
    /// use boolparser::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) | Self::Dict(_) | Self::Regex(_) | Self::Closure(_) => true,
        }
    }

    /// Converts the value to a number.
    ///
    /// Booleans become `1`/`0`, text is read with
    /// [`text_to_number`], lists go through their text form (so `[]` is `0`
    /// and `[7]` is `7`), and every other value is `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(s) => text_to_number(s),
            Self::List(_) => text_to_number(&self.to_string()),
            Self::Dict(_) | Self::Regex(_) | Self::Closure(_) => f64::NAN,
        }
    }

    /// Reduces a reference type to its text form and returns primitives
    /// unchanged.
    #[must_use]
    pub fn to_primitive(&self) -> Self {
        if self.is_primitive() {
            self.clone()
        } else {
            Self::Text(self.to_string())
        }
    }

    /// Builds a value from decoded JSON.
    ///
    /// Returns `None` for a top-level `null`, which has no counterpart in the
    /// value model. A `null` nested inside an array or object becomes empty
    /// text.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => None,
            other => Some(Self::from_json_nested(other)),
        }
    }

    fn from_json_nested(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Text(String::new()),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::from(items.into_iter().map(Self::from_json_nested).collect::<Vec<_>>())
            },
            serde_json::Value::Object(entries) => {
                Self::from(entries.into_iter()
                                  .map(|(key, value)| (key, Self::from_json_nested(value)))
                                  .collect::<BTreeMap<_, _>>())
            },
        }
    }

    /// Encodes the value as JSON.
    ///
    /// Integral numbers are encoded without a fractional part and non-finite
    /// numbers as `null`. Regexes encode as an empty object and closures as
    /// `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Dict(entries) => {
                serde_json::Value::Object(entries.iter()
                                                 .map(|(key, value)| (key.clone(), value.to_json()))
                                                 .collect())
            },
            Self::Regex(_) => serde_json::Value::Object(serde_json::Map::new()),
            Self::Closure(_) => serde_json::Value::Null,
        }
    }

    /// Returns the text under which this value is written to a variable.
    ///
    /// Text is stored verbatim, lists and dictionaries as JSON, everything
    /// else in its display form.
    ///
    /// # Example
    /// ```
    /// use boolparser::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(5.0).to_storage_text(), "5");
    /// assert_eq!(Value::from(vec![Value::Number(1.0), Value::from("a")]).to_storage_text(),
    ///            r#"[1,"a"]"#);
    /// ```
    #[must_use]
    pub fn to_storage_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(_) | Self::Dict(_) => self.to_json().to_string(),
            _ => self.to_string(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Self::Dict(_) => write!(f, "[object Object]"),
            Self::Regex(pattern) => write!(f, "{pattern}"),
            Self::Closure(_) => write!(f, "[closure]"),
        }
    }
}
