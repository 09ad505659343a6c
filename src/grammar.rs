use crate::interpreter::value::core::Value;

/// The kinds of grammar rules the parser can enter.
///
/// The parser records every rule it enters, in order, in the cursor's part
/// trace. The trace decides whether a variable may be assigned to: only when
/// the variable is the very first rule entered in the whole expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PartKind {
    /// A parenthesized sub-expression.
    Expression,
    /// Logical negation (`!`).
    Flip,
    /// Prefix increment or decrement (`++x`, `--x`).
    PreMath,
    /// Postfix increment or decrement (`x++`, `x--`).
    PostMath,
    /// Assignment to a variable (`x = ...`, `x += ...`).
    Assignment,
    /// Boolean literal.
    Bool,
    /// Variable reference.
    Variable,
    /// String literal.
    String,
    /// List literal.
    List,
    /// Number literal.
    Number,
    /// Regex literal.
    Regex,
    /// Macro literal.
    Macro,
    /// Value comparison (`==`, `in `, ...).
    Comparison,
    /// Type comparison (`is number`, ...).
    TypeComparison,
    /// Arithmetic chain.
    Math,
    /// Logical chain.
    Operator,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Loose equality (`==`)
    Equal,
    /// Loose inequality (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal to (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal to (`>=`)
    GreaterEqual,
    /// Containment (`in `)
    In,
    /// Negated containment (`not in `)
    NotIn,
    /// Text prefix (`starts with `)
    StartsWith,
    /// Text suffix (`ends with `)
    EndsWith,
}

impl ComparisonOperator {
    /// Maps the matched operator text, trailing space included or not, to
    /// its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol.trim() {
                 "==" => Self::Equal,
                 "!=" => Self::NotEqual,
                 "<" => Self::Less,
                 "<=" => Self::LessEqual,
                 ">" => Self::Greater,
                 ">=" => Self::GreaterEqual,
                 "in" => Self::In,
                 "not in" => Self::NotIn,
                 "starts with" => Self::StartsWith,
                 "ends with" => Self::EndsWith,
                 _ => return None,
             })
    }
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathOperator {
    /// Exponentiation (`**`)
    Pow,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Subtraction (`-`)
    Sub,
    /// Addition or concatenation (`+`)
    Add,
    /// Remainder (`%`)
    Mod,
}

/// The order in which arithmetic chains are folded.
///
/// All occurrences of one operator are combined left to right before the
/// next operator in the list is considered. `%` comes last, after `+` and
/// `-`, so `2 + 3 % 2` is `(2 + 3) % 2`.
pub const MATH_FOLD_ORDER: [MathOperator; 6] = [MathOperator::Pow,
                                                MathOperator::Mul,
                                                MathOperator::Div,
                                                MathOperator::Sub,
                                                MathOperator::Add,
                                                MathOperator::Mod];

impl MathOperator {
    /// Maps the matched operator text to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
                 "**" => Self::Pow,
                 "*" => Self::Mul,
                 "/" => Self::Div,
                 "-" => Self::Sub,
                 "+" => Self::Add,
                 "%" => Self::Mod,
                 _ => return None,
             })
    }
}

/// Represents a logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicOperator {
    /// Logical and (`and`)
    And,
    /// Logical exclusive or (`xor`)
    Xor,
    /// Logical or (`or`)
    Or,
}

/// The order in which logical chains are folded: `and` binds tightest, `or`
/// loosest.
pub const LOGIC_FOLD_ORDER: [LogicOperator; 3] =
    [LogicOperator::And, LogicOperator::Xor, LogicOperator::Or];

impl LogicOperator {
    /// Maps the matched operator text, in any letter case and with or
    /// without its trailing space, to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol.trim().to_ascii_lowercase().as_str() {
                 "and" => Self::And,
                 "xor" => Self::Xor,
                 "or" => Self::Or,
                 _ => return None,
             })
    }
}

/// A type name accepted by `is` comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// `is string`
    String,
    /// `is number`
    Number,
    /// `is boolean`
    Boolean,
    /// `is list`
    List,
    /// `is dictionary`
    Dictionary,
    /// `is closure`
    Closure,
}

impl TypeName {
    /// Maps a type name to its variant.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol.trim() {
                 "string" => Self::String,
                 "number" => Self::Number,
                 "boolean" => Self::Boolean,
                 "list" => Self::List,
                 "dictionary" => Self::Dictionary,
                 "closure" => Self::Closure,
                 _ => return None,
             })
    }

    /// Whether `value` has this type. Regexes have none of the named types.
    #[must_use]
    pub const fn matches(self, value: &Value) -> bool {
        matches!((self, value),
                 (Self::String, Value::Text(_))
                 | (Self::Number, Value::Number(_))
                 | (Self::Boolean, Value::Bool(_))
                 | (Self::List, Value::List(_))
                 | (Self::Dictionary, Value::Dict(_))
                 | (Self::Closure, Value::Closure(_)))
    }
}

/// Represents an assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignmentOperator {
    /// Plain assignment (`=`)
    Assign,
    /// Add and assign (`+=`)
    AddAssign,
    /// Subtract and assign (`-=`)
    SubAssign,
    /// Multiply and assign (`*=`)
    MulAssign,
    /// Divide and assign (`/=`)
    DivAssign,
}

impl AssignmentOperator {
    /// Maps the matched operator text to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
                 "=" => Self::Assign,
                 "+=" => Self::AddAssign,
                 "-=" => Self::SubAssign,
                 "*=" => Self::MulAssign,
                 "/=" => Self::DivAssign,
                 _ => return None,
             })
    }

    /// The arithmetic combining the old value with the new one, if any.
    #[must_use]
    pub const fn math_operator(self) -> Option<MathOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(MathOperator::Add),
            Self::SubAssign => Some(MathOperator::Sub),
            Self::MulAssign => Some(MathOperator::Mul),
            Self::DivAssign => Some(MathOperator::Div),
        }
    }
}

/// Represents an increment or decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl StepOperator {
    /// Maps `++` or `--` to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "++" => Some(Self::Increment),
            "--" => Some(Self::Decrement),
            _ => None,
        }
    }

    /// The amount added to the variable.
    #[must_use]
    pub const fn delta(self) -> f64 {
        match self {
            Self::Increment => 1.0,
            Self::Decrement => -1.0,
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for MathOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Pow => "**",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Sub => "-",
            Self::Add => "+",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Xor => "xor",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}
