use crate::{
    error::ParseError,
    grammar::{
        ComparisonOperator, LOGIC_FOLD_ORDER, LogicOperator, MATH_FOLD_ORDER, MathOperator,
        PartKind, TypeName,
    },
    interpreter::{
        evaluator::{arithmetic, comparison, core::Thunk, logic},
        parser::{
            core::{Continuation, ParseResult, Parser},
            patterns::{COMPARISON, MATH, OPERATOR, TYPE_COMPARISON},
        },
        value::core::Value,
    },
};

impl Parser {
    pub(crate) fn test_comparison(&mut self) -> bool {
        self.cursor.test_symbol(&*COMPARISON, 0)
    }

    pub(crate) fn test_type_comparison(&mut self) -> bool {
        self.cursor.test_symbol(&*TYPE_COMPARISON, 0)
    }

    pub(crate) fn test_math(&mut self) -> bool {
        self.cursor.test_symbol(&*MATH, 0)
    }

    pub(crate) fn test_operator(&mut self) -> bool {
        self.cursor.test_symbol(&*OPERATOR, 0)
    }

    /// Parses a comparison whose left side has already been parsed.
    ///
    /// Grammar: `comparison := op (expression | flip | pre_math | post_math
    /// | literal) operator?`
    ///
    /// A literal right side takes no trailing rules, so in `a == b and c`
    /// the logical chain receives the whole comparison as its first operand.
    /// A parenthesized right side keeps its own chain: `a == (b) and c`
    /// compares `a` with `(b) and c`.
    ///
    /// # Parameters
    /// - `left`: The left operand.
    /// - `continuation`: Whether the comparison may start a logical chain.
    ///
    /// # Returns
    /// A thunk yielding the boolean outcome, or the logical chain started by
    /// it.
    pub(crate) fn parse_comparison(&mut self,
                                   left: Thunk,
                                   continuation: Continuation)
                                   -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Comparison);
        let index = self.cursor.index();
        let symbol = self.take_match(&COMPARISON);
        let operator = ComparisonOperator::from_symbol(&symbol).ok_or_else(|| {
                                                                    ParseError::UnexpectedToken {
                                                                        token: symbol.clone(),
                                                                        index,
                                                                    }
                                                                })?;
        self.cursor.discard_whitespace();

        let right = if self.test_expression() {
            self.parse_expression(Continuation::FULL)?
        } else if self.test_flip() {
            self.parse_flip(Continuation::NONE)?
        } else if self.test_pre_math() {
            self.parse_pre_math(Continuation::NONE)?
        } else if self.test_post_math() {
            self.parse_post_math(Continuation::NONE)?
        } else if self.test_literal() {
            self.parse_literal(Continuation::NONE)?
        } else {
            self.unexpected()?
        };

        let thunk = Thunk::new(move || {
            let a = left.eval()?;
            let b = right.eval()?;
            comparison::compare(operator, &a, &b, index).map(Value::Bool)
        });

        self.cursor.discard_whitespace();
        if continuation.operator && self.test_operator() {
            return self.parse_operator(thunk);
        }
        Ok(thunk)
    }

    /// Parses a type comparison such as `x is number`.
    ///
    /// Regexes match none of the type names.
    pub(crate) fn parse_type_comparison(&mut self,
                                        value: Thunk,
                                        continuation: Continuation)
                                        -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::TypeComparison);
        let index = self.cursor.index();
        let symbol = self.take_match(&TYPE_COMPARISON);
        let type_name = symbol.strip_prefix("is ")
                              .and_then(TypeName::from_symbol)
                              .ok_or(ParseError::UnexpectedToken { token: symbol.clone(),
                                                                   index })?;

        let thunk = Thunk::new(move || Ok(Value::Bool(type_name.matches(&value.eval()?))));

        self.cursor.discard_whitespace();
        if continuation.operator && self.test_operator() {
            return self.parse_operator(thunk);
        }
        Ok(thunk)
    }

    /// Parses an arithmetic chain whose first operand has already been
    /// parsed.
    ///
    /// Grammar: `math := (op operand)+ comparison?`
    ///
    /// The chain is folded with [`MATH_FOLD_ORDER`], which is not the usual
    /// precedence: `2 + 3 % 2` is `1`.
    pub(crate) fn parse_math(&mut self,
                             first: Thunk,
                             continuation: Continuation)
                             -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Math);

        let mut pairs = Vec::new();
        while self.test_math() {
            let index = self.cursor.index();
            let symbol = self.take_match(&MATH);
            let operator = MathOperator::from_symbol(&symbol).ok_or_else(|| {
                                                                 ParseError::UnexpectedToken {
                                                                     token: symbol.clone(),
                                                                     index,
                                                                 }
                                                             })?;
            self.cursor.discard_whitespace();

            let operand = if self.test_expression() {
                self.parse_expression(Continuation::FULL)?
            } else if self.test_pre_math() {
                self.parse_pre_math(Continuation::NONE)?
            } else if self.test_post_math() {
                self.parse_post_math(Continuation::NONE)?
            } else if self.test_literal() {
                self.parse_literal(Continuation::NONE)?
            } else {
                self.unexpected()?
            };
            self.cursor.discard_whitespace();
            pairs.push((operator, operand));
        }

        let folded = fold_chain(first, pairs, &MATH_FOLD_ORDER, |operator, left, right| {
            Thunk::new(move || Ok(arithmetic::apply(operator, &left.eval()?, &right.eval()?)))
        });

        if continuation.comparison && self.test_comparison() {
            return self.parse_comparison(folded, continuation);
        }
        if continuation.comparison && self.test_type_comparison() {
            return self.parse_type_comparison(folded, continuation);
        }
        Ok(folded)
    }

    /// Parses a logical chain whose first operand has already been parsed.
    ///
    /// Grammar: `operator := (('and' | 'xor' | 'or') operand)+`
    ///
    /// Each operand may carry its own comparison or arithmetic, so
    /// `a == 1 or b > 2` compares before combining. The chain is folded with
    /// [`LOGIC_FOLD_ORDER`]. A parenthesized operand takes the rest of the
    /// chain with it: `a and (b) or c` is `a and ((b) or c)`.
    pub(crate) fn parse_operator(&mut self, first: Thunk) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Operator);

        let mut pairs = Vec::new();
        while self.test_operator() {
            let index = self.cursor.index();
            let symbol = self.take_match(&OPERATOR);
            let operator = LogicOperator::from_symbol(&symbol).ok_or_else(|| {
                                                                  ParseError::UnexpectedToken {
                                                                      token: symbol.clone(),
                                                                      index,
                                                                  }
                                                              })?;
            self.cursor.discard_whitespace();

            let operand = if self.test_flip() {
                self.parse_flip(Continuation::LOGIC_OPERAND)?
            } else if self.test_expression() {
                self.parse_expression(Continuation::FULL)?
            } else if self.test_pre_math() {
                self.parse_pre_math(Continuation::LOGIC_OPERAND)?
            } else if self.test_post_math() {
                self.parse_post_math(Continuation::LOGIC_OPERAND)?
            } else if self.test_literal() {
                self.parse_literal(Continuation::LOGIC_OPERAND)?
            } else {
                self.unexpected()?
            };
            self.cursor.discard_whitespace();
            pairs.push((operator, operand));
        }

        Ok(fold_chain(first, pairs, &LOGIC_FOLD_ORDER, logic::combine))
    }
}

/// Folds a left-to-right chain of `(operator, operand)` pairs into a single
/// thunk.
///
/// For each operator of `order` in turn, every occurrence of it in the chain
/// is combined with its two neighbours, left to right, before the next
/// operator is considered.
///
/// # Parameters
/// - `first`: The operand before the first operator.
/// - `pairs`: The remaining operators, each with the operand following it.
/// - `order`: Operators from first to last combined.
/// - `combine`: Builds the thunk for `left op right`.
pub(crate) fn fold_chain<O, F>(first: Thunk,
                               pairs: Vec<(O, Thunk)>,
                               order: &[O],
                               combine: F)
                               -> Thunk
    where O: Copy + PartialEq,
          F: Fn(O, Thunk, Thunk) -> Thunk
{
    let mut values = Vec::with_capacity(pairs.len() + 1);
    let mut operators = Vec::with_capacity(pairs.len());
    values.push(first);
    for (operator, operand) in pairs {
        operators.push(operator);
        values.push(operand);
    }

    for &current in order {
        let mut i = 0;
        while i < operators.len() {
            if operators[i] == current {
                operators.remove(i);
                let right = values.remove(i + 1);
                let left = values[i].clone();
                values[i] = combine(current, left, right);
            } else {
                i += 1;
            }
        }
    }

    values.swap_remove(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: f64) -> Thunk {
        Thunk::constant(Value::Number(n))
    }

    fn fold_math(first: f64, rest: &[(MathOperator, f64)]) -> Value {
        let pairs = rest.iter().map(|&(op, n)| (op, number(n))).collect();
        fold_chain(number(first), pairs, &MATH_FOLD_ORDER, |op, a, b| {
            Thunk::new(move || Ok(arithmetic::apply(op, &a.eval()?, &b.eval()?)))
        }).eval()
          .unwrap()
    }

    #[test]
    fn remainder_folds_last() {
        assert_eq!(fold_math(2.0, &[(MathOperator::Add, 3.0), (MathOperator::Mod, 2.0)]),
                   Value::Number(1.0));
    }

    #[test]
    fn subtraction_folds_before_addition() {
        // 10 - 2 + 3 folds as 10 - 2 first, then + 3.
        assert_eq!(fold_math(10.0, &[(MathOperator::Sub, 2.0), (MathOperator::Add, 3.0)]),
                   Value::Number(11.0));
        // 1 + 10 - 2 folds 10 - 2 first.
        assert_eq!(fold_math(1.0, &[(MathOperator::Add, 10.0), (MathOperator::Sub, 2.0)]),
                   Value::Number(9.0));
    }

    #[test]
    fn power_binds_tightest() {
        assert_eq!(fold_math(2.0, &[(MathOperator::Mul, 3.0), (MathOperator::Pow, 2.0)]),
                   Value::Number(18.0));
    }

    #[test]
    fn single_operand_is_returned_unchanged() {
        assert_eq!(fold_math(7.0, &[]), Value::Number(7.0));
    }
}
