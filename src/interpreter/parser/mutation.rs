use std::rc::Rc;

use crate::{
    error::ParseError,
    grammar::{AssignmentOperator, PartKind, StepOperator},
    interpreter::{
        evaluator::{
            arithmetic,
            core::{Thunk, VariableRef},
        },
        parser::{
            core::{Continuation, ParseResult, Parser},
            patterns::{ASSIGNMENT, ASSIGNMENT_OPERATOR, POST_STEP, STEP, VARIABLE},
        },
        value::core::Value,
    },
};

impl Parser {
    pub(crate) fn test_pre_math(&mut self) -> bool {
        self.cursor.test_symbol(&*STEP, 0)
    }

    pub(crate) fn test_post_math(&mut self) -> bool {
        self.cursor.test_symbol(&*POST_STEP, 0)
    }

    pub(crate) fn test_assignment(&mut self) -> bool {
        self.cursor.test_symbol(&*ASSIGNMENT, 0)
    }

    /// Parses a prefix increment or decrement: `++x`, `--x`.
    ///
    /// Evaluating the thunk writes the new value back and returns it.
    pub(crate) fn parse_pre_math(&mut self, continuation: Continuation) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::PreMath);
        let index = self.cursor.index();
        let step = StepOperator::from_symbol(&self.take_match(&STEP)).ok_or_else(|| {
                                                                          self.unexpected_token()
                                                                      })?;

        if !self.test_variable() {
            if self.strict {
                return Err(ParseError::ExpectedVariable { index: self.cursor.index() });
            }
            return Ok(Thunk::incomplete(index));
        }
        let VariableRef { name, thunk } = self.parse_variable();

        let variables = Rc::clone(&self.variables);
        let stepped = Thunk::new(move || {
            let updated = thunk.eval()?.to_number() + step.delta();
            variables.write(&name, &Value::Number(updated));
            Ok(Value::Number(updated))
        });

        self.cursor.discard_whitespace();
        self.parse_continuation(stepped, continuation)
    }

    /// Parses a postfix increment or decrement: `x++`, `x--`.
    ///
    /// Evaluating the thunk writes the new value back and returns the old
    /// one, as a number.
    pub(crate) fn parse_post_math(&mut self, continuation: Continuation) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::PostMath);
        let name = self.take_match(&VARIABLE);
        let step = StepOperator::from_symbol(&self.take_match(&STEP)).ok_or_else(|| {
                                                                          self.unexpected_token()
                                                                      })?;

        let variables = Rc::clone(&self.variables);
        let stepped = Thunk::new(move || {
            let previous = variables.resolve(&name).to_number();
            variables.write(&name, &Value::Number(previous + step.delta()));
            Ok(Value::Number(previous))
        });

        self.cursor.discard_whitespace();
        self.parse_continuation(stepped, continuation)
    }

    /// Parses an assignment to `variable`.
    ///
    /// Grammar: `assignment := variable ('=' | '+=' | '-=' | '*=' | '/=')
    /// expression`
    ///
    /// The right side is parsed as a fresh outermost expression and so
    /// consumes the rest of the input. Compound operators combine the current
    /// value with the right side using the arithmetic rules of `+`, `-`, `*`
    /// and `/`. Evaluating the thunk returns the text that was stored.
    pub(crate) fn parse_assignment(&mut self, variable: VariableRef) -> ParseResult<Thunk> {
        self.cursor.enter(PartKind::Assignment);
        let index = self.cursor.index();
        let symbol = self.take_match(&ASSIGNMENT_OPERATOR);
        let operator = AssignmentOperator::from_symbol(&symbol).ok_or(
            ParseError::UnexpectedToken { token: symbol.clone(),
                                          index },
        )?;
        self.cursor.discard_whitespace();

        self.cursor.set_depth(-1);
        let value = self.parse_expression(Continuation::FULL)?;
        self.cursor.set_depth(0);

        let variables = Rc::clone(&self.variables);
        let VariableRef { name, thunk: current } = variable;
        Ok(Thunk::new(move || {
            let assigned = value.eval()?;
            let updated = match operator.math_operator() {
                Some(math) => arithmetic::apply(math, &current.eval()?, &assigned),
                None => assigned,
            };
            Ok(Value::Text(variables.write(&name, &updated)))
        }))
    }
}
