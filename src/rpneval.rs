use crate::error::{ExprError, Result};
use crate::parser::RPNExpr;
use crate::stack::Stack;
use crate::tokenizer::{MathTokenizer, Operator, Token};
use std::collections::HashMap;

/// Variable bindings used to resolve identifier operands.
#[derive(Debug, Clone)]
pub struct MathContext(pub HashMap<String, f64>);

impl MathContext {
    pub fn new() -> MathContext {
        use std::f64::consts;
        let mut cx = HashMap::new();
        cx.insert("pi".to_string(), consts::PI);
        cx.insert("e".to_string(), consts::E);
        MathContext(cx)
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.0.insert(var.to_string(), val);
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64> {
        self.eval_tokens(rpn.0.iter().cloned())
    }

    pub fn eval_str(&self, postfix: &str) -> Result<f64> {
        self.eval_tokens(MathTokenizer::new(postfix.chars()))
    }

    /// Runs a postfix token stream against an operand stack.
    ///
    /// Operators pop their right hand side first, so `3 2 -` is `3 - 2`. The
    /// stack has to end up holding exactly one value.
    pub fn eval_tokens(&self, tokens: impl IntoIterator<Item = Token>) -> Result<f64> {
        let mut operands = Stack::<f64>::new();

        for token in tokens {
            match token {
                Token::Operand(ref lexeme) => operands.push(self.operand_value(lexeme)?),
                Token::Operator(op) => {
                    let r = operands.pop().map_err(|_| ExprError::StackUnderflow)?;
                    let l = operands.pop().map_err(|_| ExprError::StackUnderflow)?;
                    operands.push(calculate(op, l, r)?);
                }
            }
            log::trace!("eval: {} -> {}", token, operands);
        }
        let result = operands.pop().map_err(|_| ExprError::StackUnderflow)?;
        if !operands.is_empty() {
            return Err(ExprError::LeftoverOperands(operands.size() + 1));
        }
        log::debug!("evaluated to {}", result);
        Ok(result)
    }

    fn operand_value(&self, lexeme: &str) -> Result<f64> {
        if lexeme.bytes().all(|b| b.is_ascii_digit()) {
            return lexeme
                .parse::<f64>()
                .map_err(|_| ExprError::InvalidOperation(format!("Bad number: {}", lexeme)));
        }
        match self.0.get(lexeme) {
            Some(value) => Ok(*value),
            None => Err(ExprError::UnknownVariable(lexeme.to_string())),
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a binary operator as `l op r`.
pub(crate) fn calculate(op: Operator, l: f64, r: f64) -> Result<f64> {
    match op {
        Operator::Add => Ok(l + r),
        Operator::Sub => Ok(l - r),
        Operator::Mul => Ok(l * r),
        Operator::Div if r == 0.0 => Err(ExprError::DivisionByZero),
        Operator::Div => Ok(l / r),
        Operator::Pow if l < 0.0 && r.is_finite() && r.fract() != 0.0 => {
            Err(ExprError::InvalidOperation(format!("{} ^ {} has no real value", l, r)))
        }
        Operator::Pow => Ok(l.powf(r)),
        Operator::OParen | Operator::CParen => {
            Err(ExprError::InvalidOperator(op.symbol().to_string()))
        }
    }
}

/// Evaluates postfix tokens with a default [`MathContext`].
pub fn evaluate(tokens: impl IntoIterator<Item = Token>) -> Result<f64> {
    MathContext::new().eval_tokens(tokens)
}

/// Tokenizes and evaluates a postfix string with a default [`MathContext`].
pub fn evaluate_str(postfix: &str) -> Result<f64> {
    MathContext::new().eval_str(postfix)
}
