mod error;
mod parser;
mod rpneval;
mod scanner;
mod stack;
mod tokenizer;

pub use crate::error::{ExprError, Result};
pub use crate::parser::{to_postfix, RPNExpr, ShuntingParser};
pub use crate::rpneval::{evaluate, evaluate_str, MathContext};
pub use crate::stack::Stack;
pub use crate::tokenizer::{tokenize, MathTokenizer, Operator, Token};

/// Operator symbols and their binding strength.
///
/// `(` sits at the bottom so the shunting-yard never pops it implicitly, `)`
/// sits at the top. Rows follow `Operator`'s variant order.
pub(crate) static PRECEDENCE: [(Operator, &'static str, u8); 7] = [
    (Operator::OParen, "(", 1),
    (Operator::CParen, ")", 5),
    (Operator::Add, "+", 2),
    (Operator::Sub, "-", 2),
    (Operator::Mul, "*", 3),
    (Operator::Div, "/", 3),
    (Operator::Pow, "^", 4),
];

pub fn is_operator(symbol: &str) -> bool {
    Operator::from_symbol(symbol).is_some()
}

pub fn rank(symbol: &str) -> Result<u8> {
    Operator::from_symbol(symbol)
        .map(Operator::rank)
        .ok_or_else(|| ExprError::InvalidOperator(symbol.to_string()))
}
