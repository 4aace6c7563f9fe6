use crate::error::{ExprError, Result};
use crate::stack::Stack;
use crate::tokenizer::{MathTokenizer, Operator, Token};
use std::fmt;

/// A token sequence in reverse polish order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr> {
        Self::parse(MathTokenizer::new(expr.chars()))
    }

    /// Reorders infix tokens into postfix.
    ///
    /// Every operator pops stacked operators of equal or higher rank, so all
    /// of them associate to the left, `^` included. A `(` left open at the end
    /// is drained into the output like any other operator.
    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr> {
        let mut out = Vec::new();
        let mut stack = Stack::<Operator>::new();

        for token in tokens {
            match token {
                Token::Operand(_) => out.push(token),
                Token::Operator(Operator::OParen) => stack.push(Operator::OParen),
                Token::Operator(Operator::CParen) => loop {
                    match stack.pop() {
                        Ok(Operator::OParen) => break,
                        Ok(op) => out.push(Token::Operator(op)),
                        Err(_) => return Err(ExprError::UnbalancedParentheses),
                    }
                },
                Token::Operator(op) => {
                    while let Some(&top) = stack.peek() {
                        if top.rank() < op.rank() {
                            break;
                        }
                        out.push(Token::Operator(stack.pop()?));
                    }
                    stack.push(op);
                }
            }
            log::trace!("shunting: out={} ops={}", RPNExpr(out.clone()), stack);
        }
        while let Ok(top) = stack.pop() {
            out.push(Token::Operator(top));
        }
        let rpn = RPNExpr(out);
        log::debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}

/// Converts an infix token sequence to postfix, see [`ShuntingParser::parse`].
pub fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr> {
    ShuntingParser::parse(tokens)
}

#[cfg(test)]
mod tests {
    use crate::error::ExprError;
    use crate::parser::{to_postfix, RPNExpr, ShuntingParser};
    use crate::tokenizer::{tokenize, Operator, Token};

    fn postfix(expr: &str) -> String {
        ShuntingParser::parse_str(expr).unwrap().to_string()
    }

    #[test]
    fn test_parse1() {
        let rpn = ShuntingParser::parse_str("3+4*2/(1-5)^2^3").unwrap();
        let expect = vec![
            Token::Operand(format!("3")),
            Token::Operand(format!("4")),
            Token::Operand(format!("2")),
            Token::Operator(Operator::Mul),
            Token::Operand(format!("1")),
            Token::Operand(format!("5")),
            Token::Operator(Operator::Sub),
            Token::Operand(format!("2")),
            Token::Operator(Operator::Pow),
            Token::Operand(format!("3")),
            Token::Operator(Operator::Pow),
            Token::Operator(Operator::Div),
            Token::Operator(Operator::Add),
        ];
        assert_eq!(rpn, RPNExpr(expect));
    }

    #[test]
    fn test_parse2() {
        assert_eq!(postfix("2 + 3"), "2 3 +");
        assert_eq!(postfix("12 + 34"), "12 34 +");
        assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
        assert_eq!(postfix("(2 + 3) * 4"), "2 3 + 4 *");
        assert_eq!(postfix("2 + 3 * 2 - 5"), "2 3 2 * + 5 -");
        assert_eq!(postfix("(2 + 3) * (2 - 5)"), "2 3 + 2 5 - *");
        assert_eq!(postfix("(2 + 3) * (5 / 2)"), "2 3 + 5 2 / *");
        assert_eq!(postfix("2 + 3 * 4 / (6 - 4) + 1"), "2 3 4 * 6 4 - / + 1 +");
    }

    #[test]
    fn test_parse3() {
        assert_eq!(postfix("a * (b - c)"), "a b c - *");
        assert_eq!(postfix("x ^ 2 + y ^ 2"), "x 2 ^ y 2 ^ +");
        assert_eq!(postfix("((7))"), "7");
        assert_eq!(postfix(""), "");
    }

    #[test]
    fn left_assoc() {
        assert_eq!(postfix("2 ^ 3 ^ 2"), "2 3 ^ 2 ^");
        assert_eq!(postfix("8 - 4 - 2"), "8 4 - 2 -");
        assert_eq!(postfix("8 / 4 / 2"), "8 4 / 2 /");
        assert_eq!(postfix("8 / 4 * 2"), "8 4 / 2 *");
    }

    #[test]
    fn bad_parse() {
        let rpn = ShuntingParser::parse_str("(1 - x) / (1 + x))");
        assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));

        let rpn = ShuntingParser::parse_str(")");
        assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));

        let rpn = ShuntingParser::parse_str("4 + 6) * 4");
        assert_eq!(rpn, Err(ExprError::UnbalancedParentheses));
    }

    #[test]
    fn open_paren_is_drained() {
        assert_eq!(postfix("(2 + 3"), "2 3 + (");
        assert_eq!(postfix("2 * (3"), "2 3 ( *");
    }

    #[test]
    fn operand_order_kept() {
        let tokens = tokenize("a + b * (c - d) / e ^ f");
        let rpn = to_postfix(tokens.clone()).unwrap();
        let operands = |ts: &[Token]| -> Vec<Token> {
            ts.iter().filter(|t| !t.is_operator()).cloned().collect()
        };
        assert_eq!(operands(&rpn.0), operands(&tokens));
        assert_eq!(rpn.to_string(), "a b c d - * e f ^ / +");
    }

    #[test]
    fn retokenize_postfix() {
        let rpn = ShuntingParser::parse_str("(12 + x) * (5 / 2) - 7 ^ y").unwrap();
        assert_eq!(tokenize(&rpn.to_string()), rpn.0);
    }
}
