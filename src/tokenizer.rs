use crate::scanner::Scanner;
use crate::PRECEDENCE;
use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Operator {
    OParen,
    CParen,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Looks `symbol` up in the precedence table.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        PRECEDENCE
            .iter()
            .find(|(_, sym, _)| *sym == symbol)
            .map(|(op, _, _)| *op)
    }

    pub fn from_char(c: char) -> Option<Operator> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }

    pub fn symbol(self) -> &'static str {
        self.entry().1
    }

    pub fn rank(self) -> u8 {
        self.entry().2
    }

    // rows are laid out in variant order
    fn entry(self) -> &'static (Operator, &'static str, u8) {
        &PRECEDENCE[self as usize]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An atomic piece of an expression.
///
/// Whether a lexeme is an operand or an operator is settled here, once, so
/// nothing downstream needs to consult the precedence table to find out.
#[derive(PartialEq, Debug, Clone)]
pub enum Token {
    /// A run of digits, or a run of lowercase letters naming a variable.
    Operand(String),
    Operator(Operator),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(lexeme) => f.write_str(lexeme),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Splits a char stream into [`Token`]s.
///
/// Chars that can't start a token (whitespace, `.`, uppercase letters,
/// unknown symbols) are dropped without complaint, so `"3.5"` yields the two
/// operands `3` and `5`.
pub struct MathTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer {
            src: Scanner::new(source),
        }
    }

    fn get_token(&mut self) -> Option<Token> {
        loop {
            if let Some(num) = self.src.scan_number() {
                return Some(Token::Operand(num));
            } else if let Some(id) = self.src.scan_identifier() {
                return Some(Token::Operand(id));
            } else if let Some(op) = self.src.scan_operator() {
                return Some(Token::Operator(op));
            } else if !self.src.discard() {
                return None;
            }
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for MathTokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Token> {
        self.get_token()
    }
}

pub fn tokenize(expression: &str) -> Vec<Token> {
    MathTokenizer::new(expression.chars()).collect()
}
