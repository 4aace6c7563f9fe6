use thiserror::Error;

/// Everything that can go wrong while converting or evaluating an expression.
///
/// Tokenizing never fails, so every variant comes from the converter, the
/// evaluator or the [`Stack`](crate::Stack) they are built on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// A symbol that is not in the precedence table reached a rank lookup,
    /// or a parenthesis reached the evaluator.
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    /// A `)` found no matching `(` on the operator stack.
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    /// An operator needed more operands than the stack held.
    #[error("Stack underflow: not enough operands")]
    StackUnderflow,
    /// The right hand side of `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Mathematically undefined, eg: a fractional power of a negative base.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
    /// Evaluation finished with more than one value on the operand stack.
    #[error("Malformed expression: {0} operands left on the stack")]
    LeftoverOperands(usize),
    #[error("Can't pop from empty stack")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, ExprError>;
