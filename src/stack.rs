use crate::error::{ExprError, Result};
use std::fmt;

/// A plain LIFO stack. The top is the last element of the inner `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { data: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(ExprError::EmptyContainer)
    }

    // Unlike pop, an empty stack is not an error here
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bottom -> {:?} <- Top", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::error::ExprError;

    #[test]
    fn push_pop_peek() {
        let mut s = Stack::new();
        s.push('a');
        assert_eq!(s.peek(), Some(&'a'));
        assert_eq!(s.pop(), Ok('a'));
        s.push('a');
        s.push('b');
        assert_eq!(s.peek(), Some(&'b'));
        assert_eq!(s.size(), 2);
        assert_eq!(s.pop(), Ok('b'));
        assert_eq!(s.size(), 1);
        assert_eq!(s.pop(), Ok('a'));
        assert!(s.is_empty());
    }

    #[test]
    fn empty_stack() {
        let mut s = Stack::<i32>::new();
        assert_eq!(s.pop(), Err(ExprError::EmptyContainer));
        assert_eq!(s.peek(), None);
        assert_eq!(s.size(), 0);
    }

    #[test]
    fn interleaved() {
        let mut s = Stack::new();
        s.push(22);
        s.push(29);
        let a = s.pop().unwrap();
        s.push(15);
        s.push(41);
        let b = s.pop().unwrap();
        s.push(23);
        s.push(24);
        s.push(42);
        let c = s.pop().unwrap();
        assert_eq!((a, b, c), (29, 41, 42));
        assert_eq!(s.size(), 4);
    }

    #[test]
    fn display() {
        let mut s = Stack::new();
        for c in &["a", "b", "c", "a"] {
            s.push(*c);
        }
        assert_eq!(s.to_string(), r#"Bottom -> ["a", "b", "c", "a"] <- Top"#);
        s.pop().unwrap();
        assert_eq!(s.to_string(), r#"Bottom -> ["a", "b", "c"] <- Top"#);
    }
}
