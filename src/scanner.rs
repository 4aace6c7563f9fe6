use crate::tokenizer::Operator;

/// A buffered char scanner that can look ahead and give back what it read.
///
/// Chars are pulled from `src` on demand into `buf`, `pos` marks the last
/// accepted char. `extract` hands out everything accepted so far.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        let lacking = self.pos - (self.buf.len() as isize) + 1;
        if lacking > 0 {
            self.buf.extend(self.src.by_ref().take(lacking as usize));
        }
        // never run past the end of the buffer
        self.pos = std::cmp::min(self.pos, self.buf.len() as isize);
        self.current()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source,
            buf: Vec::new(),
            pos: -1,
        }
    }

    pub fn current(&self) -> Option<char> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).copied()
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Takes the accepted chars out of the buffer and rewinds the cursor.
    pub fn extract(&mut self) -> String {
        let split_point = std::cmp::min(self.pos + 1, self.buf.len() as isize).max(0);
        self.pos = -1;
        let rest = self.buf.split_off(split_point as usize);
        std::mem::replace(&mut self.buf, rest).into_iter().collect()
    }

    /// Advance one char only if it satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.next(),
            _ => None,
        }
    }

    /// Advance over every leading char satisfying `pred`, true if any matched.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() {
            advanced = true;
        }
        advanced
    }

    // [0-9]+
    pub fn scan_number(&mut self) -> Option<String> {
        if self.skip_while(|c| c.is_ascii_digit()) {
            Some(self.extract())
        } else {
            None
        }
    }

    // [a-z]+
    pub fn scan_identifier(&mut self) -> Option<String> {
        if self.skip_while(|c| c.is_ascii_lowercase()) {
            Some(self.extract())
        } else {
            None
        }
    }

    pub fn scan_operator(&mut self) -> Option<Operator> {
        let op = self.peek().and_then(Operator::from_char)?;
        self.next();
        self.extract();
        Some(op)
    }

    /// Drops the next char, whatever it is. False once input is exhausted.
    pub fn discard(&mut self) -> bool {
        let skipped = self.next().is_some();
        self.extract();
        skipped
    }
}
