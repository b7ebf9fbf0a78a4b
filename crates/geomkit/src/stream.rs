//! Whitespace-separated token reader used by stream-read operations.
//!
//! Tokens may be spread over any number of lines. The reader pulls one line at
//! a time from the underlying `BufRead`, so it can sit on stdin without
//! buffering the whole input.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{GeomError, Result};

/// Pull-based token source over any buffered reader.
pub struct Tokens<'a> {
    reader: Box<dyn BufRead + 'a>,
    pending: VecDeque<String>,
    line: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(reader: impl BufRead + 'a) -> Self {
        Self {
            reader: Box::new(reader),
            pending: VecDeque::new(),
            line: 0,
        }
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut buf = String::new();
            let read = self
                .reader
                .read_line(&mut buf)
                .map_err(|e| GeomError::parse(format!("read failed: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending
                .extend(buf.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `T`; end of input is an error here.
    pub fn next_scalar<T: FromStr>(&mut self) -> Result<T> {
        let tok = self
            .next_token()?
            .ok_or_else(|| GeomError::parse("unexpected end of input"))?;
        tok.parse::<T>().map_err(|_| {
            GeomError::parse(format!("line {}: cannot parse {tok:?}", self.line))
        })
    }

    /// Lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'a> From<&'a str> for Tokens<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut t = Tokens::from("1 2\n\n  3\n4 5 ");
        let got: Vec<i32> = (0..5).map(|_| t.next_scalar().unwrap()).collect();
        assert_eq!(got, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.next_token().unwrap(), None);
        assert_eq!(t.line(), 4);
    }

    #[test]
    fn bad_token_reports_line() {
        let mut t = Tokens::from("1\nx");
        assert_eq!(t.next_scalar::<i32>().unwrap(), 1);
        match t.next_scalar::<i32>() {
            Err(GeomError::Parse { reason }) => assert!(reason.contains("line 2")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn end_of_input_is_an_error_for_scalars() {
        let mut t = Tokens::from("   ");
        assert!(matches!(
            t.next_scalar::<f64>(),
            Err(GeomError::Parse { .. })
        ));
    }
}
