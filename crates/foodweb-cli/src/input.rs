//! Whitespace-separated token input

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads one whitespace-delimited token at a time, across line breaks
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token read as an organism index
    ///
    /// Negative or non-numeric tokens come back as `Some(None)`.
    pub fn next_index(&mut self) -> io::Result<Option<Option<usize>>> {
        Ok(self.next_token()?.map(|t| t.parse::<usize>().ok()))
    }

    /// First character of the next token
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.next_token()?.and_then(|t| t.chars().next()))
    }
}
