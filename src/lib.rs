#![allow(clippy::module_inception)]

//! Lexical scanner driven by an ordered list of regular-expression patterns.
//!
//! Build [`Pattern`]s, hand them to [`tokenize`] (or a configured
//! [`Scanner`]) and get back the significant [`Token`]s of the input with
//! their line and column positions.

use std::fmt::Display;

pub mod errors;
pub mod macros;
pub mod pattern;
pub mod scanner;

extern crate regex;

pub use errors::errors::{Error, ErrorTip, PatternError, ScanError};
pub use pattern::{matcher::Matcher, pattern::Pattern, pattern::PatternBuilder};
pub use scanner::{
    scanner::{tokenize, ScanOptions, Scanner},
    tokens::Token,
};

/// A cursor position inside a scanned input.
///
/// `offset` is a byte offset, `line` starts at 1 and `column` counts
/// characters from the start of the line, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Moves past `text`, which must be the input slice beginning at `self.offset`.
    pub fn advance(&mut self, text: &str, newline: char) {
        for ch in text.chars() {
            if ch == newline {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.offset += text.len();
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the line number, the text of the line (without its terminator)
/// and the character column for a byte `offset` in `input`.
///
/// Offsets past the end are clamped to the end of the input.
pub fn get_line_at_offset(input: &str, offset: usize, newline: char) -> (usize, &str, usize) {
    let mut pos = offset.min(input.len());
    while !input.is_char_boundary(pos) {
        pos -= 1;
    }

    let before = &input[..pos];
    let line_number = before.matches(newline).count() + 1;
    let line_start = before.rfind(newline).map_or(0, |i| i + newline.len_utf8());
    let line_end = input[pos..]
        .find(newline)
        .map_or(input.len(), |i| pos + i);

    let line = input[line_start..line_end].trim_end_matches('\r');
    let column = input[line_start..pos].chars().count();

    (line_number, line, column)
}
