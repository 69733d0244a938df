use std::{fmt::Display, rc::Rc};

use crate::{pattern::pattern::Pattern, Position};

/// One significant match.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'p> {
    pub text: String,
    pub pattern: &'p Pattern,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub source: Option<Rc<str>>,
}

impl Token<'_> {
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_from(&self, pattern: &Pattern) -> bool {
        std::ptr::eq(self.pattern, pattern)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{}:", source)?;
        }
        write!(
            f,
            "{}:{}: '{}' {}",
            self.line,
            self.column,
            self.text,
            self.pattern.label()
        )
    }
}
