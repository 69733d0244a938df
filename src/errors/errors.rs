use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

/// Raised while building a [`crate::Pattern`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("invalid expression {expression:?}: {source}")]
    InvalidExpression {
        expression: String,
        #[source]
        source: regex::Error,
    },
    #[error("expression {expression:?} matches the empty string")]
    MatchesEmpty { expression: String },
}

impl PatternError {
    pub fn get_error_name(&self) -> &str {
        match self {
            PatternError::InvalidExpression { .. } => "InvalidExpression",
            PatternError::MatchesEmpty { .. } => "MatchesEmpty",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            PatternError::InvalidExpression { .. } => ErrorTip::None,
            PatternError::MatchesEmpty { expression } => ErrorTip::Suggestion(format!(
                "`{}` can match zero characters, use `+` instead of `*` or drop the empty alternative",
                expression
            )),
        }
    }
}

/// Raised by the scanner when no pattern matches at the cursor.
///
/// Tokens matched before the failure are discarded.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}{}: no pattern matches {:?}", source_prefix(.source_name), .position, .unmatched)]
pub struct ScanError {
    position: Position,
    unmatched: char,
    line_text: String,
    source_name: Option<Rc<str>>,
}

fn source_prefix(source: &Option<Rc<str>>) -> String {
    match source {
        Some(name) => format!("{}:", name),
        None => String::new(),
    }
}

impl ScanError {
    pub fn new(
        position: Position,
        unmatched: char,
        line_text: impl Into<String>,
        source_name: Option<Rc<str>>,
    ) -> Self {
        ScanError {
            position,
            unmatched,
            line_text: line_text.into(),
            source_name,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn unmatched(&self) -> char {
        self.unmatched
    }

    /// The full line containing the unmatched character.
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn get_error_name(&self) -> &str {
        "UnmatchedInput"
    }

    pub fn get_tip(&self) -> ErrorTip {
        if self.unmatched.is_whitespace() {
            ErrorTip::Suggestion(String::from(
                "Unmatched whitespace, add an insignificant whitespace pattern",
            ))
        } else {
            ErrorTip::None
        }
    }

    /// Renders a caret diagnostic pointing at the unmatched character.
    ///
    /// ```text
    /// error: no pattern matches '?'
    ///  -> <input>:1:4
    ///   |
    /// 1 | yay ?
    ///   | ----^
    /// ```
    pub fn render(&self) -> String {
        let line_string = self.position.line.to_string();
        let padding = line_string.len() + 2;
        let arrows = self.position.column + 1;

        let mut out = String::new();
        if let ErrorTip::None = self.get_tip() {
            out.push_str(&format!("error: no pattern matches {:?}\n", self.unmatched));
        } else {
            out.push_str(&format!(
                "error: no pattern matches {:?} ({})\n",
                self.unmatched,
                self.get_tip()
            ));
        }
        out.push_str(&format!(
            " -> {}:{}\n",
            self.source_name().unwrap_or("<input>"),
            self.position
        ));
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, self.line_text));
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

        out
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Either failure a scanning session can produce, for callers that build
/// patterns and tokenize in the same function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Pattern(err) => err.get_error_name(),
            Error::Scan(err) => err.get_error_name(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Pattern(err) => err.get_tip(),
            Error::Scan(err) => err.get_tip(),
        }
    }
}
