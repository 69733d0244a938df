//! Stock patterns for the lexemes most scanners need.
//!
//! Each is built once on first use and can be borrowed into any pattern list.

use lazy_static::lazy_static;

use super::pattern::Pattern;

macro_rules! stock_pattern {
    ($expression:literal, $label:literal, $significant:expr) => {
        Pattern::builder($expression)
            .label($label)
            .significant($significant)
            .build()
            .expect(concat!("stock pattern `", $label, "` must compile"))
    };
}

lazy_static! {
    /// Runs of whitespace other than newlines, discarded.
    pub static ref WHITESPACE: Pattern = stock_pattern!(r"[^\S\n]+", "whitespace", false);
    /// Runs of newlines, discarded.
    pub static ref NEWLINES: Pattern = stock_pattern!(r"\n+", "newlines", false);
    pub static ref WORD: Pattern = stock_pattern!(r"\w+", "word", true);
    pub static ref IDENTIFIER: Pattern = stock_pattern!(r"[a-zA-Z_][a-zA-Z0-9_]*", "identifier", true);
    /// Integers and decimals.
    pub static ref NUMBER: Pattern = stock_pattern!(r"[0-9]+(\.[0-9]+)?", "number", true);
    /// `//` comments up to the end of the line, discarded.
    pub static ref LINE_COMMENT: Pattern = stock_pattern!(r"//[^\n]*", "comment", false);
    /// A double-quoted string, backslash escapes included.
    pub static ref DOUBLE_QUOTED: Pattern = stock_pattern!(r#""(\\.|[^"\\])*""#, "string", true);
}
