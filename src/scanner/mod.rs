//! Tokenization of inputs against an ordered pattern list.
//!
//! This module contains the scanner that turns an input string into
//! tokens. It handles:
//!
//! - First-match-wins priority across the pattern list
//! - Dropping matches of insignificant patterns
//! - Line and column tracking across newlines
//! - Failing at the exact position no pattern matches

pub mod scanner;
pub mod tokens;
