//! Pattern definitions for the scanner.
//!
//! A pattern pairs a compiled matcher with a significance flag and a
//! display label. The matcher sits behind the `Matcher` trait so the
//! scanner only ever asks "does this match at offset N, and how long".

pub mod common;
pub mod matcher;
pub mod pattern;
