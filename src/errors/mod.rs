//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - `PatternError`, raised when a pattern cannot be built
//! - `ScanError`, raised when no pattern matches the input at some position
//! - `Error`, wrapping both for callers that handle them together
//! - Caret-style rendering of scan failures with optional suggestions

pub mod errors;
