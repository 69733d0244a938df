//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a matched span

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$text` - The matched text
/// * `$pattern` - The producing pattern
/// * `$position` - The position of the first character
/// * `$source` - The optional source name
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("42".to_string(), &number, cursor, None);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($text:expr, $pattern:expr, $position:expr, $source:expr) => {
        Token {
            text: $text,
            pattern: $pattern,
            line: $position.line,
            column: $position.column,
            offset: $position.offset,
            source: $source,
        }
    };
}
