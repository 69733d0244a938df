use std::{ops::Range, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::ScanError, get_line_at_offset, pattern::pattern::Pattern, Position, MK_TOKEN,
};

use super::tokens::Token;

/// Per-call scanning settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Name attached to every token and error, e.g. a file path.
    pub source: Option<Rc<str>>,
    /// Character that ends a line.
    pub newline: char,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            source: None,
            newline: '\n',
        }
    }
}

impl ScanOptions {
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(Rc::from(source));
        self
    }

    pub fn with_newline(mut self, newline: char) -> Self {
        self.newline = newline;
        self
    }
}

/// Splits inputs into tokens using an ordered pattern list.
///
/// Earlier patterns take priority: at each position the first pattern that
/// matches there wins, whatever the length of later matches.
#[derive(Debug, Clone)]
pub struct Scanner<'p> {
    patterns: &'p [Pattern],
    options: ScanOptions,
}

/// What is known about a pattern's next match during one call.
#[derive(Debug, Clone)]
enum Lookahead {
    Unknown,
    Found(Range<usize>),
    Exhausted,
}

impl<'p> Scanner<'p> {
    pub fn new(patterns: &'p [Pattern]) -> Self {
        Scanner::with_options(patterns, ScanOptions::default())
    }

    pub fn with_options(patterns: &'p [Pattern], options: ScanOptions) -> Self {
        Scanner { patterns, options }
    }

    pub fn patterns(&self) -> &'p [Pattern] {
        self.patterns
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Tokenizes the whole of `input`, or fails at the first position no
    /// pattern matches.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token<'p>>, ScanError> {
        debug!(
            "tokenizing {} bytes with {} patterns",
            input.len(),
            self.patterns.len()
        );

        let mut tokens = vec![];
        let mut cursor = Position::start();
        let mut lookahead = vec![Lookahead::Unknown; self.patterns.len()];

        while cursor.offset < input.len() {
            let Some((pattern, len)) = self.first_match(input, cursor.offset, &mut lookahead)
            else {
                return Err(self.unmatched(input, cursor));
            };

            let text = &input[cursor.offset..cursor.offset + len];
            trace!("{} '{}' {}", cursor, text.escape_debug(), pattern.label());

            if pattern.is_significant() {
                tokens.push(MK_TOKEN!(
                    text.to_string(),
                    pattern,
                    cursor,
                    self.options.source.clone()
                ));
            }

            cursor.advance(text, self.options.newline);
        }

        debug!("tokenized into {} tokens", tokens.len());
        Ok(tokens)
    }

    fn first_match(
        &self,
        input: &str,
        offset: usize,
        lookahead: &mut [Lookahead],
    ) -> Option<(&'p Pattern, usize)> {
        let patterns = self.patterns;

        patterns
            .iter()
            .zip(lookahead.iter_mut())
            .find_map(|(pattern, slot)| {
                match_len(pattern, slot, input, offset).map(|len| (pattern, len))
            })
    }

    fn unmatched(&self, input: &str, cursor: Position) -> ScanError {
        let unmatched = input[cursor.offset..].chars().next().unwrap_or_default();
        let (_, line_text, _) = get_line_at_offset(input, cursor.offset, self.options.newline);

        debug!("no pattern matches {:?} at {}", unmatched, cursor);
        ScanError::new(cursor, unmatched, line_text, self.options.source.clone())
    }
}

/// Length of `pattern`'s non-empty match anchored at `offset`.
///
/// A remembered match starting past `offset` means nothing starts at
/// `offset`, since searches report the leftmost match.
fn match_len(pattern: &Pattern, slot: &mut Lookahead, input: &str, offset: usize) -> Option<usize> {
    let cached = match &*slot {
        Lookahead::Exhausted => return None,
        Lookahead::Found(range) if range.start >= offset => Some(range.clone()),
        _ => None,
    };

    let found = match cached {
        Some(range) => range,
        None => {
            let Some(range) = pattern.find_from(input, offset) else {
                *slot = Lookahead::Exhausted;
                return None;
            };
            *slot = Lookahead::Found(range.clone());
            range
        }
    };

    if found.start != offset || found.is_empty() || input.get(found.clone()).is_none() {
        return None;
    }

    Some(found.len())
}

/// Tokenizes `input` with default options.
pub fn tokenize<'p>(input: &str, patterns: &'p [Pattern]) -> Result<Vec<Token<'p>>, ScanError> {
    Scanner::new(patterns).tokenize(input)
}
