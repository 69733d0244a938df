use std::{fmt::Debug, ops::Range};

use regex::Regex;

/// The matching capability a [`crate::Pattern`] needs from an engine.
pub trait Matcher: Debug + Send + Sync {
    /// Byte range of the leftmost match starting at or after `start`.
    ///
    /// The whole `haystack` stays visible, so assertions such as `\b` see the
    /// text before `start`.
    fn find_from(&self, haystack: &str, start: usize) -> Option<Range<usize>>;

    /// Length of the match that begins exactly at `offset`, if any.
    fn match_at(&self, haystack: &str, offset: usize) -> Option<usize> {
        self.find_from(haystack, offset)
            .filter(|range| range.start == offset)
            .map(|range| range.len())
    }
}

impl Matcher for Regex {
    fn find_from(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        self.find_at(haystack, start).map(|m| m.range())
    }
}
