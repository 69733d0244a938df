use std::{fmt::Display, ops::Range};

use regex::RegexBuilder;

use crate::errors::errors::PatternError;

use super::matcher::Matcher;

/// An immutable scanning rule: an expression, whether its matches are kept,
/// and a label for diagnostics.
#[derive(Debug)]
pub struct Pattern {
    expression: String,
    label: String,
    significant: bool,
    case_insensitive: bool,
    matcher: Box<dyn Matcher>,
}

impl Pattern {
    /// A significant pattern labelled with its own expression.
    pub fn new(expression: &str) -> Result<Pattern, PatternError> {
        Pattern::builder(expression).build()
    }

    /// A pattern whose matches are consumed but never emitted, such as whitespace.
    pub fn insignificant(expression: &str) -> Result<Pattern, PatternError> {
        Pattern::builder(expression).significant(false).build()
    }

    pub fn builder(expression: &str) -> PatternBuilder {
        PatternBuilder {
            expression: expression.to_string(),
            label: None,
            significant: true,
            case_insensitive: false,
        }
    }

    /// Wraps a matcher from another engine. `expression` is used as the label.
    pub fn with_matcher(
        expression: &str,
        matcher: impl Matcher + 'static,
        significant: bool,
    ) -> Result<Pattern, PatternError> {
        Pattern::from_parts(
            expression.to_string(),
            None,
            significant,
            false,
            Box::new(matcher),
        )
    }

    fn from_parts(
        expression: String,
        label: Option<String>,
        significant: bool,
        case_insensitive: bool,
        matcher: Box<dyn Matcher>,
    ) -> Result<Pattern, PatternError> {
        if matcher.match_at("", 0).is_some() {
            return Err(PatternError::MatchesEmpty { expression });
        }

        Ok(Pattern {
            label: label.unwrap_or_else(|| expression.clone()),
            expression,
            significant,
            case_insensitive,
            matcher,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_significant(&self) -> bool {
        self.significant
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn find_from(&self, input: &str, start: usize) -> Option<Range<usize>> {
        self.matcher.find_from(input, start)
    }

    pub fn match_at(&self, input: &str, offset: usize) -> Option<usize> {
        self.matcher.match_at(input, offset)
    }

    /// `"{label}: {expression} (sig|non)"`, without the label part when it
    /// is the expression itself.
    pub fn describe(&self) -> String {
        let kind = if self.significant { "sig" } else { "non" };

        if self.label == self.expression {
            format!("{} ({})", self.expression, kind)
        } else {
            format!("{}: {} ({})", self.label, self.expression, kind)
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
            && self.label == other.label
            && self.significant == other.significant
            && self.case_insensitive == other.case_insensitive
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Debug, Clone)]
pub struct PatternBuilder {
    expression: String,
    label: Option<String>,
    significant: bool,
    case_insensitive: bool,
}

impl PatternBuilder {
    pub fn significant(mut self, significant: bool) -> Self {
        self.significant = significant;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn build(self) -> Result<Pattern, PatternError> {
        let regex = RegexBuilder::new(&self.expression)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|source| PatternError::InvalidExpression {
                expression: self.expression.clone(),
                source,
            })?;

        Pattern::from_parts(
            self.expression,
            self.label,
            self.significant,
            self.case_insensitive,
            Box::new(regex),
        )
    }
}
