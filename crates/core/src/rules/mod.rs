// crates/core/src/rules/mod.rs
//! # Rule Engine
//!
//! Stateless detectors that look at one comment-stripped line at a time.
//!
//! | Module | Category |
//! |--------|----------|
//! | [`memory`] | Memory Management |
//! | [`stl`] | STL Efficiency |
//! | [`strings`] | String Operations |
//!
//! Every non-overlapping match of a detector yields its own issue, so a line
//! with two `push_back` calls reports two. All of them share one column: the
//! first occurrence of the rule's anchor text, even when the match itself
//! starts somewhere else. Only the length follows each match.

pub mod memory;
pub mod stl;
pub mod strings;

use crate::issue::{Category, Issue, Severity};
use crate::text::{char_column, char_len};
use regex::Regex;
use std::sync::OnceLock;

/// A single-line pattern detector.
pub trait Detector: Send + Sync {
    fn category(&self) -> Category;

    /// Inspect one clean line, one issue per match. `line_number` is zero-based.
    fn detect(&self, line: &str, line_number: usize) -> Vec<Issue>;
}

/// How the reported length is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Length of the regex match that produced the issue.
    Matched,
    /// Fixed length, matching the anchor text.
    Fixed(usize),
}

/// Table-driven detector: regex trigger plus an anchor used for positioning.
pub struct PatternRule {
    pub id: &'static str,
    pattern: &'static str,
    regex: OnceLock<Regex>,
    pub anchor: &'static str,
    pub span: Span,
    /// The rule stays silent when the line contains this text.
    pub unless: Option<&'static str>,
    pub severity: Severity,
    pub category: Category,
    pub score: u8,
    pub message: &'static str,
    pub suggestion: &'static str,
}

impl PatternRule {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        id: &'static str,
        pattern: &'static str,
        anchor: &'static str,
        span: Span,
        severity: Severity,
        category: Category,
        score: u8,
        message: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            id,
            pattern,
            regex: OnceLock::new(),
            anchor,
            span,
            unless: None,
            severity,
            category,
            score,
            message,
            suggestion,
        }
    }

    pub(crate) const fn unless(mut self, text: &'static str) -> Self {
        self.unless = Some(text);
        self
    }

    /// Source text of the trigger pattern.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    fn regex(&self) -> &Regex {
        // Patterns are compile-time constants covered by the rule tests.
        self.regex.get_or_init(|| {
            Regex::new(self.pattern).unwrap_or_else(|e| {
                panic!("built-in rule `{}` has an invalid pattern: {e}", self.id)
            })
        })
    }
}

impl Detector for PatternRule {
    fn category(&self) -> Category {
        self.category
    }

    fn detect(&self, line: &str, line_number: usize) -> Vec<Issue> {
        if self.unless.is_some_and(|text| line.contains(text)) {
            return Vec::new();
        }
        let Some(anchor_pos) = line.find(self.anchor) else {
            return Vec::new();
        };
        let column = char_column(line, anchor_pos);

        self.regex()
            .find_iter(line)
            .map(|matched| Issue {
                line: line_number,
                column,
                length: match self.span {
                    Span::Matched => char_len(matched.as_str()),
                    Span::Fixed(n) => n,
                },
                severity: self.severity,
                message: self.message.to_string(),
                category: self.category,
                suggestion: self.suggestion.to_string(),
                score: self.score,
            })
            .collect()
    }
}

/// All built-in detectors in emission order: memory, STL, strings.
pub fn all_rules() -> impl Iterator<Item = &'static PatternRule> {
    memory::RULES
        .iter()
        .chain(stl::RULES.iter())
        .chain(strings::RULES.iter())
}

/// Runs every detector on one clean line.
#[must_use]
pub fn detect_line(line: &str, line_number: usize) -> Vec<Issue> {
    all_rules()
        .flat_map(|rule| rule.detect(line, line_number))
        .collect()
}
