// crates/cli/src/diagnostics.rs
//! Issue から診断・ハイライト範囲への変換
//!
//! Mirrors what an editor host shows: one diagnostic per issue, and the
//! highlight ranges bucketed by severity.
use ambar_core::{Issue, Severity};
use serde::Serialize;
use std::fmt;

/// Label attached to every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "Ambar - C++ Energy Analyzer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Information,
}

impl From<Severity> for DiagnosticLevel {
    fn from(s: Severity) -> Self {
        match s {
            Severity::High => Self::Error,
            Severity::Medium => Self::Warning,
            Severity::Low => Self::Information,
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "info",
        })
    }
}

/// Zero-based single-line span, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightRange {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl From<&Issue> for HighlightRange {
    fn from(issue: &Issue) -> Self {
        Self {
            line: issue.line,
            start: issue.column,
            end: issue.end_column(),
        }
    }
}

impl fmt::Display for HighlightRange {
    /// 1-based `line:col-col`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line + 1, self.start + 1, self.end + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range: HighlightRange,
    pub level: DiagnosticLevel,
    pub message: String,
    pub source: &'static str,
}

/// `[category] message (Score: n/10)` followed by the suggestion line.
#[must_use]
pub fn format_message(issue: &Issue) -> String {
    format!(
        "[{}] {} (Score: {}/10)\n💡 {}",
        issue.category, issue.message, issue.score, issue.suggestion
    )
}

impl From<&Issue> for Diagnostic {
    fn from(issue: &Issue) -> Self {
        Self {
            range: HighlightRange::from(issue),
            level: issue.severity.into(),
            message: format_message(issue),
            source: DIAGNOSTIC_SOURCE,
        }
    }
}

#[must_use]
pub fn diagnostics(issues: &[Issue]) -> Vec<Diagnostic> {
    issues.iter().map(Diagnostic::from).collect()
}

/// Highlight ranges grouped by severity, one list per level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityRanges {
    pub high: Vec<HighlightRange>,
    pub medium: Vec<HighlightRange>,
    pub low: Vec<HighlightRange>,
}

impl SeverityRanges {
    /// Issue order is kept inside each bucket.
    #[must_use]
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut ranges = Self::default();
        for issue in issues {
            ranges.bucket_mut(issue.severity).push(issue.into());
        }
        ranges
    }

    #[must_use]
    pub fn get(&self, severity: Severity) -> &[HighlightRange] {
        match severity {
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<HighlightRange> {
        match severity {
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }
}
