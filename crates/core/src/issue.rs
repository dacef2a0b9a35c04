// crates/core/src/issue.rs
//! Issue model produced by every detector in the scanner.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Presentation weight of an issue.
///
/// Ordered `Low < Medium < High` so hosts can filter by threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping label attached to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Memory Management")]
    MemoryManagement,
    #[serde(rename = "STL Efficiency")]
    StlEfficiency,
    #[serde(rename = "Algorithmic Complexity")]
    AlgorithmicComplexity,
    #[serde(rename = "String Operations")]
    StringOperations,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::MemoryManagement,
        Self::StlEfficiency,
        Self::AlgorithmicComplexity,
        Self::StringOperations,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MemoryManagement => "Memory Management",
            Self::StlEfficiency => "STL Efficiency",
            Self::AlgorithmicComplexity => "Algorithmic Complexity",
            Self::StringOperations => "String Operations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single positional finding.
///
/// `line` is a zero-based index into the scanned document. `column` and
/// `length` are counted in characters of the comment-stripped line, so the
/// highlighted range is `[column, column + length)` on that line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    pub line: usize,
    pub column: usize,
    pub length: usize,
    pub severity: Severity,
    pub message: String,
    pub category: Category,
    pub suggestion: String,
    /// Heuristic cost weight in `1..=10`.
    pub score: u8,
}

impl Issue {
    /// Exclusive end column of the highlighted span.
    #[must_use]
    pub const fn end_column(&self) -> usize {
        self.column + self.length
    }
}
