// crates/core/src/stats.rs
use crate::issue::{Category, Issue, Severity};
use serde::{Deserialize, Serialize};

/// Per-document totals derived from a list of issues.
///
/// `scan` never computes this itself; hosts build it when they need a
/// document-level figure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub issues: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub memory_management: usize,
    pub stl_efficiency: usize,
    pub algorithmic_complexity: usize,
    pub string_operations: usize,
    /// Sum of all issue scores.
    pub total_score: u64,
    pub max_score: u8,
}

impl ScanSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self::new();
        for issue in issues {
            summary.add(issue);
        }
        summary
    }

    pub fn add(&mut self, issue: &Issue) {
        self.issues += 1;
        match issue.severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
        match issue.category {
            Category::MemoryManagement => self.memory_management += 1,
            Category::StlEfficiency => self.stl_efficiency += 1,
            Category::AlgorithmicComplexity => self.algorithmic_complexity += 1,
            Category::StringOperations => self.string_operations += 1,
        }
        self.total_score += u64::from(issue.score);
        self.max_score = self.max_score.max(issue.score);
    }

    #[must_use]
    pub const fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Highest severity present, if any.
    #[must_use]
    pub fn worst(&self) -> Option<Severity> {
        Severity::ALL.into_iter().find(|&s| self.count(s) > 0)
    }

    pub fn merge(&mut self, other: &Self) {
        self.issues += other.issues;
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
        self.memory_management += other.memory_management;
        self.stl_efficiency += other.stl_efficiency;
        self.algorithmic_complexity += other.algorithmic_complexity;
        self.string_operations += other.string_operations;
        self.total_score += other.total_score;
        self.max_score = self.max_score.max(other.max_score);
    }
}
