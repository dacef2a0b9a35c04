use crate::error::EngineError;
use crate::language::SourceLanguage;
use ambar_core::{Issue, ScanSummary};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scan result for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Option<SourceLanguage>,
    /// Number of `\n`-separated lines in the scanned text.
    pub lines: usize,
    pub is_binary: bool,
    pub issues: Vec<Issue>,
    pub summary: ScanSummary,
}

impl FileReport {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            language: None,
            lines: 0,
            is_binary: false,
            issues: Vec::new(),
            summary: ScanSummary::default(),
        }
    }
}

/// Result of a full run over all discovered files.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Reports sorted by path.
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    /// Totals across every report.
    #[must_use]
    pub fn summary(&self) -> ScanSummary {
        let mut total = ScanSummary::default();
        for report in &self.reports {
            total.merge(&report.summary);
        }
        total
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.reports.iter().map(|r| r.issues.len()).sum()
    }
}
