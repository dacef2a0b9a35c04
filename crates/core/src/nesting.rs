// crates/core/src/nesting.rs
//! # Loop Nesting Tracker
//!
//! Whole-document pass that keeps a stack of open `for`/`while` loops and
//! flags nested loops by depth.
//!
//! The stack is an approximation, not a brace matcher:
//!
//! - every loop opener on a line is pushed, left to right
//! - every `}` on a line pops one entry, most recent first, while any remain
//! - `{` is ignored, as are non-loop blocks and brace-less loop bodies
//!
//! | Depth | Severity | Score |
//! |-------|----------|-------|
//! | 1 | (not reported) | - |
//! | 2 | medium | 6 |
//! | n >= 3 | high | `min(10, 7 + n)` |
//!
//! Entries still open at the end of the document are dropped silently.

use crate::issue::{Category, Issue, Severity};
use crate::text::{char_column, char_len};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

impl LoopKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "for" => Some(Self::For),
            "while" => Some(Self::While),
            _ => None,
        }
    }
}

/// An open loop on the tracker's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopEntry {
    pub line: usize,
    pub column: usize,
    pub kind: LoopKind,
}

fn loop_opener() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(for|while)\s*\(").expect("loop opener pattern is valid"))
}

/// ループのネスト深さを追跡する
#[derive(Debug, Default, Clone)]
pub struct LoopNestingTracker {
    stack: Vec<LoopEntry>,
}

impl LoopNestingTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Current number of open loops.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Feeds one clean line and returns the nesting issues it produced.
    pub fn process_line(&mut self, line: &str, line_number: usize) -> Vec<Issue> {
        if line.trim().is_empty() {
            return Vec::new();
        }

        let mut issues = Vec::new();
        for caps in loop_opener().captures_iter(line) {
            let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(kind) = LoopKind::from_keyword(keyword.as_str()) else {
                continue;
            };

            let column = char_column(line, whole.start());
            self.stack.push(LoopEntry {
                line: line_number,
                column,
                kind,
            });

            if let Some(issue) =
                classify(self.stack.len(), line_number, column, char_len(whole.as_str()))
            {
                issues.push(issue);
            }
        }

        let closing = line.matches('}').count();
        for _ in 0..closing {
            if self.stack.pop().is_none() {
                break;
            }
        }

        issues
    }

    /// Runs a fresh tracker over every clean line of a document.
    #[must_use]
    pub fn analyze<S: AsRef<str>>(lines: &[S]) -> Vec<Issue> {
        let mut tracker = Self::new();
        lines
            .iter()
            .enumerate()
            .flat_map(|(i, line)| tracker.process_line(line.as_ref(), i))
            .collect()
    }
}

fn classify(level: usize, line: usize, column: usize, length: usize) -> Option<Issue> {
    let (severity, message, suggestion, score) = match level {
        0 | 1 => return None,
        2 => (
            Severity::Medium,
            "Double nested loop - O(n²) complexity".to_string(),
            "Check whether a more efficient algorithm can replace the inner loop",
            6,
        ),
        n => (
            Severity::High,
            format!("Deeply nested loop (level {n}) - O(n^{n}) complexity"),
            "Consider restructuring the algorithm or using better-suited data structures",
            u8::try_from(n.saturating_add(7).min(10)).unwrap_or(10),
        ),
    };

    Some(Issue {
        line,
        column,
        length,
        severity,
        message,
        category: Category::AlgorithmicComplexity,
        suggestion: suggestion.to_string(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOP: &str = "for (int i=0;i<n;i++) {";

    #[test]
    fn test_single_loop_not_reported() {
        let issues = LoopNestingTracker::analyze(&[LOOP]);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_double_nested() {
        let lines = [LOOP, "    for (int j=0;j<n;j++) {", "    }", "}"];
        let issues = LoopNestingTracker::analyze(&lines);
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.line, 1);
        assert_eq!(issue.column, 4);
        assert_eq!(issue.length, "for (".len());
        assert_eq!(issue.severity, Severity::Medium);
        assert_eq!(issue.score, 6);
        assert!(issue.message.contains("O(n²)"));
        assert_eq!(issue.category, Category::AlgorithmicComplexity);
    }

    #[test]
    fn test_triple_nested() {
        let lines = [LOOP, LOOP, LOOP];
        let issues = LoopNestingTracker::analyze(&lines);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].severity, Severity::High);
        assert_eq!(issues[1].score, 10);
        assert!(issues[1].message.contains("level 3"));
        assert!(issues[1].message.contains("O(n^3)"));
    }

    #[test]
    fn test_score_is_capped() {
        let lines = [LOOP; 6];
        let issues = LoopNestingTracker::analyze(&lines);
        assert!(issues.iter().skip(1).all(|i| i.score == 10));
        assert!(issues.last().unwrap().message.contains("level 6"));
    }

    #[test]
    fn test_closing_brace_pops() {
        let lines = [LOOP, "}", LOOP];
        assert!(LoopNestingTracker::analyze(&lines).is_empty());
    }

    #[test]
    fn test_extra_braces_do_not_underflow() {
        let mut tracker = LoopNestingTracker::new();
        tracker.process_line(LOOP, 0);
        tracker.process_line("} } }", 1);
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_same_line_loops() {
        let issues =
            LoopNestingTracker::analyze(&["for (;;) while (x) { }", "for (;;) {", "while(y) {"]);
        // line 0: push for, push while (level 2), then one `}` pops while
        // line 1: push for (level 2); line 2: push while (level 3)
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].line, 0);
        assert_eq!(issues[0].column, 9);
        assert_eq!(issues[1].line, 1);
        assert_eq!(issues[1].severity, Severity::Medium);
        assert_eq!(issues[2].line, 2);
        assert_eq!(issues[2].length, "while(".len());
        assert_eq!(issues[2].severity, Severity::High);
    }

    #[test]
    fn test_non_loop_braces_pop_loops() {
        // `if` blocks close loops on the stack: a known limit of the model.
        let lines = [LOOP, "if (x) {", "}", LOOP];
        assert!(LoopNestingTracker::analyze(&lines).is_empty());
    }

    #[test]
    fn test_open_loops_and_kinds() {
        let mut tracker = LoopNestingTracker::new();
        tracker.process_line("while (running) {", 0);
        tracker.process_line("  for(auto& x : xs) {", 1);
        let open = &tracker.stack;
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].kind, LoopKind::While);
        assert_eq!(open[1].kind, LoopKind::For);
        assert_eq!(open[1].column, 2);
        tracker.reset();
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        let issues = LoopNestingTracker::analyze(&[LOOP, "before(x); awhile (y);"]);
        assert!(issues.is_empty());
    }
}
