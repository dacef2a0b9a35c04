// crates/core/src/lib.rs
//! Line-oriented scanner for energy-inefficient C/C++ constructs.
//!
//! ```rust
//! use ambar_core::{Category, Severity, scan};
//!
//! let issues = scan("int* p = new int[10]; // raw allocation");
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].severity, Severity::High);
//! assert_eq!(issues[0].category, Category::MemoryManagement);
//! assert_eq!(issues[0].column, 9);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod comment;
pub mod issue;
pub mod nesting;
pub mod rules;
pub mod scanner;
pub mod stats;
pub mod text;

pub use comment::{CommentStripper, clean_lines};
pub use issue::{Category, Issue, Severity};
pub use nesting::{LoopEntry, LoopKind, LoopNestingTracker};
pub use rules::{Detector, PatternRule, Span, detect_line};
pub use scanner::scan;
pub use stats::ScanSummary;
