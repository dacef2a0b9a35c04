// crates/core/src/scanner.rs
use crate::comment::clean_lines;
use crate::issue::Issue;
use crate::nesting::LoopNestingTracker;
use crate::rules::detect_line;

/// Scan a whole document and return every issue found.
///
/// This is the core entry point for the library. The text is split on `\n`
/// (a trailing `\r` stays part of its line), comments are stripped once with a
/// fresh block-comment state, and the results are concatenated as:
///
/// 1. per line, in document order: memory, STL and string issues
///    (blank clean lines are skipped)
/// 2. loop nesting issues, in document order
///
/// The scan never fails and keeps no state between calls.
#[must_use]
pub fn scan(text: &str) -> Vec<Issue> {
    let clean = clean_lines(text.split('\n'));

    let mut issues: Vec<Issue> = clean
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .flat_map(|(i, line)| detect_line(line, i))
        .collect();

    issues.extend(LoopNestingTracker::analyze(&clean));
    issues
}
