// crates/core/src/rules/stl.rs
//! Container choices and growth patterns from the standard library.

use super::{PatternRule, Span};
use crate::issue::{Category, Severity};

pub static RULES: [PatternRule; 3] = [
    PatternRule::new(
        "list-usage",
        r"std::list<.*>",
        "std::list",
        Span::Matched,
        Severity::Medium,
        Category::StlEfficiency,
        5,
        "std::list can be inefficient for sequential access",
        "Use std::vector unless you need insertion/removal in the middle",
    ),
    PatternRule::new(
        "map-without-unordered",
        r"std::map<.*>",
        "std::map",
        Span::Matched,
        Severity::Low,
        Category::StlEfficiency,
        4,
        "std::map has O(log n) lookup",
        "Consider std::unordered_map (O(1)) if ordering is not required",
    )
    .unless("unordered_map"),
    PatternRule::new(
        "push-back",
        r"\.push_back\s*\(",
        ".push_back",
        Span::Fixed(10),
        Severity::Low,
        Category::StlEfficiency,
        3,
        "push_back may trigger reallocations",
        "Call reserve() when the final size is roughly known",
    ),
];
