// crates/core/src/rules/strings.rs
//! `std::string` usage: `+=` concatenation, by-value parameters, `compare()`.

use super::{PatternRule, Span};
use crate::issue::{Category, Severity};

pub static RULES: [PatternRule; 3] = [
    PatternRule::new(
        "string-concat-assign",
        r#"\w+\s*\+=\s*["'].*["']"#,
        "+=",
        Span::Fixed(2),
        Severity::Low,
        Category::StringOperations,
        4,
        "String concatenation with +=",
        "Inside loops, prefer std::stringstream or reserve() up front",
    ),
    PatternRule::new(
        "string-by-value-param",
        r"\bstd::string\s+\w+\s*\)",
        "std::string",
        Span::Fixed(11),
        Severity::Low,
        Category::StringOperations,
        3,
        "std::string parameter passed by value",
        "Take const std::string& or std::string_view instead",
    ),
    PatternRule::new(
        "string-compare-call",
        r"\w+\.compare\s*\(",
        ".compare",
        Span::Fixed(8),
        Severity::Low,
        Category::StringOperations,
        2,
        "compare() used where == or != would do",
        "Comparison operators are clearer and at least as fast",
    ),
];
