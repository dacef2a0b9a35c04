// crates/core/src/rules/memory.rs
//! Manual memory management: raw `new`, manual `delete`, C-style `malloc`.

use super::{PatternRule, Span};
use crate::issue::{Category, Severity};

pub static RULES: [PatternRule; 3] = [
    PatternRule::new(
        "raw-new",
        r"\bnew\s+\w+",
        "new",
        Span::Matched,
        Severity::High,
        Category::MemoryManagement,
        8,
        "Raw pointer allocation with \"new\"",
        "Use smart pointers (std::unique_ptr, std::shared_ptr)",
    ),
    PatternRule::new(
        "raw-delete",
        r"\bdelete\s+\w+",
        "delete",
        Span::Matched,
        Severity::High,
        Category::MemoryManagement,
        8,
        "Manual delete",
        "Use RAII and smart pointers for automatic lifetime management",
    ),
    PatternRule::new(
        "malloc",
        r"\bmalloc\s*\(",
        "malloc",
        Span::Fixed(6),
        Severity::High,
        Category::MemoryManagement,
        9,
        "C-style allocation with malloc",
        "Use std::vector or smart pointers in C++",
    ),
];
