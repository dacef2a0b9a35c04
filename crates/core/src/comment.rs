// crates/core/src/comment.rs
//! # Comment Stripper
//!
//! Turns raw C/C++ source lines into "clean" lines with `//` and `/* */`
//! comment text removed. The only state carried between lines is whether the
//! previous line left a block comment open.
//!
//! ## Supported Syntax
//!
//! - **Line comments**: `//`
//! - **Block comments**: `/* */`, on one line or spanning several
//!
//! String and character literals are not recognised: a `//` or `/*` inside a
//! quoted literal is treated as a comment opener.
//!
//! ## Usage Example
//!
//! ```rust
//! use ambar_core::comment::CommentStripper;
//!
//! let mut stripper = CommentStripper::new();
//! assert_eq!(stripper.strip("int x = 1; // inline"), "int x = 1; ");
//! assert_eq!(stripper.strip("a /* open"), "a ");
//! assert!(stripper.is_in_block_comment());
//! assert_eq!(stripper.strip("still comment"), "");
//! assert_eq!(stripper.strip("*/ b();"), " b();");
//! ```

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// C系コメント除去 (//, /* */) - ネスト非対応
#[derive(Debug, Default, Clone)]
pub struct CommentStripper {
    in_block_comment: bool,
}

impl CommentStripper {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
        }
    }

    /// Whether the last stripped line left a block comment open.
    #[must_use]
    pub const fn is_in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Forget any open block comment. Call before starting a new document.
    pub fn reset(&mut self) {
        self.in_block_comment = false;
    }

    /// Returns the code-only part of `line`, updating the block comment state.
    pub fn strip(&mut self, line: &str) -> String {
        let rest = if self.in_block_comment {
            match line.find(BLOCK_CLOSE) {
                Some(pos) => {
                    self.in_block_comment = false;
                    &line[pos + BLOCK_CLOSE.len()..]
                }
                None => return String::new(),
            }
        } else {
            line
        };

        let mut code = rest.to_string();
        while let Some(block_start) = code.find(BLOCK_OPEN) {
            let body = block_start + BLOCK_OPEN.len();
            if let Some(offset) = code[body..].find(BLOCK_CLOSE) {
                let block_end = body + offset + BLOCK_CLOSE.len();
                code.replace_range(block_start..block_end, "");
            } else {
                code.truncate(block_start);
                self.in_block_comment = true;
                break;
            }
        }

        if let Some(pos) = code.find(LINE_COMMENT) {
            code.truncate(pos);
        }
        code
    }
}

/// Strips every line of a document in order, starting from a fresh state.
///
/// The returned vector has exactly one clean line per input line.
pub fn clean_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .scan(CommentStripper::new(), |stripper, line| {
            Some(stripper.strip(line))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("// comment"), "");
        assert_eq!(p.strip("int x = 1;"), "int x = 1;");
        assert_eq!(p.strip("x=1;// tight"), "x=1;");
    }

    #[test]
    fn test_block_comment_across_lines() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("/* start"), "");
        assert!(p.is_in_block_comment());
        assert_eq!(p.strip("middle new int;"), "");
        assert!(p.is_in_block_comment());
        assert_eq!(p.strip("*/"), "");
        assert!(!p.is_in_block_comment());
        assert_eq!(p.strip("int y = 2;"), "int y = 2;");
    }

    #[test]
    fn test_code_before_and_after_block() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("int x = 1; /* start"), "int x = 1; ");
        assert!(p.is_in_block_comment());
        assert_eq!(p.strip("end */ int y = 2;"), " int y = 2;");
        assert!(!p.is_in_block_comment());
    }

    #[test]
    fn test_inline_blocks_are_excised() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("x/*mid*/y"), "xy");
        assert_eq!(p.strip("/* a */ x /* b */"), " x ");
        assert_eq!(p.strip("/* first *//* second */"), "");
        assert_eq!(p.strip("/**/"), "");
        assert!(!p.is_in_block_comment());
    }

    #[test]
    fn test_block_then_line_comment() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("a(); /* b */ c(); // d"), "a();  c(); ");
        assert!(!p.is_in_block_comment());
    }

    #[test]
    fn test_block_opener_inside_line_comment_still_opens() {
        // The block opener search runs before the line comment cut.
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("// see /* here"), "");
        assert!(p.is_in_block_comment());
        assert_eq!(p.strip("new int;"), "");
    }

    #[test]
    fn test_overlapping_patterns() {
        let mut p = CommentStripper::new();
        // /*/ is not a complete block comment
        assert_eq!(p.strip("/*/"), "");
        assert!(p.is_in_block_comment());

        p.reset();
        // the opener search sees "/*" at offset 1 and finds no closer after it
        assert_eq!(p.strip("//*/"), "/");
        assert!(p.is_in_block_comment());

        p.reset();
        // */ without an opener is code
        assert_eq!(p.strip("x = a */ b;"), "x = a */ b;");
    }

    #[test]
    fn test_close_and_reopen_on_same_line() {
        let mut p = CommentStripper::new();
        p.strip("/* one");
        assert_eq!(p.strip("*/ a(); /* two"), " a(); ");
        assert!(p.is_in_block_comment());
    }

    #[test]
    fn test_string_literals_are_not_recognised() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip(r#"s = "http://example.com";"#), r#"s = "http:"#);
        assert_eq!(p.strip(r#"s = "/* not */";"#), r#"s = "";"#);
    }

    #[test]
    fn test_unicode_in_comments_and_code() {
        let mut p = CommentStripper::new();
        assert_eq!(p.strip("// コメント"), "");
        assert_eq!(p.strip("/* 日本語 */ int 变量 = 1;"), " int 变量 = 1;");
        assert_eq!(p.strip("let 変数 = 1; // 🚀"), "let 変数 = 1; ");
    }

    #[test]
    fn test_reset() {
        let mut p = CommentStripper::new();
        p.strip("/* open");
        assert!(p.is_in_block_comment());
        p.reset();
        assert!(!p.is_in_block_comment());
        assert_eq!(p.strip("code();"), "code();");
    }

    #[test]
    fn test_clean_lines_threads_state() {
        let lines = ["a(); /*", "hidden();", "*/ b();", "c(); // d"];
        let clean = clean_lines(lines);
        assert_eq!(clean, vec!["a(); ", "", " b();", "c(); "]);
    }

    #[test]
    fn test_clean_lines_starts_fresh_each_time() {
        let first = clean_lines(["/* never closed"]);
        assert_eq!(first, vec![""]);
        let second = clean_lines(["visible();"]);
        assert_eq!(second, vec!["visible();"]);
    }

    #[test]
    fn test_pathological_cases() {
        let mut p = CommentStripper::new();
        let slashes = "/".repeat(1000);
        assert_eq!(p.strip(&slashes), "");
        let alt = "/*/".repeat(100);
        p.reset();
        p.strip(&alt);
    }
}
