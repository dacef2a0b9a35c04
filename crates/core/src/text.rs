// crates/core/src/text.rs
//! Byte offset to character offset conversion for reported positions.

/// Number of characters in `line` before byte offset `byte_idx`.
///
/// `byte_idx` must lie on a char boundary; offsets past the end clamp to the
/// line's character count.
#[must_use]
pub fn char_column(line: &str, byte_idx: usize) -> usize {
    line.get(..byte_idx)
        .map_or_else(|| line.chars().count(), |prefix| prefix.chars().count())
}

/// Character length of `s`.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
