// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CodePointCount, cp_count};

/// Returns the number of Unicode code points in `text`. This is the length that every
/// other function in this crate reasons about, not [`str::len()`] (which is in bytes).
///
/// ```
/// use runestr::len_code_points;
///
/// assert_eq!(len_code_points("abcde12345"), 10);
/// assert_eq!(len_code_points("世界"), 2);
/// assert_eq!("世界".len(), 6);
/// ```
#[must_use]
pub fn len_code_points(text: &str) -> CodePointCount {
    // ASCII fast path.
    if text.is_ascii() {
        return cp_count(text.len());
    }
    cp_count(text.chars().count())
}
