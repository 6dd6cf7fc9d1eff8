// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CodePointIndex;

/// Returns the code point at zero based position `pos` in `text`, or `default` if `pos`
/// is past the end. Out of bounds is an expected input, not an error.
///
/// ```
/// use runestr::rune_at_position;
///
/// assert_eq!(rune_at_position("test 世界 perdîtes", 6, 'x'), '界');
/// assert_eq!(rune_at_position("test 世界 perdîtes", 20, 'x'), 'x');
/// ```
#[must_use]
pub fn rune_at_position(
    text: &str,
    arg_pos: impl Into<CodePointIndex>,
    default: char,
) -> char {
    let pos = arg_pos.into().as_usize();

    // ASCII fast path.
    if text.is_ascii() {
        return text.as_bytes().get(pos).map_or(default, |&byte| char::from(byte));
    }

    text.chars().nth(pos).unwrap_or(default)
}

/// Same as [`rune_at_position()`], for callers holding a signed position. A negative
/// `pos` is out of bounds, so `default` is returned.
///
/// ```
/// use runestr::rune_at_signed_position;
///
/// assert_eq!(rune_at_signed_position("世界", 1, 'x'), '界');
/// assert_eq!(rune_at_signed_position("世界", -1, 'x'), 'x');
/// ```
#[must_use]
pub fn rune_at_signed_position(text: &str, pos: i64, default: char) -> char {
    match CodePointIndex::try_from(pos) {
        Ok(index) => rune_at_position(text, index, default),
        Err(error) => {
            tracing::trace!(
                message = "rune_at_signed_position: out of bounds",
                %error
            );
            default
        }
    }
}
