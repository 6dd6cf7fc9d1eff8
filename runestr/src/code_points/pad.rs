// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{CodePointCount, left, len_code_points};

/// Pads `text` on the right with repetitions of `fill_pattern` until the result is
/// exactly `width` code points long.
///
/// - If `fill_pattern` is empty, or `text` is already `width` or more code points long,
///   `text` is returned unchanged as [`Cow::Borrowed`].
/// - Otherwise `fill_pattern` is appended as many whole times as fits, and the remaining
///   deficit (which is always smaller than the fill pattern) is filled with the leading
///   code points of `fill_pattern`. The result never overshoots `width`.
///
/// ```
/// use runestr::pad_right;
///
/// assert_eq!(pad_right("test", " ", 10), "test      ");
/// assert_eq!(pad_right("test", "..", 9), "test.....");
/// assert_eq!(pad_right("test", "_-¨", 12), "test_-¨_-¨_-");
/// assert_eq!(pad_right("test", "", 10), "test");
/// ```
#[must_use]
pub fn pad_right<'a>(
    text: &'a str,
    fill_pattern: &str,
    arg_width: impl Into<CodePointCount>,
) -> Cow<'a, str> {
    let width = arg_width.into();

    let fill_pattern_len = len_code_points(fill_pattern);
    if fill_pattern_len.is_zero() {
        tracing::trace!(
            message = "pad_right: empty fill pattern, text returned unchanged",
            width = width.as_usize()
        );
        return Cow::Borrowed(text);
    }

    let text_len = len_code_points(text);
    if text_len >= width {
        return Cow::Borrowed(text);
    }

    let need = width.as_usize() - text_len.as_usize();
    let full_repeats = need / fill_pattern_len.as_usize();
    let partial_fill = left(fill_pattern, need % fill_pattern_len.as_usize());

    let mut acc = String::with_capacity(
        text.len() + fill_pattern.len() * full_repeats + partial_fill.len(),
    );
    acc.push_str(text);
    for _ in 0..full_repeats {
        acc.push_str(fill_pattern);
    }
    acc.push_str(partial_fill);

    Cow::Owned(acc)
}
