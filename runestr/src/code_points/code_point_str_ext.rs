// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{CodePointCount, CodePointIndex, left, len_code_points, pad_right, right,
            rune_at_position, split_on_nearest_space};

/// Method flavor of the free functions in [`crate::code_points`]. Implemented for
/// [`str`], so it is also available on [`String`] (via deref).
///
/// ```
/// use runestr::CodePointStrExt as _;
///
/// let text = String::from("test 世界");
/// assert_eq!(text.code_point_len(), 7);
/// assert_eq!(text.right_code_points(2), "世界");
/// assert_eq!(text.code_point_at(5, '?'), '世');
/// ```
pub trait CodePointStrExt {
    /// See [`len_code_points()`].
    fn code_point_len(&self) -> CodePointCount;

    /// See [`pad_right()`].
    fn pad_right_with(
        &self,
        fill_pattern: &str,
        width: impl Into<CodePointCount>,
    ) -> Cow<'_, str>;

    /// See [`left()`].
    fn left_code_points(&self, n: impl Into<CodePointCount>) -> &str;

    /// See [`right()`].
    fn right_code_points(&self, n: impl Into<CodePointCount>) -> &str;

    /// See [`split_on_nearest_space()`].
    fn split_on_nearest_space(&self, max: impl Into<CodePointCount>) -> (&str, &str);

    /// See [`rune_at_position()`].
    fn code_point_at(&self, pos: impl Into<CodePointIndex>, default: char) -> char;
}

impl CodePointStrExt for str {
    fn code_point_len(&self) -> CodePointCount { len_code_points(self) }

    fn pad_right_with(
        &self,
        fill_pattern: &str,
        width: impl Into<CodePointCount>,
    ) -> Cow<'_, str> {
        pad_right(self, fill_pattern, width)
    }

    fn left_code_points(&self, n: impl Into<CodePointCount>) -> &str { left(self, n) }

    fn right_code_points(&self, n: impl Into<CodePointCount>) -> &str { right(self, n) }

    fn split_on_nearest_space(&self, max: impl Into<CodePointCount>) -> (&str, &str) {
        split_on_nearest_space(self, max)
    }

    fn code_point_at(&self, pos: impl Into<CodePointIndex>, default: char) -> char {
        rune_at_position(self, pos, default)
    }
}
