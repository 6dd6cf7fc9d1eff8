// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CodePointCount;

/// Returns the first `n` code points of `text`, or all of `text` if it has `n` or fewer
/// code points. The result is a borrowed slice of `text`.
///
/// ```
/// use runestr::left;
///
/// assert_eq!(left("test Left", 5), "test ");
/// assert_eq!(left("1¨2", 2), "1¨");
/// assert_eq!(left("test", 9), "test");
/// assert_eq!(left("test", 0), "");
/// ```
#[must_use]
pub fn left(text: &str, arg_n: impl Into<CodePointCount>) -> &str {
    let n = arg_n.into().as_usize();

    // ASCII fast path.
    if text.is_ascii() {
        return &text[..n.min(text.len())];
    }

    // The byte offset of code point `n` is where the head ends.
    match text.char_indices().nth(n) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}

/// Returns the last `n` code points of `text`, or all of `text` if it has `n` or fewer
/// code points. The result is a borrowed slice of `text`.
///
/// ```
/// use runestr::right;
///
/// assert_eq!(right("test Right", 5), "Right");
/// assert_eq!(right("1¨2", 2), "¨2");
/// assert_eq!(right("", 9), "");
/// assert_eq!(right("test", 0), "");
/// ```
#[must_use]
pub fn right(text: &str, arg_n: impl Into<CodePointCount>) -> &str {
    let n = arg_n.into().as_usize();

    if n == 0 {
        return &text[text.len()..];
    }

    // ASCII fast path.
    if text.is_ascii() {
        return &text[text.len().saturating_sub(n)..];
    }

    // Walking backwards, the `n`th code point from the end is where the tail starts.
    match text.char_indices().rev().nth(n - 1) {
        Some((byte_offset, _)) => &text[byte_offset..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, len_code_points};

    #[test_case("test Left", 9 => "test Left")]
    #[test_case("test", 9 => "test")]
    #[test_case("test Left", 5 => "test ")]
    #[test_case("test Left", 4 => "test")]
    #[test_case("test Left", 1 => "t")]
    #[test_case("test Left", 0 => "")]
    #[test_case("", 7 => "")]
    #[test_case("1¨2", 5 => "1¨2")]
    #[test_case("1¨2", 3 => "1¨2")]
    #[test_case("1¨2", 2 => "1¨")]
    #[test_case("1¨2", 1 => "1")]
    #[test_case("1¨2", 0 => "")]
    fn test_left(text: &str, n: usize) -> &str { left(text, n) }

    #[test_case("test Right", 9 => "est Right")]
    #[test_case("test Right", 5 => "Right")]
    #[test_case("test Right", 1 => "t")]
    #[test_case("test Right", 0 => "")]
    #[test_case("", 9 => "")]
    #[test_case("1¨2", 5 => "1¨2")]
    #[test_case("1¨2", 3 => "1¨2")]
    #[test_case("1¨2", 2 => "¨2")]
    #[test_case("1¨2", 1 => "2")]
    #[test_case("世界", 1 => "界" ; "last ideograph")]
    fn test_right(text: &str, n: usize) -> &str { right(text, n) }

    #[test]
    fn test_result_is_borrowed_from_input() {
        let text = "test 世界 perdîtes";
        let head = left(text, 7);
        let tail = right(text, 8);
        assert_eq2!(head, "test 世界");
        assert_eq2!(tail, "perdîtes");
        // Same allocation, no copies.
        assert_eq2!(head.as_ptr(), text.as_ptr());
        assert_eq2!(tail.as_ptr(), text[text.len() - tail.len()..].as_ptr());
    }

    #[test]
    fn test_length_is_min_of_n_and_text_length() {
        for text in ["", "abc", "1¨2", "test 世界 perdîtes"] {
            let text_len = len_code_points(text).as_usize();
            for n in 0..=text_len + 2 {
                assert_eq2!(len_code_points(left(text, n)), n.min(text_len));
                assert_eq2!(len_code_points(right(text, n)), n.min(text_len));
            }
        }
    }

    #[test]
    fn test_left_and_right_partition_the_text() {
        let text = "test 世界 perdîtes";
        let text_len = len_code_points(text).as_usize();
        for n in 0..=text_len {
            let joined = format!("{}{}", left(text, n), right(text, text_len - n));
            assert_eq2!(joined, text);
        }
    }
}
