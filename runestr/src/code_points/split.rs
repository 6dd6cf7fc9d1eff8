// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CharOffsetVec, CodePointCount, SPACE_CHAR, char_offsets};

/// Splits `text` into a head of at most `max` code points and a tail, breaking on the
/// space nearest to (at or before) position `max`. Use it to wrap a line.
///
/// 1. `text` is trimmed of leading and trailing whitespace first. All positions below
///    are into the trimmed text.
/// 2. If the trimmed text is `max` code points or shorter, it's returned whole as the
///    head, and the tail is empty.
/// 3. Otherwise, scanning backwards from position `max` down to `1`, the first position
///    holding a [`SPACE_CHAR`] whose preceding code point is *not* a space is the cut.
///    The head is everything before the cut; the tail is everything after it. In a run
///    of spaces this picks the space that ends the preceding word.
/// 4. If there's no such space, the text is hard cut at `max` code points, which may
///    split a word.
///
/// The tail is always trimmed. The head never needs to be, since it ends at a word or
/// at the hard cut. Both are borrowed slices of `text`.
///
/// ```
/// use runestr::split_on_nearest_space;
///
/// let text = "Tout peut sortir d'un mot qu'en passant vous perdîtes.";
/// assert_eq!(
///     split_on_nearest_space(text, 9),
///     ("Tout peut", "sortir d'un mot qu'en passant vous perdîtes.")
/// );
/// assert_eq!(
///     split_on_nearest_space("Toutpeutsortird'unmot", 10),
///     ("Toutpeutso", "rtird'unmot")
/// );
/// ```
#[must_use]
pub fn split_on_nearest_space(
    text: &str,
    arg_max: impl Into<CodePointCount>,
) -> (&str, &str) {
    let max = arg_max.into().as_usize();
    let trimmed = text.trim();

    // ASCII fast path for the "no split needed" check.
    if trimmed.is_ascii() && trimmed.len() <= max {
        return (trimmed, "");
    }

    let chars: CharOffsetVec = char_offsets(trimmed);
    if chars.len() <= max {
        return (trimmed, "");
    }

    // `chars.len() > max` so `max` is a valid position.
    match split_helper::find_word_boundary(&chars, max) {
        Some(space_byte_offset) => {
            let first = &trimmed[..space_byte_offset];
            let second = trimmed[space_byte_offset + SPACE_CHAR.len_utf8()..].trim();
            (first, second)
        }
        None => {
            tracing::trace!(
                message = "split_on_nearest_space: no word boundary, hard cut",
                max
            );
            let (cut_byte_offset, _) = chars[max];
            let first = &trimmed[..cut_byte_offset];
            let second = trimmed[cut_byte_offset..].trim();
            (first, second)
        }
    }
}

mod split_helper {
    use super::{CharOffsetVec, SPACE_CHAR};

    /// Scans backwards from `max` down to `1` and returns the byte offset of the first
    /// space that directly follows a non space. `max` must be less than `chars.len()`.
    pub fn find_word_boundary(chars: &CharOffsetVec, max: usize) -> Option<usize> {
        (1..=max).rev().find_map(|index| {
            let (byte_offset, it) = chars[index];
            let (_, prev) = chars[index - 1];
            (it == SPACE_CHAR && prev != SPACE_CHAR).then_some(byte_offset)
        })
    }
}
