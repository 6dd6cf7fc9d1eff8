// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these tuning parameters. Smaller static allocation sizes
//! are better than larger ones: each `(usize, char)` pair is 16 bytes on 64 bit targets,
//! so the inline buffer below takes 512 bytes of stack before it spills to the heap.

use smallvec::SmallVec;

/// Number of decoded code points kept inline (on the stack) before spilling to the heap.
/// This covers a typical single line of text.
pub const DEFAULT_CHAR_OFFSET_STORAGE_SIZE: usize = 32;

/// A decoded view of a `&str`: each code point paired with the byte offset where it
/// starts in the source text. Built once per call by [`char_offsets()`] so that code
/// point positions can be turned back into byte offsets for zero copy slicing.
pub type CharOffsetVec = SmallVec<[(usize, char); DEFAULT_CHAR_OFFSET_STORAGE_SIZE]>;

/// Decode `text` into a [`CharOffsetVec`].
#[must_use]
pub fn char_offsets(text: &str) -> CharOffsetVec { text.char_indices().collect() }
