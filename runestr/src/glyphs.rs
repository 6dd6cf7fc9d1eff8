// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Characters that the code point helpers treat specially.

/// The word separator that [`crate::split_on_nearest_space()`] breaks on. Only this
/// exact code point counts as a word boundary; other whitespace (tabs, no-break space,
/// etc) is only removed when trimming.
pub const SPACE_CHAR: char = ' ';

/// [`SPACE_CHAR`] as a string slice.
pub const SPACE_GLYPH: &str = " ";
