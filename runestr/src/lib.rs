// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # runestr
//!
//! String helpers that count, slice, pad, and split text by Unicode code point (Rust
//! [`char`]) rather than by `UTF-8` byte.
//!
//! A Rust [`String`] is a [`Vec`] of [`u8`] holding `UTF-8`, which is a variable width
//! encoding. The character `H` takes 1 byte, `î` takes 2, and `世` takes 3. So
//! `"世界".len()` is `6`, and `&"世界"[..2]` panics because byte `2` isn't on a `char`
//! boundary. Every function in this crate counts code points instead:
//!
//! | Text      | Bytes | Code points |
//! | --------- | ----- | ----------- |
//! | `"test"`  | 4     | 4           |
//! | `"¨"`     | 2     | 1           |
//! | `"世界"`  | 6     | 2           |
//!
//! Note that a code point isn't a user perceived character. Grapheme clusters (combining
//! marks, emoji ZWJ sequences, etc) are made of many code points and are counted as many.
//!
//! # Operations
//!
//! | Function                   | Result                                                      |
//! | -------------------------- | ----------------------------------------------------------- |
//! | [`len_code_points()`]      | Number of code points in the text.                          |
//! | [`pad_right()`]            | Text padded on the right with a repeating fill pattern.     |
//! | [`left()`]                 | The first `n` code points.                                  |
//! | [`right()`]                | The last `n` code points.                                   |
//! | [`split_on_nearest_space()`] | Head (at most `max` code points) and tail, split on a space. |
//! | [`rune_at_position()`]     | The code point at a position, or a default.                 |
//!
//! The same operations are available as methods on [`str`] via [`CodePointStrExt`].
//!
//! ```
//! use runestr::{CodePointStrExt, cp_count, left, pad_right, split_on_nearest_space};
//!
//! assert_eq!("世界".code_point_len(), cp_count(2));
//! assert_eq!(pad_right("test", "_-¨", 12), "test_-¨_-¨_-");
//! assert_eq!(left("1¨2", 2), "1¨");
//! assert_eq!(
//!     split_on_nearest_space("troisième ligne", 10),
//!     ("troisième", "ligne")
//! );
//! ```
//!
//! # Negative counts and positions
//!
//! Counts and positions are [`CodePointCount`] and [`CodePointIndex`], which wrap
//! [`usize`], so a negative value can't be passed in. Converting a signed integer into
//! one of them goes through [`TryFrom`], which returns a [`RuneStrError`] for negative
//! values. [`rune_at_signed_position()`] treats a negative position as out of bounds and
//! returns the default.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod code_points;
pub mod common;
pub mod decl_macros;
pub mod glyphs;
pub mod stack_alloc_types;
pub mod units;

// Re-export.
pub use code_points::*;
pub use common::*;
pub use glyphs::*;
pub use stack_alloc_types::*;
pub use units::*;
