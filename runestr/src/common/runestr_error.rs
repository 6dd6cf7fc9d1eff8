// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the only fallible surface of this crate: converting a signed integer into
//! a [`crate::CodePointCount`] or [`crate::CodePointIndex`]. The string operations
//! themselves are total and never return an error.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias for results whose error is a [`RuneStrError`].
pub type RuneStrResult<T> = core::result::Result<T, RuneStrError>;

/// Errors from converting signed integers into code point units.
///
/// | Variant             | Cause                                               |
/// | :------------------ | :-------------------------------------------------- |
/// | [`NegativeCount`]   | A count (`n`, `width`, `max`) was less than zero    |
/// | [`NegativeIndex`]   | A position was less than zero                       |
/// | [`OutOfRange`]      | A positive value doesn't fit in a [`usize`]         |
///
/// [`NegativeCount`]: Self::NegativeCount
/// [`NegativeIndex`]: Self::NegativeIndex
/// [`OutOfRange`]: Self::OutOfRange
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RuneStrError {
    #[error("code point count can't be negative, got {value}")]
    #[diagnostic(
        code(runestr::units::negative_count),
        help("Counts are clamped to the text length; pass 0 to get an empty result.")
    )]
    NegativeCount { value: i64 },

    #[error("code point index can't be negative, got {value}")]
    #[diagnostic(
        code(runestr::units::negative_index),
        help(
            "Positions are zero based. Use `rune_at_signed_position()` to get the \
             default value back for negative positions instead."
        )
    )]
    NegativeIndex { value: i64 },

    #[error("value {value} doesn't fit in a usize on this target")]
    #[diagnostic(code(runestr::units::out_of_range))]
    OutOfRange { value: i64 },
}
