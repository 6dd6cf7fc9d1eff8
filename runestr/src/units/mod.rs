// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code point units. A [`CodePointIndex`] is a zero based position and a
//! [`CodePointCount`] is a number of code points (a length, a width, or `n`). Keeping them
//! apart mirrors the `index = count - 1` relationship, and neither can hold a negative
//! value.

// Attach sources.
pub mod code_point_count;
pub mod code_point_index;

// Re-export.
pub use code_point_count::*;
pub use code_point_index::*;
