// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code point aware string operations. All of them are pure functions over `&str`: no
//! shared state, no I/O, and nothing to lock, so they're safe to call from any thread.
//!
//! Results that are a sub-sequence of the input are borrowed slices of it. When the input
//! is pure ASCII, byte offsets are code point offsets and no decoding happens at all.

// Attach sources.
pub mod code_point_str_ext;
pub mod left_right;
pub mod length;
pub mod lookup;
pub mod pad;
pub mod split;

// Re-export.
pub use code_point_str_ext::*;
pub use left_right::*;
pub use length::*;
pub use lookup::*;
pub use pad::*;
pub use split::*;
