// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod runestr_error;

// Re-export.
pub use runestr_error::*;
