// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref};

use crate::{CodePointCount, cp_count, create_signed_try_from_impls};

/// Zero based position of a code point inside a `&str`. This is not a byte offset.
///
/// You can use [`cp_index()`] to create a new instance. Signed integers convert via
/// [`TryFrom`], which rejects negative values with
/// [`crate::RuneStrError::NegativeIndex`].
///
/// # Examples
///
/// ```
/// use runestr::{CodePointIndex, cp_index};
/// let index = cp_index(5);
/// assert_eq!(index, CodePointIndex::from(5usize));
/// assert!(CodePointIndex::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointIndex(pub usize);

pub fn cp_index(arg_cp_index: impl Into<CodePointIndex>) -> CodePointIndex {
    arg_cp_index.into()
}

mod impl_core {
    use super::{CodePointCount, CodePointIndex, cp_count};

    impl CodePointIndex {
        pub fn new(arg_cp_index: impl Into<CodePointIndex>) -> Self { arg_cp_index.into() }

        /// Converts the index to a count, by adding 1. The count is the number of code
        /// points needed to include this position.
        #[must_use]
        pub fn convert_to_count(&self) -> CodePointCount { cp_count(self.0 + 1) }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }
}

mod impl_from_numeric {
    use super::{CodePointIndex, create_signed_try_from_impls};

    impl From<usize> for CodePointIndex {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<CodePointIndex> for usize {
        fn from(it: CodePointIndex) -> Self { it.0 }
    }

    create_signed_try_from_impls!(CodePointIndex, NegativeIndex, [i32, i64, isize]);
}

mod impl_deref_and_display {
    use super::{CodePointIndex, Deref, Display, Formatter};

    impl Deref for CodePointIndex {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl Display for CodePointIndex {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl PartialEq<usize> for CodePointIndex {
        fn eq(&self, other: &usize) -> bool { self.0 == *other }
    }
}
