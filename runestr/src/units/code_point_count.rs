// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref};

use crate::{CodePointIndex, cp_index, create_signed_try_from_impls};

/// Number of code points, i.e., the length of some text (or the requested length of a
/// result) measured in [`char`]s. This is one more than the last [`CodePointIndex`] it
/// spans.
///
/// You can use [`cp_count()`] to create a new instance. Signed integers convert via
/// [`TryFrom`], which rejects negative values with
/// [`crate::RuneStrError::NegativeCount`].
///
/// # Examples
///
/// ```
/// use runestr::{CodePointCount, cp_count};
/// let count = cp_count(5);
/// assert_eq!(count, CodePointCount::from(5usize));
/// assert!(CodePointCount::try_from(-5i32).is_err());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointCount(pub usize);

pub fn cp_count(arg_cp_count: impl Into<CodePointCount>) -> CodePointCount {
    arg_cp_count.into()
}

mod impl_core {
    use super::{CodePointCount, CodePointIndex, cp_index};

    impl CodePointCount {
        pub fn new(arg_cp_count: impl Into<CodePointCount>) -> Self { arg_cp_count.into() }

        /// Converts the count to the index of its last code point, by subtracting 1.
        /// An empty count saturates to index 0.
        #[must_use]
        pub fn convert_to_index(&self) -> CodePointIndex {
            cp_index(self.0.saturating_sub(1))
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }
    }
}

mod impl_from_numeric {
    use super::{CodePointCount, create_signed_try_from_impls};

    impl From<usize> for CodePointCount {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<CodePointCount> for usize {
        fn from(it: CodePointCount) -> Self { it.0 }
    }

    create_signed_try_from_impls!(CodePointCount, NegativeCount, [i32, i64, isize]);
}

mod impl_deref_and_display {
    use super::{CodePointCount, Deref, Display, Formatter};

    impl Deref for CodePointCount {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl Display for CodePointCount {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl PartialEq<usize> for CodePointCount {
        fn eq(&self, other: &usize) -> bool { self.0 == *other }
    }
}
