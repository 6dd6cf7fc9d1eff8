// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro. Only available in tests (it
/// requires `pretty_assertions`, which is a dev dependency).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Generates [`TryFrom`] impls from signed integer types into a unit newtype that wraps
/// a [`usize`]. Negative values are rejected with the given [`crate::RuneStrError`]
/// variant, and values that are positive but don't fit in a [`usize`] are rejected with
/// [`crate::RuneStrError::OutOfRange`].
///
/// # Example
///
/// ```ignore
/// create_signed_try_from_impls!(CodePointCount, NegativeCount, [i32, i64, isize]);
/// ```
#[macro_export]
macro_rules! create_signed_try_from_impls {
    ($unit:ident, $negative_variant:ident, [$($signed:ty),* $(,)?]) => {
        $(
            impl TryFrom<$signed> for $unit {
                type Error = $crate::RuneStrError;

                fn try_from(value: $signed) -> $crate::RuneStrResult<Self> {
                    match usize::try_from(value) {
                        Ok(it) => Ok(Self(it)),
                        Err(_) => {
                            let value = i64::try_from(value).unwrap_or(i64::MAX);
                            if value < 0 {
                                Err($crate::RuneStrError::$negative_variant { value })
                            } else {
                                Err($crate::RuneStrError::OutOfRange { value })
                            }
                        }
                    }
                }
            }
        )*
    };
}
