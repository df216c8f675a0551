//! Conversion from stored strings into typed values.

use std::{fmt, num::ParseFloatError, num::ParseIntError};

use crate::errors::ValueError;

/// Strings accepted as `true` by [`bool`]'s conversion. Matching is exact.
pub const TRUTHY: [&str; 5] = ["True", "true", "1", "yes", "Yes"];

/// A type that a stored property string can be converted into.
///
/// When a present value fails to convert, lookups fall back to
/// [`PropertyValue::zero`], not to the caller's default.
pub trait PropertyValue: Sized {
    type Err: fmt::Display;

    fn parse_property(raw: &str) -> Result<Self, Self::Err>;

    fn zero() -> Self;
}

macro_rules! signed_property {
    ($($t:ty),*) => {$(
        impl PropertyValue for $t {
            type Err = ParseIntError;

            fn parse_property(raw: &str) -> Result<Self, Self::Err> {
                raw.parse::<$t>()
            }

            fn zero() -> Self { 0 }
        }
    )*};
}

// Unsigned values take digits only; `str::parse` would accept a leading `+`.
macro_rules! unsigned_property {
    ($($t:ty),*) => {$(
        impl PropertyValue for $t {
            type Err = ValueError;

            fn parse_property(raw: &str) -> Result<Self, Self::Err> {
                if raw.starts_with('+') {
                    return Err(ValueError::UnsignedSign);
                }
                Ok(raw.parse::<$t>()?)
            }

            fn zero() -> Self { 0 }
        }
    )*};
}

macro_rules! float_property {
    ($($t:ty),*) => {$(
        impl PropertyValue for $t {
            type Err = ParseFloatError;

            fn parse_property(raw: &str) -> Result<Self, Self::Err> {
                raw.parse::<$t>()
            }

            fn zero() -> Self { 0.0 }
        }
    )*};
}

signed_property!(i8, i16, i32, i64);
unsigned_property!(u8, u16, u32, u64);
float_property!(f32, f64);

impl PropertyValue for bool {
    type Err = std::convert::Infallible;

    fn parse_property(raw: &str) -> Result<Self, Self::Err> {
        Ok(TRUTHY.contains(&raw))
    }

    fn zero() -> Self { false }
}

impl PropertyValue for String {
    type Err = std::convert::Infallible;

    fn parse_property(raw: &str) -> Result<Self, Self::Err> {
        Ok(raw.to_string())
    }

    fn zero() -> Self { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_respect_their_width() {
        assert_eq!(u8::parse_property("255").ok(), Some(255));
        assert!(u8::parse_property("256").is_err());
        assert_eq!(i8::parse_property("-128").ok(), Some(-128));
        assert!(i8::parse_property("128").is_err());
        assert!(u32::parse_property("-1").is_err());
        assert_eq!(i64::parse_property("-9223372036854775808").ok(), Some(i64::MIN));
    }

    #[test]
    fn integers_are_base_ten_only() {
        assert!(u64::parse_property("0x10").is_err());
        assert!(i32::parse_property("1_000").is_err());
        assert!(u16::parse_property("").is_err());
        assert!(u16::parse_property("12.5").is_err());
    }

    #[test]
    fn sign_prefix_only_for_signed_integers() {
        assert!(matches!(u64::parse_property("+5"), Err(ValueError::UnsignedSign)));
        assert!(matches!(u8::parse_property("+0"), Err(ValueError::UnsignedSign)));
        assert_eq!(i64::parse_property("+5").ok(), Some(5));
        assert_eq!(i8::parse_property("-5").ok(), Some(-5));
    }

    #[test]
    fn hex_floats_are_rejected() {
        assert!(f64::parse_property("0x1p4").is_err());
    }

    #[test]
    fn floats_parse() {
        assert_eq!(f64::parse_property("2.5").ok(), Some(2.5));
        assert_eq!(f32::parse_property("-1e3").ok(), Some(-1000.0));
        assert!(f64::parse_property("abc").is_err());
    }

    #[test]
    fn bool_matches_truthy_set_exactly() {
        for s in TRUTHY {
            assert!(bool::parse_property(s).unwrap(), "{s} should be true");
        }
        for s in ["TRUE", "false", "0", "no", "YES", "on", ""] {
            assert!(!bool::parse_property(s).unwrap(), "{s} should be false");
        }
    }
}
