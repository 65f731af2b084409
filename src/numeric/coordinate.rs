// ============================================================================
// Coordinate Conversion
// Turns caller-supplied numbers into exact decimals
// ============================================================================

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A value that can become an exact decimal coordinate.
///
/// Integers always convert. Floats convert when finite and within the
/// decimal range. Strings convert when they parse as a decimal literal.
/// Returns `None` for anything else.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Option<Decimal>;
}

macro_rules! impl_integer_coordinate {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoCoordinate for $t {
                #[inline]
                fn into_coordinate(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }
            }

            impl IntoCoordinate for &$t {
                #[inline]
                fn into_coordinate(self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_integer_coordinate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoCoordinate for f64 {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        // from_f64 rejects NaN and infinities
        Decimal::from_f64(self)
    }
}

impl IntoCoordinate for &f64 {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        Decimal::from_f64(*self)
    }
}

impl IntoCoordinate for f32 {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        Decimal::from_f32(self)
    }
}

impl IntoCoordinate for &f32 {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        Decimal::from_f32(*self)
    }
}

impl IntoCoordinate for Decimal {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        Some(self)
    }
}

impl IntoCoordinate for &Decimal {
    #[inline]
    fn into_coordinate(self) -> Option<Decimal> {
        Some(*self)
    }
}

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Option<Decimal> {
        Decimal::from_str(self.trim()).ok()
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Option<Decimal> {
        self.as_str().into_coordinate()
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Option<Decimal> {
        self.as_str().into_coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(42i32.into_coordinate(), Some(Decimal::from(42)));
        assert_eq!((-7i64).into_coordinate(), Some(Decimal::from(-7)));
        assert_eq!((&3u8).into_coordinate(), Some(Decimal::from(3)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(2.5f64.into_coordinate(), Some(Decimal::new(25, 1)));
        assert_eq!(f64::NAN.into_coordinate(), None);
        assert_eq!(f64::INFINITY.into_coordinate(), None);
        assert_eq!(f32::NEG_INFINITY.into_coordinate(), None);
    }

    #[test]
    fn test_strings() {
        assert_eq!("123.456".into_coordinate(), Some(Decimal::new(123456, 3)));
        assert_eq!(" -0.5 ".into_coordinate(), Some(Decimal::new(-5, 1)));
        assert_eq!("not_a_number".into_coordinate(), None);
        assert_eq!(String::from("1e").into_coordinate(), None);
    }
}
