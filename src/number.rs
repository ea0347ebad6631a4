//! Numeric conveniences: safe divisors, cents, magnitude and factor flooring

use crate::error::{Result, SugarError};

/// Extension trait turning an optional number into a denominator that is never zero.
pub trait DivisorExt<T> {
    /// The value itself, or `1` when it is absent or zero.
    fn divisor(self) -> T;
}

/// Extension trait scaling an optional amount to hundredths.
pub trait CentsExt {
    /// Float type of the result.
    type Output;

    /// `(value or 0) * 100`.
    fn cents(self) -> Self::Output;
}

/// Extension trait for primitive numbers.
pub trait NumberExt: Sized {
    /// Rough power-of-ten bracket of the value.
    ///
    /// Zero, NaN and infinities give `1`. Below one in absolute value the
    /// result is `round(log10(|v|)) * signum(v)`; otherwise it is
    /// `round(log10(|v|)) - 1`, so `123` gives `1` and `999` gives `2`.
    fn magnitude(self) -> i32;

    /// Largest multiple of `factor` reached by truncating division, as `f64`.
    ///
    /// Truncation goes toward zero, so negative values round up:
    /// `-87` floored to `25` is `-75`.
    ///
    /// # Errors
    /// [`SugarError::ZeroFactor`] when `factor` is zero, and
    /// [`SugarError::NotFinite`] when a float input is NaN or infinite or the
    /// quotient overflows.
    fn floor_to_factor(self, factor: Self) -> Result<f64>;
}

fn magnitude_of(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 1;
    }
    let exponent = value.abs().log10().round();
    if value.abs() < 1.0 {
        (exponent * value.signum()) as i32
    } else {
        exponent as i32 - 1
    }
}

macro_rules! impl_integer_ext {
    ($($t:ty),* $(,)?) => {$(
        impl DivisorExt<$t> for Option<$t> {
            #[inline]
            fn divisor(self) -> $t {
                match self {
                    Some(value) if value != 0 => value,
                    _ => 1,
                }
            }
        }

        impl NumberExt for $t {
            #[inline]
            fn magnitude(self) -> i32 {
                magnitude_of(self as f64)
            }

            fn floor_to_factor(self, factor: $t) -> Result<f64> {
                if factor == 0 {
                    return Err(SugarError::ZeroFactor);
                }
                // |quotient * factor| <= |self|, so only MIN / -1 can wrap and
                // it wraps back to MIN, which is the exact answer.
                Ok(self.wrapping_div(factor).wrapping_mul(factor) as f64)
            }
        }
    )*};
}

macro_rules! impl_float_ext {
    ($($t:ty),* $(,)?) => {$(
        impl DivisorExt<$t> for Option<$t> {
            #[inline]
            fn divisor(self) -> $t {
                match self {
                    Some(value) if value != 0.0 => value,
                    _ => 1.0,
                }
            }
        }

        impl CentsExt for Option<$t> {
            type Output = $t;

            #[inline]
            fn cents(self) -> $t {
                self.unwrap_or(0.0) * 100.0
            }
        }

        impl NumberExt for $t {
            #[inline]
            fn magnitude(self) -> i32 {
                magnitude_of(f64::from(self))
            }

            fn floor_to_factor(self, factor: $t) -> Result<f64> {
                if factor == 0.0 {
                    return Err(SugarError::ZeroFactor);
                }
                let floored = f64::from((self / factor).trunc() * factor);
                if !floored.is_finite() {
                    return Err(SugarError::NotFinite);
                }
                Ok(floored)
            }
        }
    )*};
}

impl_integer_ext!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_ext!(f32, f64);
