//! Auxiliary macros for defining quantity types.

/// Define a quantity type stored as a saturating [`i64`] number of bits.
macro_rules! define_quantity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            /// Number of bits, never `i64::MIN`.
            bits: i64,
        }

        impl $name {
            /// Zero.
            pub const ZERO: Self = Self { bits: 0 };

            /// Largest representable value.
            pub const MAX: Self = Self { bits: $crate::math::MAX };

            /// Smallest representable value.
            ///
            /// This is the negation of [`Self::MAX`].
            pub const MIN: Self = Self { bits: $crate::math::MIN };

            #[doc = concat!(
                "Construct [`", stringify!($name), "`] from a raw number of bits.\n\n",
                "As a special case, `i64::MIN` is converted to [`", stringify!($name), "::MAX`]."
            )]
            pub const fn from_bits(bits: i64) -> Self {
                Self {
                    bits: $crate::math::remap_sentinel(bits),
                }
            }

            /// Raw number of bits.
            pub const fn as_bits(self) -> i64 {
                self.bits
            }

            /// Check whether the value is zero.
            pub const fn is_zero(self) -> bool {
                self.bits == 0
            }

            /// Check whether the value is negative.
            pub const fn is_negative(self) -> bool {
                self.bits < 0
            }

            /// Absolute value.
            pub const fn abs(self) -> Self {
                Self {
                    bits: $crate::math::abs(self.bits),
                }
            }

            /// Round towards zero to a multiple of `m`.
            ///
            /// If `m <= 0`, the value is returned unchanged.
            pub const fn truncate(self, m: Self) -> Self {
                Self {
                    bits: $crate::math::truncate(self.bits, m.bits),
                }
            }

            /// Round to the nearest multiple of `m`, rounding halfway values away from zero.
            ///
            /// Results exceeding the representable range saturate to [`Self::MAX`] or
            #[doc = concat!("[`", stringify!($name), "::MIN`], respectively.")]
            /// If `m <= 0`, the value is returned unchanged.
            pub const fn round(self, m: Self) -> Self {
                Self {
                    bits: $crate::math::round(self.bits, m.bits),
                }
            }

            /// Saturating addition.
            pub const fn saturating_add(self, rhs: Self) -> Self {
                Self {
                    bits: $crate::math::saturate(self.bits.checked_add(rhs.bits), self.bits < 0),
                }
            }

            /// Saturating subtraction.
            pub const fn saturating_sub(self, rhs: Self) -> Self {
                Self {
                    bits: $crate::math::saturate(self.bits.checked_sub(rhs.bits), self.bits < 0),
                }
            }

            /// Saturating multiplication with an integer.
            pub const fn saturating_mul(self, rhs: i64) -> Self {
                Self {
                    bits: $crate::math::saturate(
                        self.bits.checked_mul(rhs),
                        (self.bits < 0) != (rhs < 0),
                    ),
                }
            }
        }

        impl core::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: Self) -> Self::Output {
                self.saturating_add(rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: Self) -> Self::Output {
                self.saturating_sub(rhs)
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                // Never overflows as `i64::MIN` is not a valid value.
                Self { bits: -self.bits }
            }
        }

        impl core::ops::Mul<i64> for $name {
            type Output = $name;

            fn mul(self, rhs: i64) -> Self::Output {
                self.saturating_mul(rhs)
            }
        }

        impl core::ops::Mul<$name> for i64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs.saturating_mul(self)
            }
        }

        impl core::ops::MulAssign<i64> for $name {
            fn mul_assign(&mut self, rhs: i64) {
                *self = *self * rhs;
            }
        }

        impl core::ops::Div<i64> for $name {
            type Output = $name;

            fn div(self, rhs: i64) -> Self::Output {
                // Panics on division by zero, `i64::MIN / -1` cannot occur.
                Self::from_bits(self.bits / rhs)
            }
        }

        impl core::ops::DivAssign<i64> for $name {
            fn div_assign(&mut self, rhs: i64) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Div for $name {
            type Output = i64;

            /// Number of times `rhs` fits into the value, rounded towards zero.
            fn div(self, rhs: Self) -> Self::Output {
                self.bits / rhs.bits
            }
        }

        impl core::ops::Rem for $name {
            type Output = $name;

            fn rem(self, rhs: Self) -> Self::Output {
                Self::from_bits(self.bits % rhs.bits)
            }
        }

        impl core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |sum, value| sum + value)
            }
        }

        impl<'a> core::iter::Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }
    };
}

/// Define floating-point accessors for the given units.
macro_rules! define_accessors {
    ($name:ident { $($accessor:ident, $unit:ident, $doc:literal;)* }) => {
        impl $name {
            $(
                #[doc = concat!("Value as floating-point number of ", $doc, ".")]
                pub fn $accessor(self) -> f64 {
                    let unit = $crate::units::Unit::$unit.num_bits();
                    let whole = self.bits / unit;
                    let remainder = self.bits % unit;
                    whole as f64 + remainder as f64 / unit as f64
                }
            )*
        }
    };
}

pub(crate) use {define_accessors, define_quantity};
