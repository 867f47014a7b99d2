//! Units of data and the closed table of accepted unit spellings.

/// Letter case of a unit's string representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Lowercase, e.g., `kib` or `mbit`.
    Lower,
    /// Partially uppercase, e.g., `KiB` or `Mbit`.
    Upper,
}

/// Auxiliary macro for the definition of units.
macro_rules! define_units {
    ($($name:ident, $lower:literal, $upper:literal, $bits:expr;)*) => {
        /// A _unit of data_ like Megabyte (MB), Kibibyte (KiB), or Gigabit (Gbit).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Unit {
            $(
                #[doc = concat!("1 ", $upper, " is `", stringify!($bits), "` bits.")]
                $name,
            )*
        }

        impl Unit {
            /// Slice of all units.
            pub const UNITS: &[Self] = &[$(Self::$name),*];

            /// Number of bits the unit corresponds to.
            pub const fn num_bits(self) -> i64 {
                match self {
                    $(
                        Self::$name => $bits,
                    )*
                }
            }

            /// String representation of the unit in the given case.
            pub const fn as_str(self, case: Case) -> &'static str {
                match (self, case) {
                    $(
                        (Self::$name, Case::Lower) => $lower,
                        (Self::$name, Case::Upper) => $upper,
                    )*
                }
            }

            /// Look up a unit by its exact spelling.
            ///
            /// Matching is case-sensitive, only the spellings of [`Unit::as_str`] are
            /// accepted.
            pub fn from_suffix(suffix: &str) -> Option<Self> {
                match suffix {
                    $(
                        $lower | $upper => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }
    };
}

define_units! {
    Bit, "bit", "Bit", 1;
    Kilobit, "kbit", "Kbit", 10i64.pow(3);
    Megabit, "mbit", "Mbit", 10i64.pow(6);
    Gigabit, "gbit", "Gbit", 10i64.pow(9);
    Terabit, "tbit", "Tbit", 10i64.pow(12);
    Byte, "b", "B", 8;
    Kilobyte, "kb", "KB", 8 * 10i64.pow(3);
    Megabyte, "mb", "MB", 8 * 10i64.pow(6);
    Gigabyte, "gb", "GB", 8 * 10i64.pow(9);
    Terabyte, "tb", "TB", 8 * 10i64.pow(12);
    Petabyte, "pb", "PB", 8 * 10i64.pow(15);
    Kibibyte, "kib", "KiB", 8 << 10;
    Mebibyte, "mib", "MiB", 8 << 20;
    Gibibyte, "gib", "GiB", 8 << 30;
    Tebibyte, "tib", "TiB", 8 << 40;
    Pebibyte, "pib", "PiB", 8 << 50;
}

impl Unit {
    /// Decimal byte units from the largest to the base unit.
    pub(crate) const DECIMAL_LADDER: &[Self] = &[
        Self::Petabyte,
        Self::Terabyte,
        Self::Gigabyte,
        Self::Megabyte,
        Self::Kilobyte,
        Self::Byte,
    ];

    /// Binary byte units from the largest to the base unit.
    pub(crate) const BINARY_LADDER: &[Self] = &[
        Self::Pebibyte,
        Self::Tebibyte,
        Self::Gibibyte,
        Self::Mebibyte,
        Self::Kibibyte,
        Self::Byte,
    ];

    /// Decimal bit units from the largest to the base unit.
    pub(crate) const BIT_LADDER: &[Self] = &[
        Self::Terabit,
        Self::Gigabit,
        Self::Megabit,
        Self::Kilobit,
        Self::Bit,
    ];

    /// Number of fractional decimal digits after which one digit is worth at most one
    /// bit of the unit.
    ///
    /// For instance, the value is three for `Kbit` and four for `KB`. Any amount smaller
    /// than the unit can be written with that many digits.
    pub(crate) const fn fractional_digits(self) -> u32 {
        (self.num_bits() * 10 - 1).ilog10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladders_descend() {
        for ladder in [Unit::DECIMAL_LADDER, Unit::BINARY_LADDER, Unit::BIT_LADDER] {
            for pair in ladder.windows(2) {
                assert!(pair[0].num_bits() > pair[1].num_bits());
            }
        }
    }

    #[test]
    fn test_suffix_lookup() {
        for unit in Unit::UNITS {
            assert_eq!(Unit::from_suffix(unit.as_str(Case::Lower)), Some(*unit));
            assert_eq!(Unit::from_suffix(unit.as_str(Case::Upper)), Some(*unit));
        }
        assert_eq!(Unit::from_suffix("MiB"), Some(Unit::Mebibyte));
        assert_eq!(Unit::from_suffix("Mib"), None);
        assert_eq!(Unit::from_suffix("BIT"), None);
        assert_eq!(Unit::from_suffix("kB"), None);
        assert_eq!(Unit::from_suffix(""), None);
        assert_eq!(Unit::from_suffix("B "), None);
    }

    #[test]
    fn test_fractional_digits() {
        assert_eq!(Unit::Bit.fractional_digits(), 0);
        assert_eq!(Unit::Byte.fractional_digits(), 1);
        assert_eq!(Unit::Kilobit.fractional_digits(), 3);
        assert_eq!(Unit::Kilobyte.fractional_digits(), 4);
        assert_eq!(Unit::Petabyte.fractional_digits(), 16);
        assert_eq!(Unit::Pebibyte.fractional_digits(), 16);
    }
}
