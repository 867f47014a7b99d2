//! Byte-denominated sizes.

use std::fmt;
use std::str::FromStr;

use crate::bitsize::BitSize;
use crate::errors::ParseSizeError;
use crate::format::{self, Format};
use crate::macros::{define_accessors, define_quantity};
use crate::parse::parse_bits;
use crate::units::Unit;

define_quantity! {
    /// Represents an _amount of data_ such as the size of a file or of main memory.
    ///
    /// Sizes are stored as [`i64`] number of bits and displayed in bytes. The largest
    /// representable size is one bit less than 1024 PiB.
    Size
}

/// Auxiliary macro for the definition of unit constants and constructors.
macro_rules! define_units {
    ($($constant:ident, $constructor:ident, $unit:ident;)*) => {
        impl Size {
            $(
                #[doc = concat!("One ", stringify!($unit), ".")]
                pub const $constant: Size = Size { bits: Unit::$unit.num_bits() };

                #[doc = concat!(
                    "Construct [`Size`] from the given number `n` of ", stringify!($unit), "s.\n\n",
                    "Saturates if the result is not representable."
                )]
                pub const fn $constructor(n: i64) -> Size {
                    Self::$constant.saturating_mul(n)
                }
            )*
        }
    };
}

define_units! {
    BIT, bits, Bit;
    KBIT, kilobits, Kilobit;
    MBIT, megabits, Megabit;
    GBIT, gigabits, Gigabit;
    TBIT, terabits, Terabit;
    BYTE, bytes, Byte;
    KB, kilobytes, Kilobyte;
    MB, megabytes, Megabyte;
    GB, gigabytes, Gigabyte;
    TB, terabytes, Terabyte;
    PB, petabytes, Petabyte;
    KIB, kibibytes, Kibibyte;
    MIB, mebibytes, Mebibyte;
    GIB, gibibytes, Gibibyte;
    TIB, tebibytes, Tebibyte;
    PIB, pebibytes, Pebibyte;
}

define_accessors! {
    Size {
        as_bytes_f64, Byte, "bytes";
        as_kilobytes_f64, Kilobyte, "kilobytes (KB)";
        as_megabytes_f64, Megabyte, "megabytes (MB)";
        as_gigabytes_f64, Gigabyte, "gigabytes (GB)";
        as_terabytes_f64, Terabyte, "terabytes (TB)";
        as_petabytes_f64, Petabyte, "petabytes (PB)";
        as_kibibytes_f64, Kibibyte, "kibibytes (KiB)";
        as_mebibytes_f64, Mebibyte, "mebibytes (MiB)";
        as_gibibytes_f64, Gibibyte, "gibibytes (GiB)";
        as_tebibytes_f64, Tebibyte, "tebibytes (TiB)";
        as_pebibytes_f64, Pebibyte, "pebibytes (PiB)";
        as_kilobits_f64, Kilobit, "kilobits (Kbit)";
        as_megabits_f64, Megabit, "megabits (Mbit)";
        as_gigabits_f64, Gigabit, "gigabits (Gbit)";
        as_terabits_f64, Terabit, "terabits (Tbit)";
    }
}

impl Size {
    /// Construct [`Size`] from the provided number of bytes.
    ///
    /// Saturates at [`Size::MAX`].
    pub const fn from_usize(n: usize) -> Self {
        if n as u64 > i64::MAX as u64 {
            Self::MAX
        } else {
            Self::bytes(n as i64)
        }
    }

    /// Number of whole bytes, rounded towards zero.
    pub const fn whole_bytes(self) -> i64 {
        self.bits / 8
    }

    /// Convert the size to a number of bits.
    pub const fn to_bits(self) -> BitSize {
        BitSize::from_bits(self.bits)
    }

    /// Parse a size string, e.g., `1.5GiB` or `-64kb`.
    pub fn parse_str(s: &str) -> Result<Size, ParseSizeError> {
        parse_bits(s).map(Size::from_bits)
    }

    /// Display the size in the given format.
    ///
    /// ```rust
    /// # use mem_units::{Format, Size};
    /// let size = Size::GIB + Size::MIB * 512;
    /// assert_eq!(size.display(Format::BinaryUpper).to_string(), "1.5GiB");
    /// assert_eq!(format!("{:.1}", size.display(Format::Decimal)), "1.6gb");
    /// assert_eq!(size.display(Format::BitsUpper).to_string(), "12.884901888Gbit");
    /// ```
    pub const fn display(self, format: Format) -> format::Display {
        format::Display::new(self.bits, format, "")
    }
}

impl fmt::Display for Size {
    /// Formats with decimal units, `{:#}` uses binary units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            Format::BinaryUpper
        } else {
            Format::DecimalUpper
        };
        format::write_bits(f, self.bits, format, f.precision())
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::parse_str(s)
    }
}

impl From<BitSize> for Size {
    fn from(value: BitSize) -> Self {
        Size::from_bits(value.as_bits())
    }
}

impl From<Unit> for Size {
    fn from(value: Unit) -> Self {
        Size::from_bits(value.num_bits())
    }
}

impl PartialEq<BitSize> for Size {
    fn eq(&self, other: &BitSize) -> bool {
        self.bits == other.as_bits()
    }
}

impl PartialOrd<BitSize> for Size {
    fn partial_cmp(&self, other: &BitSize) -> Option<std::cmp::Ordering> {
        self.bits.partial_cmp(&other.as_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_display() {
        let cases = [
            (Size::ZERO, "0B"),
            (Size::BYTE, "1B"),
            (Size::MB, "1MB"),
            (-Size::MB, "-1MB"),
            (Size::MIB, "1.048576MB"),
            (Size::MBIT, "125KB"),
            (Size::TB * 5 + Size::GB * 640 + Size::MB * 509, "5.640509TB"),
            (-Size::MB - Size::KB * 825, "-1.825MB"),
            (Size::PB * 1000 + Size::BYTE, "1000.000000000000001PB"),
            (Size::GB + Size::MB * 500, "1.5GB"),
            (Size::KIB * 5 + Size::BYTE * 880, "6KB"),
        ];
        for (size, expected) in cases {
            assert_eq!(size.to_string(), expected);
        }
        assert_eq!(format!("{:#}", Size::MIB * 3), "3MiB");
        assert_eq!(format!("{:.2}", Size::MB + Size::KB * 111), "1.11MB");
    }

    #[test]
    fn test_size_abs() {
        assert_eq!(Size::ZERO.abs(), Size::ZERO);
        assert_eq!((-Size::BIT).abs(), Size::BIT);
        assert_eq!((-Size::BYTE).abs(), Size::BYTE);
        assert_eq!(Size::from_bits(i64::MIN).abs(), Size::MAX);
        assert_eq!(Size::MIN.abs(), Size::MAX);
        assert_eq!(Size::MAX.abs().abs(), Size::MAX);
    }

    #[test]
    fn test_size_truncate() {
        let size = Size::MB + Size::KB * 500;
        assert_eq!(size.truncate(Size::ZERO), size);
        assert_eq!(size.truncate(-Size::KB), size);
        assert_eq!(size.truncate(size), size);
        assert_eq!(size.truncate(Size::MB), Size::MB);
        assert_eq!(
            (Size::KB * 11 + Size::BIT * 7).truncate(Size::KB * 11),
            Size::KB * 11
        );
        assert_eq!(
            (-(Size::GIB * 12 + Size::MIB * 5 + Size::BYTE * 7)).truncate(Size::KIB),
            -(Size::GIB * 12 + Size::MIB * 5)
        );
    }

    #[test]
    fn test_size_round() {
        let size = Size::MB + Size::KB * 500;
        assert_eq!(size.round(Size::ZERO), size);
        assert_eq!(size.round(-Size::KB), size);
        assert_eq!(size.round(Size::KB * 500), size);
        assert_eq!(size.round(Size::MB), Size::MB * 2);
        assert_eq!((-size).round(Size::MB), -Size::MB * 2);
        assert_eq!(size.round(Size::KB * 13), Size::MB + Size::KB * 495);
        assert_eq!(
            (Size::MIB + Size::KIB * 512).round(Size::KIB * 13),
            Size::MIB + Size::KIB * 510
        );
        assert_eq!(Size::MAX.round(Size::BYTE), Size::MAX);
        assert_eq!(Size::MIN.round(Size::BYTE), Size::MIN);
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::BYTE + Size::BIT * 3;
        assert_eq!(size.as_bytes_f64(), 1.375);
        assert_eq!(size.as_kilobytes_f64(), 0.001375);
        assert_eq!(size.as_megabytes_f64(), 0.000001375);

        let size = Size::GB * 542 + Size::MB + Size::KB * 17 + Size::BYTE * 859 + Size::BIT * 4;
        assert_eq!(size.as_bytes_f64(), 542001017859.5);
        assert_eq!(size.as_gigabytes_f64(), 542.0010178595);

        let size = Size::TB * 117 + Size::KB * 4;
        assert_eq!(size.as_terabytes_f64(), 117.000000004);

        let size = Size::KBIT * 64 + Size::BIT * 375;
        assert_eq!(size.as_kilobits_f64(), 64.375);
        assert_eq!(size.as_megabits_f64(), 0.064375);

        assert_eq!(Size::MIB.as_kibibytes_f64(), 1024.0);
        assert_eq!((Size::GIB * 3 / 2).as_gibibytes_f64(), 1.5);
        assert_eq!(Size::TIB.as_pebibytes_f64(), 1.0 / 1024.0);
    }

    #[test]
    fn test_size_arithmetic() {
        assert_eq!(Size::MB / Size::KB, 1000);
        assert_eq!(Size::kilobytes(3) % Size::KIB, Size::bytes(3000 - 2048));
        assert_eq!(Size::MAX + Size::BIT, Size::MAX);
        assert_eq!(Size::MIN - Size::BIT, Size::MIN);
        assert_eq!(Size::MIN + Size::MAX, Size::ZERO);
        assert_eq!(Size::PIB * 1024, Size::MAX);
        assert_eq!(Size::PIB * -1024, Size::MIN);
        assert_eq!(-Size::MIN, Size::MAX);
        assert_eq!(Size::kibibytes(i64::MAX), Size::MAX);
        assert_eq!(Size::from_usize(usize::MAX), Size::MAX);
        assert_eq!(Size::from_usize(4096), Size::KIB * 4);
        assert_eq!(
            [Size::KB, Size::KB, Size::BYTE].iter().sum::<Size>(),
            Size::bytes(2001)
        );
        let mut size = Size::ZERO;
        size += Size::MB;
        size -= Size::KB;
        size *= 2;
        size /= 4;
        assert_eq!(size, Size::KB * 499 + Size::BYTE * 500);
    }

    #[test]
    fn test_size_conversion() {
        assert_eq!(Size::BYTE.to_bits(), BitSize::bits(8));
        assert_eq!(Size::from(BitSize::KBIT), Size::bytes(125));
        assert_eq!(Size::from(Unit::Mebibyte), Size::MIB);
        assert_eq!(Size::bytes(3), BitSize::bits(24));
        assert!(Size::BYTE < BitSize::bits(9));
        assert_eq!((Size::BYTE * 3 + Size::BIT).whole_bytes(), 3);
        assert_eq!((-Size::BYTE * 3 - Size::BIT).whole_bytes(), -3);
    }
}
