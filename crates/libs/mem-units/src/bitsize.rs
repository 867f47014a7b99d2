//! Bit-denominated sizes.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseSizeError;
use crate::format::{self, Format};
use crate::macros::{define_accessors, define_quantity};
use crate::parse::parse_bits;
use crate::size::Size;
use crate::units::Unit;

define_quantity! {
    /// Represents an _amount of data_ measured in bits, e.g., for networking.
    ///
    /// Not every bit size is a whole number of bytes. Use [`BitSize::to_bytes`] to split
    /// it into bytes and remaining bits.
    BitSize
}

impl BitSize {
    /// One bit.
    pub const BIT: BitSize = BitSize::from_bits(1);
    /// One kilobit (Kbit).
    pub const KBIT: BitSize = BitSize::from_bits(Unit::Kilobit.num_bits());
    /// One megabit (Mbit).
    pub const MBIT: BitSize = BitSize::from_bits(Unit::Megabit.num_bits());
    /// One gigabit (Gbit).
    pub const GBIT: BitSize = BitSize::from_bits(Unit::Gigabit.num_bits());
    /// One terabit (Tbit).
    pub const TBIT: BitSize = BitSize::from_bits(Unit::Terabit.num_bits());

    /// Construct [`BitSize`] from the given number `n` of bits.
    pub const fn bits(n: i64) -> BitSize {
        BitSize::from_bits(n)
    }

    /// Construct [`BitSize`] from the given number `n` of kilobits, saturating.
    pub const fn kilobits(n: i64) -> BitSize {
        Self::KBIT.saturating_mul(n)
    }

    /// Construct [`BitSize`] from the given number `n` of megabits, saturating.
    pub const fn megabits(n: i64) -> BitSize {
        Self::MBIT.saturating_mul(n)
    }

    /// Construct [`BitSize`] from the given number `n` of gigabits, saturating.
    pub const fn gigabits(n: i64) -> BitSize {
        Self::GBIT.saturating_mul(n)
    }

    /// Construct [`BitSize`] from the given number `n` of terabits, saturating.
    pub const fn terabits(n: i64) -> BitSize {
        Self::TBIT.saturating_mul(n)
    }

    /// Split into whole bytes and the remaining bits.
    ///
    /// The remaining bits are within `-7..=7` and carry the sign of the bit size:
    ///
    /// ```rust
    /// # use mem_units::{BitSize, Size};
    /// let size = BitSize::MBIT + BitSize::bits(4);
    /// let (bytes, bits) = size.to_bytes();
    /// assert_eq!(bytes, Size::KB * 125);
    /// assert_eq!(bits, BitSize::bits(4));
    /// assert_eq!(bytes.to_bits() + bits, size);
    /// ```
    pub const fn to_bytes(self) -> (Size, BitSize) {
        let remainder = self.bits % 8;
        (
            Size::from_bits(self.bits - remainder),
            BitSize::from_bits(remainder),
        )
    }

    /// Parse a bit size string, e.g., `8.888Mbit` or `-1gbit`.
    ///
    /// Byte units are accepted as well and converted to bits.
    pub fn parse_str(s: &str) -> Result<BitSize, ParseSizeError> {
        parse_bits(s).map(BitSize::from_bits)
    }

    /// Display the bit size in the given format.
    pub const fn display(self, format: Format) -> format::Display {
        format::Display::new(self.bits, format, "")
    }
}

define_accessors! {
    BitSize {
        as_kilobits_f64, Kilobit, "kilobits (Kbit)";
        as_megabits_f64, Megabit, "megabits (Mbit)";
        as_gigabits_f64, Gigabit, "gigabits (Gbit)";
        as_terabits_f64, Terabit, "terabits (Tbit)";
    }
}

impl fmt::Display for BitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_bits(f, self.bits, Format::BitsUpper, f.precision())
    }
}

impl FromStr for BitSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitSize::parse_str(s)
    }
}

impl From<Size> for BitSize {
    fn from(value: Size) -> Self {
        value.to_bits()
    }
}

impl PartialEq<Size> for BitSize {
    fn eq(&self, other: &Size) -> bool {
        self.bits == other.as_bits()
    }
}

impl PartialOrd<Size> for BitSize {
    fn partial_cmp(&self, other: &Size) -> Option<std::cmp::Ordering> {
        self.bits.partial_cmp(&other.as_bits())
    }
}
