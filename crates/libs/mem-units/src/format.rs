//! Formatting of sizes as unit strings.

use std::fmt::{self, Write};

use crate::units::{Case, Unit};
use crate::{Bandwidth, BitSize, Size};

/// Auxiliary macro for the definition of formats.
macro_rules! define_formats {
    ($($name:ident, $char:literal, $selector:literal, $ladder:ident, $case:ident, $zero:literal;)*) => {
        /// Format to use when displaying a size.
        ///
        /// Each format has a single-byte _selector_ used by [`format_size`] and friends.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Format {
            $(
                #[doc = concat!(
                    "Selector `", $char, "`, zero is formatted as `", $zero, "`."
                )]
                $name,
            )*
        }

        impl Format {
            /// Slice of all formats.
            pub const FORMATS: &[Self] = &[$(Self::$name),*];

            /// Look up the format for the given selector.
            pub const fn from_selector(selector: u8) -> Option<Self> {
                match selector {
                    $(
                        $selector => Some(Self::$name),
                    )*
                    _ => None,
                }
            }

            /// Selector of the format.
            pub const fn selector(self) -> u8 {
                match self {
                    $(
                        Self::$name => $selector,
                    )*
                }
            }

            /// Units available to the format, from the largest to the base unit.
            const fn ladder(self) -> &'static [Unit] {
                match self {
                    $(
                        Self::$name => Unit::$ladder,
                    )*
                }
            }

            /// Case of the unit strings.
            const fn case(self) -> Case {
                match self {
                    $(
                        Self::$name => Case::$case,
                    )*
                }
            }

            /// Representation of zero.
            const fn zero(self) -> &'static str {
                match self {
                    $(
                        Self::$name => $zero,
                    )*
                }
            }
        }
    };
}

define_formats! {
    Decimal, 'd', b'd', DECIMAL_LADDER, Lower, "0b";
    DecimalUpper, 'D', b'D', DECIMAL_LADDER, Upper, "0B";
    Binary, 'b', b'b', BINARY_LADDER, Lower, "0b";
    BinaryUpper, 'B', b'B', BINARY_LADDER, Upper, "0B";
    Bits, 'i', b'i', BIT_LADDER, Lower, "0bit";
    BitsUpper, 'I', b'I', BIT_LADDER, Upper, "0Bit";
}

impl Format {
    /// Unit used to display the given number of bits.
    pub fn display_unit(self, bits: i64) -> Unit {
        let magnitude = bits.unsigned_abs();
        let ladder = self.ladder();
        ladder
            .iter()
            .copied()
            .find(|unit| unit.num_bits() as u64 <= magnitude)
            .unwrap_or(ladder[ladder.len() - 1])
    }
}

/// Format a size according to the selector and precision.
///
/// A negative precision uses the smallest number of fractional digits such that parsing
/// the result yields `size` exactly. Unknown selectors produce `%` followed by the
/// selector.
///
/// ```rust
/// # use mem_units::{format_size, Size};
/// assert_eq!(format_size(Size::MB, b'D', -1), "1MB");
/// assert_eq!(format_size(Size::MB + Size::KB * 111, b'd', 2), "1.11mb");
/// assert_eq!(format_size(Size::TIB * 2 + Size::MIB * 512, b'B', 4), "2.0005TiB");
/// assert_eq!(format_size(Size::MB, b'x', -1), "%x");
/// ```
pub fn format_size(size: Size, selector: u8, precision: i32) -> String {
    format_with(size.as_bits(), selector, precision, "")
}

/// Format a bit size according to the selector and precision.
///
/// See [`format_size`] for details.
pub fn format_bit_size(size: BitSize, selector: u8, precision: i32) -> String {
    format_with(size.as_bits(), selector, precision, "")
}

/// Format a bandwidth according to the selector and precision.
///
/// See [`format_size`] for details. The result carries a `/s` suffix.
pub fn format_bandwidth(bandwidth: Bandwidth, selector: u8, precision: i32) -> String {
    format_with(bandwidth.as_bits(), selector, precision, "/s")
}

fn format_with(bits: i64, selector: u8, precision: i32, suffix: &str) -> String {
    let Some(format) = Format::from_selector(selector) else {
        return format!("%{}", selector as char);
    };
    let mut output = String::new();
    let precision = usize::try_from(precision).ok();
    // Writing into a `String` does not fail.
    let _ = write_bits(&mut output, bits, format, precision);
    output.push_str(suffix);
    output
}

/// Display adapter returned by [`Size::display`] and friends.
///
/// The precision of the formatter is respected, e.g., `{:.2}`.
#[derive(Debug, Clone, Copy)]
pub struct Display {
    bits: i64,
    format: Format,
    suffix: &'static str,
}

impl Display {
    pub(crate) const fn new(bits: i64, format: Format, suffix: &'static str) -> Self {
        Self {
            bits,
            format,
            suffix,
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        write_bits(f, self.bits, self.format, precision)?;
        f.write_str(self.suffix)
    }
}

/// Write the number of bits in the given format.
///
/// If `precision` is [`None`], the shortest exact representation is written.
pub(crate) fn write_bits<W: Write>(
    out: &mut W,
    bits: i64,
    format: Format,
    precision: Option<usize>,
) -> fmt::Result {
    if bits == 0 {
        return out.write_str(format.zero());
    }
    let unit = format.display_unit(bits);
    let unit_bits = unit.num_bits() as u64;
    let magnitude = bits.unsigned_abs();
    let (whole, remainder) = (magnitude / unit_bits, magnitude % unit_bits);
    if bits < 0 {
        // Also required when the whole part is zero, e.g., `-0.5B`.
        out.write_char('-')?;
    }
    match precision {
        _ if remainder == 0 => {
            write!(out, "{whole}")?;
            let zeros = precision.unwrap_or(0);
            if zeros > 0 {
                out.write_char('.')?;
                write_zeros(out, zeros)?;
            }
        }
        None => {
            let (digits, width) = shortest_fraction(remainder, unit);
            write!(out, "{whole}.{digits:0width$}")?;
        }
        Some(precision) => write_fixed(out, whole, remainder, unit_bits, precision)?,
    }
    out.write_str(unit.as_str(format.case()))
}

/// Find the fewest fractional digits reconstructing `remainder` bits when parsed.
///
/// Returns the digits as integer together with their count.
fn shortest_fraction(remainder: u64, unit: Unit) -> (u128, usize) {
    let unit_bits = unit.num_bits() as u128;
    let remainder = remainder as u128;
    let max_width = unit.fractional_digits() as usize;
    let mut base = 1u128;
    for width in 1..=max_width {
        base *= 10;
        let estimate = remainder * base / unit_bits;
        for digits in [estimate, estimate + 1] {
            // Must match the reconstruction carried out by the parser.
            if digits < base && (digits * unit_bits + base / 2) / base == remainder {
                return (digits, width);
            }
        }
    }
    // With `max_width` digits, one step is worth at most one bit. Hence, the loop always
    // returns for `remainder < unit_bits`.
    ((remainder * base + unit_bits / 2) / unit_bits, max_width)
}

/// Write `remainder / unit_bits` with exactly `precision` digits, rounding halfway values
/// away from zero.
fn write_fixed<W: Write>(
    out: &mut W,
    whole: u64,
    remainder: u64,
    unit_bits: u64,
    precision: usize,
) -> fmt::Result {
    // The decimal expansion terminates as every unit divides a power of ten.
    let mut digits = Vec::new();
    let mut remainder = remainder;
    while digits.len() < precision && remainder != 0 {
        remainder *= 10;
        digits.push((remainder / unit_bits) as u8);
        remainder %= unit_bits;
    }
    let mut whole = whole;
    if remainder != 0 && remainder * 2 >= unit_bits {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            whole += 1;
        }
    }
    write!(out, "{whole}")?;
    if precision > 0 {
        out.write_char('.')?;
        for digit in &digits {
            out.write_char(char::from(b'0' + digit))?;
        }
        write_zeros(out, precision - digits.len())?;
    }
    Ok(())
}

fn write_zeros<W: Write>(out: &mut W, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char('0')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        for format in Format::FORMATS {
            assert_eq!(Format::from_selector(format.selector()), Some(*format));
        }
        assert_eq!(Format::from_selector(b'x'), None);
        let selectors = Format::FORMATS
            .iter()
            .map(|format| format.selector())
            .collect::<Vec<_>>();
        assert_eq!(selectors, b"dDbBiI");
    }

    #[test]
    fn test_display_unit() {
        assert_eq!(Format::Decimal.display_unit(0), Unit::Byte);
        assert_eq!(Format::Decimal.display_unit(7999), Unit::Byte);
        assert_eq!(Format::Decimal.display_unit(8000), Unit::Kilobyte);
        assert_eq!(Format::Decimal.display_unit(-8000), Unit::Kilobyte);
        assert_eq!(Format::Binary.display_unit(8000), Unit::Byte);
        assert_eq!(Format::Binary.display_unit(i64::MIN), Unit::Pebibyte);
        assert_eq!(Format::Bits.display_unit(999), Unit::Bit);
        assert_eq!(Format::BitsUpper.display_unit(i64::MAX), Unit::Terabit);
    }

    #[test]
    fn test_shortest_fraction() {
        assert_eq!(shortest_fraction(4, Unit::Byte), (5, 1));
        assert_eq!(shortest_fraction(1, Unit::Byte), (1, 1));
        assert_eq!(shortest_fraction(111 * 8000, Unit::Megabyte), (111, 3));
        assert_eq!(shortest_fraction(8, Unit::Kilobyte), (1, 3));
        assert_eq!(shortest_fraction(1, Unit::Kilobit), (1, 3));
    }

    #[test]
    fn test_write_fixed() {
        let mut out = String::new();
        write_fixed(&mut out, 1, 7999, 8000, 3).unwrap();
        assert_eq!(out, "2.000");
        let mut out = String::new();
        write_fixed(&mut out, 1, 4, 8, 0).unwrap();
        assert_eq!(out, "2");
        let mut out = String::new();
        write_fixed(&mut out, 1, 3, 8, 0).unwrap();
        assert_eq!(out, "1");
        let mut out = String::new();
        write_fixed(&mut out, 0, 1, 8, 5).unwrap();
        assert_eq!(out, "0.12500");
    }
}
