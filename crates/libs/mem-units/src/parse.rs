//! Parser for size strings.
//!
//! ```plain
//! ⟨size⟩  ::=  [ '+' | '-' ] ⟨int⟩ [ '.' ⟨int⟩ ] ⟨unit⟩
//! ⟨int⟩   ::=  [0-9]+
//! ```
//!
//! The unit must be one of the spellings in [`Unit::from_suffix`]. The fractional part is
//! converted exactly using 128-bit integers and rounded to the nearest bit, with ties
//! rounded up.

use crate::errors::ParseSizeError;
use crate::math::remap_sentinel;
use crate::units::Unit;

/// Parse a size string into a number of bits.
pub(crate) fn parse_bits(input: &str) -> Result<i64, ParseSizeError> {
    let invalid = || ParseSizeError::new(input);
    let mut buffer = input.as_bytes();
    let negative = match buffer.split_first() {
        Some((b'-', tail)) => {
            buffer = tail;
            true
        }
        Some((b'+', tail)) => {
            buffer = tail;
            false
        }
        Some(_) => false,
        None => return Err(invalid()),
    };
    let whole = expect_digits(&mut buffer).ok_or_else(invalid)?;
    let mut fraction: &[u8] = &[];
    if let Some((b'.', tail)) = buffer.split_first() {
        buffer = tail;
        fraction = take_digits(&mut buffer);
        if fraction.is_empty() {
            return Err(invalid());
        }
    }
    // Only ASCII digits and signs have been consumed, hence, this is a char boundary.
    let suffix = &input[input.len() - buffer.len()..];
    let unit = Unit::from_suffix(suffix).ok_or_else(invalid)?;
    let unit_bits = unit.num_bits() as u128;
    let fractional_bits = fraction_to_bits(fraction, unit_bits);
    let magnitude = whole as u128 * unit_bits + fractional_bits;
    let limit = if negative {
        1 << 63
    } else {
        i64::MAX as u128
    };
    if magnitude > limit {
        return Err(invalid());
    }
    let value = if negative {
        (magnitude as i128).wrapping_neg() as i64
    } else {
        magnitude as i64
    };
    Ok(remap_sentinel(value))
}

/// Number of fractional digits converted with a single multiplication.
const DIRECT_DIGITS: usize = 19;

/// Split off the leading ASCII digits of `buffer`.
fn take_digits<'a>(buffer: &mut &'a [u8]) -> &'a [u8] {
    let end = buffer
        .iter()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(buffer.len());
    let (digits, rest) = buffer.split_at(end);
    *buffer = rest;
    digits
}

/// Consume a non-empty sequence of decimal digits.
///
/// Yields [`None`] if there are no digits or the value overflows.
fn expect_digits(buffer: &mut &[u8]) -> Option<u64> {
    let digits = take_digits(buffer);
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u64, |value, digit| {
        value.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}

/// Convert the fractional `digits` of a unit into bits, rounding halfway values up.
///
/// The first [`DIRECT_DIGITS`] digits are converted directly. Any further digits can
/// only add less than one bit and merely decide whether the result is rounded up.
fn fraction_to_bits(digits: &[u8], unit_bits: u128) -> u128 {
    let (head, tail) = digits.split_at(digits.len().min(DIRECT_DIGITS));
    let (value, base) = head.iter().fold((0u128, 1u128), |(value, base), digit| {
        (value * 10 + u128::from(digit - b'0'), base * 10)
    });
    let scaled = value * unit_bits + base / 2;
    let (bits, remainder) = (scaled / base, scaled % base);
    // The tail contributes `0.tail * unit_bits` in multiples of `1 / base`.
    if tail_reaches(tail, base - remainder, unit_bits) {
        bits + 1
    } else {
        bits
    }
}

/// Check whether the decimal fraction `0.tail` is at least `numerator / denominator`.
fn tail_reaches(tail: &[u8], mut numerator: u128, denominator: u128) -> bool {
    if tail.is_empty() || numerator >= denominator {
        return false;
    }
    for digit in tail {
        numerator *= 10;
        let threshold = numerator / denominator;
        numerator %= denominator;
        let digit = u128::from(digit - b'0');
        if digit != threshold {
            return digit > threshold;
        }
    }
    numerator == 0
}
