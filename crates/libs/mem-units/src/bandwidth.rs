//! Data throughput per second.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ParseBandwidthError;
use crate::format::{self, Format};
use crate::macros::define_quantity;
use crate::math;
use crate::parse::parse_bits;
use crate::size::Size;

define_quantity! {
    /// Represents an _amount of data per second_, e.g., the speed of a network link.
    ///
    /// A bandwidth shares the representation of [`Size`] and is formatted like a size
    /// with an additional `/s` suffix.
    Bandwidth
}

/// Auxiliary macro for the definition of bandwidth constants.
macro_rules! define_constants {
    ($($constant:ident, $size:ident;)*) => {
        impl Bandwidth {
            $(
                #[doc = concat!("[`Size::", stringify!($size), "`] per second.")]
                pub const $constant: Bandwidth = Bandwidth::per_second(Size::$size);
            )*
        }
    };
}

define_constants! {
    BIT_PER_SECOND, BIT;
    KBIT_PER_SECOND, KBIT;
    MBIT_PER_SECOND, MBIT;
    GBIT_PER_SECOND, GBIT;
    TBIT_PER_SECOND, TBIT;
    BYTE_PER_SECOND, BYTE;
    KB_PER_SECOND, KB;
    MB_PER_SECOND, MB;
    GB_PER_SECOND, GB;
    TB_PER_SECOND, TB;
    KIB_PER_SECOND, KIB;
    MIB_PER_SECOND, MIB;
    GIB_PER_SECOND, GIB;
    TIB_PER_SECOND, TIB;
}

/// Auxiliary macro for delegating accessors to [`Size`].
macro_rules! delegate_accessors {
    ($($accessor:ident, $doc:literal;)*) => {
        impl Bandwidth {
            $(
                #[doc = concat!("Bandwidth as floating-point number of ", $doc, " per second.")]
                pub fn $accessor(self) -> f64 {
                    self.size().$accessor()
                }
            )*
        }
    };
}

delegate_accessors! {
    as_bytes_f64, "bytes";
    as_kilobytes_f64, "kilobytes";
    as_megabytes_f64, "megabytes";
    as_gigabytes_f64, "gigabytes";
    as_terabytes_f64, "terabytes";
    as_kibibytes_f64, "kibibytes";
    as_mebibytes_f64, "mebibytes";
    as_gibibytes_f64, "gibibytes";
    as_tebibytes_f64, "tebibytes";
    as_kilobits_f64, "kilobits";
    as_megabits_f64, "megabits";
    as_gigabits_f64, "gigabits";
    as_terabits_f64, "terabits";
}

impl Bandwidth {
    /// Bandwidth of transferring `size` every second.
    pub const fn per_second(size: Size) -> Self {
        Self::from_bits(size.as_bits())
    }

    /// Size transferred every second.
    pub const fn size(self) -> Size {
        Size::from_bits(self.bits)
    }

    /// Average bandwidth of transferring `size` within `elapsed`.
    ///
    /// Returns [`None`] if `elapsed` is zero. Saturates if the bandwidth is not
    /// representable.
    pub fn measure(size: Size, elapsed: Duration) -> Option<Self> {
        let nanos = elapsed.as_nanos();
        if nanos == 0 {
            return None;
        }
        let bits = size.as_bits() as i128 * 1_000_000_000 / nanos as i128;
        Some(Self::from_bits(clamp_i128(bits)))
    }

    /// Size transferred within `elapsed`, rounded towards zero and saturating.
    pub fn transferred_in(self, elapsed: Duration) -> Size {
        // `Duration::MAX` in nanoseconds fits into `i128`.
        let nanos = elapsed.as_nanos() as i128;
        let bits = match (self.bits as i128).checked_mul(nanos) {
            Some(product) => product / 1_000_000_000,
            None if self.bits < 0 => i128::MIN,
            None => i128::MAX,
        };
        Size::from_bits(clamp_i128(bits))
    }

    /// Parse a bandwidth string, e.g., `10Mbit/s` or `1.5MiB/s`.
    pub fn parse_str(s: &str) -> Result<Bandwidth, ParseBandwidthError> {
        s.strip_suffix("/s")
            .and_then(|size| parse_bits(size).ok())
            .map(Bandwidth::from_bits)
            .ok_or_else(|| ParseBandwidthError::new(s))
    }

    /// Display the bandwidth in the given format.
    pub const fn display(self, format: Format) -> format::Display {
        format::Display::new(self.bits, format, "/s")
    }
}

/// Clamp a wide intermediate into the representable range.
fn clamp_i128(value: i128) -> i64 {
    math::saturate(i64::try_from(value).ok(), value < 0)
}

impl fmt::Display for Bandwidth {
    /// Formats with decimal units, `{:#}` uses binary units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            Format::BinaryUpper
        } else {
            Format::DecimalUpper
        };
        format::write_bits(f, self.bits, format, f.precision())?;
        f.write_str("/s")
    }
}

impl FromStr for Bandwidth {
    type Err = ParseBandwidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bandwidth::parse_str(s)
    }
}

impl From<Size> for Bandwidth {
    fn from(value: Size) -> Self {
        Bandwidth::per_second(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bandwidth_display() {
        let a: Bandwidth = "1.123MB/s".parse().unwrap();
        let b: Bandwidth = "3.877MB/s".parse().unwrap();
        assert_eq!((a + b).to_string(), "5MB/s");
        assert_eq!(Bandwidth::ZERO.to_string(), "0B/s");
        assert_eq!(Bandwidth::MBIT_PER_SECOND.to_string(), "125KB/s");
        assert_eq!(
            Bandwidth::MBIT_PER_SECOND.display(Format::BitsUpper).to_string(),
            "1Mbit/s"
        );
        assert_eq!(format!("{:#.1}", Bandwidth::MIB_PER_SECOND * 3 / 2), "1.5MiB/s");
    }

    #[test]
    fn test_bandwidth_parse() {
        assert_eq!(
            Bandwidth::parse_str("10Mbit/s"),
            Ok(Bandwidth::MBIT_PER_SECOND * 10)
        );
        assert_eq!(
            Bandwidth::parse_str("-2KiB/s"),
            Ok(-Bandwidth::KIB_PER_SECOND * 2)
        );
        for input in ["10Mbit", "10Mbit/s ", "/s", "10/s", "10Mbit/S", "10Mbit//s"] {
            let error = Bandwidth::parse_str(input).unwrap_err();
            assert_eq!(error.input(), input);
        }
    }

    #[test]
    fn test_bandwidth_delegation() {
        let bandwidth = Bandwidth::per_second(Size::MB + Size::KB * 500);
        assert_eq!(bandwidth.size(), Size::MB + Size::KB * 500);
        assert_eq!(bandwidth.as_megabytes_f64(), 1.5);
        assert_eq!(bandwidth.as_megabits_f64(), 12.0);
        assert_eq!(bandwidth.as_gigabytes_f64(), 0.0015);
        assert_eq!(
            bandwidth.round(Bandwidth::MB_PER_SECOND),
            Bandwidth::MB_PER_SECOND * 2
        );
        assert_eq!(
            bandwidth.truncate(Bandwidth::MB_PER_SECOND),
            Bandwidth::MB_PER_SECOND
        );
        assert_eq!((-bandwidth).abs(), bandwidth);
    }

    #[test]
    fn test_bandwidth_measure() {
        let bandwidth = Bandwidth::measure(Size::MB * 10, Duration::from_secs(2)).unwrap();
        assert_eq!(bandwidth, Bandwidth::MB_PER_SECOND * 5);
        assert_eq!(Bandwidth::measure(Size::MB, Duration::ZERO), None);
        assert_eq!(
            Bandwidth::measure(Size::MAX, Duration::from_nanos(1)),
            Some(Bandwidth::MAX)
        );
        assert_eq!(
            bandwidth.transferred_in(Duration::from_millis(500)),
            Size::KB * 2500
        );
        assert_eq!(Bandwidth::MAX.transferred_in(Duration::MAX), Size::MAX);
    }
}
