//! Helper crate to work with _data sizes and bandwidths_.
//!
//! This crate provides three dedicated types, [`Size`], [`BitSize`], and [`Bandwidth`],
//! representing amounts of data and data per second. All of them are stored as a signed
//! 64-bit number of bits, ranging from [`Size::MIN`] to [`Size::MAX`] (one bit less than
//! 1024 PiB). Arithmetic never panics on overflow but saturates at the bounds instead.
//!
//!
//! ## Calculations
//!
//! The types implement the usual numeric operators with each other and with [`i64`]:
//!
//! ```rust
//! # use mem_units::{BitSize, Size};
//! assert_eq!(Size::KB * 3 + Size::BYTE, Size::bytes(3001));
//! assert_eq!(Size::MB / Size::KB, 1000);
//! assert_eq!(Size::MAX + Size::BIT, Size::MAX);
//! assert_eq!(Size::MIN - Size::BIT, Size::MIN);
//!
//! assert_eq!(Size::BYTE.to_bits(), BitSize::bits(8));
//! assert_eq!(BitSize::KBIT, Size::bytes(125));
//! ```
//!
//! Sizes can be truncated or rounded to multiples of other sizes:
//!
//! ```rust
//! # use mem_units::Size;
//! let size = Size::MB + Size::KB * 500;
//! assert_eq!(size.truncate(Size::MB), Size::MB);
//! assert_eq!(size.round(Size::MB), Size::MB * 2);
//! assert_eq!((-size).round(Size::MB), -Size::MB * 2);
//! ```
//!
//!
//! ## Formatting
//!
//! Formatting picks the largest unit not exceeding the size and uses the fewest
//! fractional digits that still parse back to the exact same value:
//!
//! ```rust
//! # use mem_units::{Bandwidth, BitSize, Size};
//! assert_eq!(Size::MB.to_string(), "1MB");
//! assert_eq!(Size::MIB.to_string(), "1.048576MB");
//! assert_eq!(format!("{:#}", Size::MIB), "1MiB");
//! assert_eq!(format!("{:.2}", Size::MB + Size::KB * 111), "1.11MB");
//! assert_eq!(BitSize::MBIT.to_string(), "1Mbit");
//! assert_eq!(Bandwidth::MBIT_PER_SECOND.to_string(), "125KB/s");
//! ```
//!
//! Other formats are available through [`Format`] and the selector-based [`format_size`]:
//!
//! ```rust
//! # use mem_units::{format_size, Format, Size};
//! assert_eq!(Size::GIB.display(Format::Binary).to_string(), "1gib");
//! assert_eq!(Size::GIB.display(Format::BitsUpper).to_string(), "8.589934592Gbit");
//! assert_eq!(format_size(Size::KIB * 3, b'd', -1), "3.072kb");
//! ```
//!
//!
//! ## Parsing
//!
//! Sizes must follow the following syntax:
//!
//! ```plain
//! ⟨size⟩  ::=  [ '+' | '-' ] ⟨int⟩ [ '.' ⟨int⟩ ] ⟨unit⟩
//! ⟨int⟩   ::=  [0-9]+
//! ⟨unit⟩  ::=  'bit' | 'kbit' … 'tbit' | 'b' | 'kb' … 'pb' | 'kib' … 'pib'
//! ```
//!
//! Units are either all lowercase or capitalized as in `Bit`, `Kbit`, `B`, `KB`, and `KiB`.
//! A unit is mandatory, even for zero.
//!
//! ```rust
//! # use mem_units::{Bandwidth, BitSize, Size};
//! assert_eq!("1.5KiB".parse::<Size>(), Ok(Size::bytes(1536)));
//! assert_eq!("-64kb".parse::<Size>(), Ok(-Size::KB * 64));
//! assert_eq!("8.888Mbit".parse::<BitSize>(), "1.111MB".parse());
//! assert_eq!("10Mbit/s".parse::<Bandwidth>(), Ok(Bandwidth::MBIT_PER_SECOND * 10));
//! assert!("0".parse::<Size>().is_err());
//! assert!("1 KB".parse::<Size>().is_err());
//! ```
//!
//! Every formatted value parses back to the exact same value:
//!
//! ```rust
//! # use mem_units::Size;
//! let size = Size::GIB * 7 + Size::BIT * 3;
//! assert_eq!(size.to_string().parse::<Size>(), Ok(size));
//! ```
//!
//!
//! ## Serialization and Deserialization
//!
//! By enabling the `serde` feature, [`Size`], [`BitSize`], and [`Bandwidth`] can be
//! serialized and deserialized. They always serialize as [`i64`] numbers of bits.
//! Deserialization is also supported from strings, e.g., `"64MiB"` or `"10Mbit/s"`.
//!
//!
//! ## I/O
//!
//! The [`io`] module provides [`io::ByteLen`], [`io::limit_reader`], and
//! [`io::ProgressReader`] for measuring and limiting data streams.

mod macros;

pub mod errors;
pub mod format;
pub mod io;
pub mod math;
pub mod units;

mod bandwidth;
mod bitsize;
mod parse;
#[cfg(feature = "serde")]
mod serde;
mod size;

pub use crate::bandwidth::Bandwidth;
pub use crate::bitsize::BitSize;
pub use crate::errors::{ParseBandwidthError, ParseSizeError};
pub use crate::format::{format_bandwidth, format_bit_size, format_size, Format};
pub use crate::size::Size;
pub use crate::units::{Case, Unit};
