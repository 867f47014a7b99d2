//! Saturating integer primitives shared by all quantity types.
//!
//! All quantities are stored as [`i64`] numbers of bits. The value [`i64::MIN`] has no
//! positive counterpart and is therefore reserved: it is never returned from any public
//! operation of this crate.

/// Largest representable value.
pub const MAX: i64 = i64::MAX;

/// Smallest representable value, one more than [`i64::MIN`].
pub const MIN: i64 = i64::MIN + 1;

/// Absolute value of `v`.
///
/// As a special case, [`i64::MIN`] is mapped to [`i64::MAX`].
pub const fn abs(v: i64) -> i64 {
    if v >= 0 {
        v
    } else if v == i64::MIN {
        MAX
    } else {
        -v
    }
}

/// Round `v` towards zero to a multiple of `m`.
///
/// If `m <= 0`, `v` is returned unchanged.
pub const fn truncate(v: i64, m: i64) -> i64 {
    if m <= 0 {
        return v;
    }
    v - v % m
}

/// Round `v` to the nearest multiple of `m`, rounding halfway values away from zero.
///
/// Results beyond the representable range saturate to [`MAX`] or [`MIN`], respectively.
/// If `m <= 0`, `v` is returned unchanged.
pub const fn round(v: i64, m: i64) -> i64 {
    if m <= 0 {
        return v;
    }
    if v < 0 {
        // Remainder of the magnitude, always in `0..m`.
        let r = -(v % m);
        if less_than_half(r, m) {
            return v + r;
        }
        match (v + r).checked_sub(m) {
            Some(rounded) if rounded != i64::MIN => rounded,
            _ => MIN,
        }
    } else {
        let r = v % m;
        if less_than_half(r, m) {
            return v - r;
        }
        match (v - r).checked_add(m) {
            Some(rounded) => rounded,
            None => MAX,
        }
    }
}

/// Checks whether `2 * x < y` for `0 <= x < y` without overflowing.
const fn less_than_half(x: i64, y: i64) -> bool {
    (x as u64) + (x as u64) < y as u64
}

/// Remap the reserved [`i64::MIN`] to [`MAX`].
pub(crate) const fn remap_sentinel(v: i64) -> i64 {
    if v == i64::MIN {
        MAX
    } else {
        v
    }
}

/// Saturate the result of a checked operation.
///
/// `negative` indicates the sign of the exact result and decides the bound in case of an
/// overflow. A result of [`i64::MIN`] counts as an overflow.
pub(crate) const fn saturate(result: Option<i64>, negative: bool) -> i64 {
    match result {
        Some(value) if value != i64::MIN => value,
        _ if negative => MIN,
        _ => MAX,
    }
}
