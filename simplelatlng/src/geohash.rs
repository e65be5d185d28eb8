//! Geohash encoding and decoding.
//!
//! Hashes are always produced at [`PRECISION`] characters, which carries
//! [`BITS_PER_VALUE`] bits for each of latitude and longitude. That is enough
//! resolution for a decoded hash to land back on the micro-degree it was
//! encoded from.
//!
//! ## Features
//!
//! - **Fixed width**: `hash` always yields 12 lowercase characters
//! - **Case-insensitive decoding**: `"EZS42"` and `"ezs42"` decode identically
//! - **Exact recovery**: decoding works on integer multiples of the smallest
//!   bit value, so the rounding back to micro-degrees never drifts
//!
//! Hashes shorter than [`PRECISION`] decode to the center of their cell and are
//! not guaranteed to re-hash to a prefix of themselves: `"s"` decodes to
//! `(22.5, 22.5)`, which hashes to `"ss0000000000"`.

use log::trace;
use std::sync::OnceLock;

use crate::degree::{FixedDegree, MICROS_PER_DEGREE};
use crate::errors::{LatLngError, LatLngResult};
use crate::latlng::LatLng;

/// Characters in a full hash.
pub const PRECISION: usize = 12;

/// Bits carried for each of latitude and longitude.
pub const BITS_PER_VALUE: usize = (PRECISION * 5) / 2 + PRECISION % 2;

const BITS_PER_CHAR: usize = 5;
const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";
const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

// Compile-time assertion that both values fill the hash exactly
const _: () = {
    const TOTAL_BITS: usize = PRECISION * BITS_PER_CHAR;
    const _: [(); 1] = [(); (2 * BITS_PER_VALUE == TOTAL_BITS) as usize];
};

/// Bit values are stored in units of `1e-6 / 2^BITS_PER_VALUE` degrees.
const SCALE: i64 = 1 << BITS_PER_VALUE;

struct CodecTables {
    latitude_bits: [i64; BITS_PER_VALUE],
    longitude_bits: [i64; BITS_PER_VALUE],
    char_values: [Option<u8>; 128],
}

fn tables() -> &'static CodecTables {
    static TABLES: OnceLock<CodecTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let latitude_micros = 90 * MICROS_PER_DEGREE;
        let longitude_micros = 180 * MICROS_PER_DEGREE;
        let mut latitude_bits = [0i64; BITS_PER_VALUE];
        let mut longitude_bits = [0i64; BITS_PER_VALUE];
        // bit i is worth range / 2^(i + 1)
        for i in 0..BITS_PER_VALUE {
            let shift = BITS_PER_VALUE - i - 1;
            latitude_bits[i] = latitude_micros << shift;
            longitude_bits[i] = longitude_micros << shift;
        }

        let mut char_values = [None; 128];
        for (value, &ch) in ALPHABET.iter().enumerate() {
            char_values[ch as usize] = Some(value as u8);
        }

        CodecTables {
            latitude_bits,
            longitude_bits,
            char_values,
        }
    })
}

/// The bits for one value, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueBits {
    pub(crate) bits: u64,
    pub(crate) len: usize,
}

impl ValueBits {
    fn get(&self, index: usize) -> bool {
        (self.bits >> (self.len - index - 1)) & 1 == 1
    }
}

/// Which rounding attempt produced a decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    HalfUp,
    TowardEnvelope,
    Truncated,
}

/// Hashes a point to a 12 character geohash.
///
/// ## Example
///
/// ```rust
/// use simplelatlng::{geohash, LatLng};
///
/// let point = LatLng::new(44.869797, 6.599944).unwrap();
/// assert_eq!(geohash::hash(&point), "spuxq0mctb6u");
/// ```
pub fn hash(point: &LatLng) -> String {
    let latitude = value_to_bits(point.latitude(), MAX_LATITUDE);
    let longitude = value_to_bits(point.longitude(), MAX_LONGITUDE);
    let interleaved = interleave(longitude, latitude);

    let total = PRECISION * BITS_PER_CHAR;
    (0..PRECISION)
        .map(|i| {
            let shift = total - (i + 1) * BITS_PER_CHAR;
            let index = ((interleaved >> shift) & 0x1f) as usize;
            ALPHABET[index] as char
        })
        .collect()
}

/// Decodes a geohash of any length to a point.
///
/// Characters beyond [`PRECISION`] are validated but otherwise ignored.
///
/// # Errors
/// Returns [`LatLngError::InvalidGeohash`] for an empty string or one
/// containing characters outside `[0-9bcdefghjkmnpqrstuvwxyz]`.
pub fn decode(hash: &str) -> LatLngResult<LatLng> {
    let (bits, len) = hash_to_bits(hash)?;
    let (longitude, latitude) = de_interleave(bits, len);

    let tables = tables();
    let (latitude, lat_rounding) = bits_to_micros(latitude, &tables.latitude_bits);
    let (longitude, lng_rounding) = bits_to_micros(longitude, &tables.longitude_bits);
    trace!(
        "Decoded {} with latitude rounding {:?} and longitude rounding {:?}",
        hash,
        lat_rounding,
        lng_rounding
    );

    Ok(LatLng::from_fixed(
        FixedDegree::from_micros(latitude),
        FixedDegree::from_micros(longitude),
    ))
}

/// Maps a hash to its bitstream, first character in the high bits.
///
/// Returns the bits and how many of them are in use.
pub(crate) fn hash_to_bits(hash: &str) -> LatLngResult<(u64, usize)> {
    if hash.is_empty() {
        return Err(LatLngError::InvalidGeohash(
            "geohash string cannot be empty".to_string(),
        ));
    }

    let tables = tables();
    let mut bits = 0u64;
    let mut len = 0usize;
    for (position, ch) in hash.chars().enumerate() {
        let value = char_value(tables, ch).ok_or_else(|| {
            LatLngError::InvalidGeohash(format!(
                "invalid character '{}' at position {} in '{}'",
                ch, position, hash
            ))
        })?;
        if position < PRECISION {
            bits = (bits << BITS_PER_CHAR) | value as u64;
            len += BITS_PER_CHAR;
        }
    }
    Ok((bits, len))
}

fn char_value(tables: &CodecTables, ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    tables.char_values[ch.to_ascii_lowercase() as usize]
}

/// Splits a bitstream into its longitude (even positions, counted from the
/// most significant bit) and latitude (odd positions) halves.
pub(crate) fn de_interleave(bits: u64, len: usize) -> (ValueBits, ValueBits) {
    let mut longitude = ValueBits { bits: 0, len: 0 };
    let mut latitude = ValueBits { bits: 0, len: 0 };
    for position in 0..len {
        let bit = (bits >> (len - position - 1)) & 1;
        let target = if position % 2 == 0 {
            &mut longitude
        } else {
            &mut latitude
        };
        target.bits = (target.bits << 1) | bit;
        target.len += 1;
    }
    (longitude, latitude)
}

fn interleave(even: u64, odd: u64) -> u64 {
    let mut bits = 0u64;
    for i in 0..BITS_PER_VALUE {
        let shift = BITS_PER_VALUE - i - 1;
        bits = (bits << 1) | ((even >> shift) & 1);
        bits = (bits << 1) | ((odd >> shift) & 1);
    }
    bits
}

/// Binary search over `[-max_range, max_range]`, one bit per halving.
fn value_to_bits(value: f64, max_range: f64) -> u64 {
    let mut min = -max_range;
    let mut max = max_range;
    let mut bits = 0u64;
    for _ in 0..BITS_PER_VALUE {
        let mid = (min + max) / 2.0;
        bits <<= 1;
        if value >= mid {
            bits |= 1;
            min = mid;
        } else {
            max = mid;
        }
    }
    bits
}

/// Accumulates the bit values and rounds the result to micro-degrees.
///
/// The rounded value has to stay within one bit value of the sum before the
/// final bit; otherwise it would hash back to a different cell.
fn bits_to_micros(bits: ValueBits, bit_values: &[i64; BITS_PER_VALUE]) -> (i64, Rounding) {
    let mut value = 0i64;
    let mut last_value = 0i64;
    for i in 0..bits.len {
        last_value = value;
        if bits.get(i) {
            value += bit_values[i];
        } else {
            value -= bit_values[i];
        }
    }

    let rounded = round_half_up(value);
    if bits.len < 2 {
        return (rounded, Rounding::HalfUp);
    }

    let bound = bit_values[bits.len - 2];
    let min = last_value - bound;
    let max = last_value + bound;
    let within = |micros: i64| {
        let scaled = micros * SCALE;
        scaled >= min && scaled <= max
    };

    if within(rounded) {
        return (rounded, Rounding::HalfUp);
    }
    let directed = if rounded * SCALE > max {
        value.div_euclid(SCALE)
    } else {
        -(-value).div_euclid(SCALE)
    };
    if within(directed) {
        return (directed, Rounding::TowardEnvelope);
    }
    (value / SCALE, Rounding::Truncated)
}

/// Rounds to the nearest micro-degree, ties away from zero.
fn round_half_up(value: i64) -> i64 {
    let magnitude = value.abs();
    let mut quotient = magnitude / SCALE;
    if 2 * (magnitude % SCALE) >= SCALE {
        quotient += 1;
    }
    if value < 0 {
        -quotient
    } else {
        quotient
    }
}
