//! Signed PCM bit packing at arbitrary byte-aligned widths.
//!
//! A channel value of width `W` bits is stored as `W / 8` little-endian bytes
//! holding its two's-complement bit pattern. One rule applies to every width:
//!
//! - **decode**: sign-extend the low `W` bits ([`from_unsigned`])
//! - **encode**: keep the low `W` bits of the two's-complement value ([`to_unsigned`])
//!
//! Values outside the signed range of `W` bits therefore wrap, identically for
//! 8, 16, 24, 32 or any other width. The 8/16/32/64-bit paths in
//! [`decode_sample`] and [`encode_sample`] go through the native integer
//! types, which implement the same truncation.

use core::ops::RangeInclusive;

/// Bit mask covering the low `bits` bits.
fn mask(bits: u16) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Two's-complement bit pattern of `value` truncated to `bits` bits.
pub fn to_unsigned(value: i64, bits: u16) -> u64 {
    (value as u64) & mask(bits)
}

/// Interpret the low `bits` bits of `raw` as a two's-complement integer.
///
/// Equivalent to subtracting `2^bits` when the top bit is set.
pub fn from_unsigned(raw: u64, bits: u16) -> i64 {
    if bits == 0 {
        return 0;
    }
    let shift = 64u32.saturating_sub(u32::from(bits));
    ((raw << shift) as i64) >> shift
}

/// Representable signed range at `bits` bits.
pub fn signed_range(bits: u16) -> RangeInclusive<i64> {
    match bits {
        0 => 0..=0,
        b if b >= 64 => i64::MIN..=i64::MAX,
        b => {
            let half = 1i64 << (b - 1);
            -half..=half - 1
        }
    }
}

/// Decode one channel value from its little-endian bytes.
///
/// The width is `bytes.len() * 8`; at most 8 bytes are significant.
pub fn decode_sample(bytes: &[u8]) -> i64 {
    match *bytes {
        [b0] => i64::from(i8::from_le_bytes([b0])),
        [b0, b1] => i64::from(i16::from_le_bytes([b0, b1])),
        [b0, b1, b2, b3] => i64::from(i32::from_le_bytes([b0, b1, b2, b3])),
        [b0, b1, b2, b3, b4, b5, b6, b7] => i64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
        _ => decode_general(bytes),
    }
}

/// Encode one channel value into `out`, little-endian, `out.len() * 8` bits wide.
pub fn encode_sample(value: i64, out: &mut [u8]) {
    match out.len() {
        1 => out.copy_from_slice(&(value as i8).to_le_bytes()),
        2 => out.copy_from_slice(&(value as i16).to_le_bytes()),
        4 => out.copy_from_slice(&(value as i32).to_le_bytes()),
        8 => out.copy_from_slice(&value.to_le_bytes()),
        _ => encode_general(value, out),
    }
}

fn decode_general(bytes: &[u8]) -> i64 {
    let width = bytes.len().min(8);
    let raw = bytes[..width]
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)));
    from_unsigned(raw, (width * 8) as u16)
}

fn encode_general(value: i64, out: &mut [u8]) {
    let bits = (out.len().min(8) * 8) as u16;
    let raw = to_unsigned(value, bits);
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = if i < 8 { (raw >> (8 * i)) as u8 } else { 0 };
    }
}
