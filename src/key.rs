//! Sortable byte-key extraction for two's-complement `i32` values.
//!
//! Conventions
//! - Byte positions count from the **least-significant** byte: 0..=3.
//! - Position 3 is the sign byte; it is remapped so that key order matches
//!   signed numeric order. Lower bytes need no remapping: once the top byte
//!   has discriminated sign, ties on lower bytes follow magnitude order.

/// Number of key bytes in an `i32`.
pub const KEY_BYTES: usize = 4;

/// Number of distinct values a single key byte can take.
pub const RADIX: usize = 256;

/// Extract the sortable key of `value` at `byte` (0 = least significant).
///
/// The sign byte goes through `b ^ 0x80`, which is `(b as i8) + 128`: it maps
/// the signed range [-128, 127] onto [0, 255], so the most negative values get
/// the smallest keys. Pure and infallible; `byte` must be in 0..=3.
#[inline]
pub fn key_byte(value: i32, byte: usize) -> usize {
    debug_assert!(byte < KEY_BYTES);
    let b = (value >> (8 * byte)) as u8;
    if byte == KEY_BYTES - 1 {
        (b ^ 0x80) as usize
    } else {
        b as usize
    }
}
