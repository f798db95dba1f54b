//! # Binary Codec Module
//!
//! Fixed-width pack/unpack primitives for the record files.
//!
//! ## Why Fixed Width?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE OFFSET-ADDRESSING REQUIREMENT                                      │
//! │                                                                         │
//! │  Record i (1-based) lives at byte offset (i-1) * RECORD_SIZE.          │
//! │  That only works if EVERY field has the same size in EVERY record:     │
//! │                                                                         │
//! │    i64            → always 8 bytes                                     │
//! │    i32            → always 4 bytes                                     │
//! │    text, limit L  → always 2*L bytes (one UTF-16 unit per slot)        │
//! │                                                                         │
//! │  A text field shorter than its limit is zero-padded; longer input is   │
//! │  SILENTLY TRUNCATED to the limit. Variable-length encoding is a        │
//! │  non-goal.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Byte Order
//! Everything is big-endian, which keeps the record files byte-compatible
//! with existing JVM-written data files.
//!
//! ## Error Model
//! This codec has no domain errors. Packing or unpacking past the end of the
//! buffer is a programming error and panics via slice indexing; callers own
//! correctly sized buffers.
//!
//! ## Usage
//! ```rust
//! use prodrent_core::codec;
//!
//! let mut buf = [0u8; 28];
//! codec::pack_i64(42, &mut buf, 0);
//! codec::pack_str("drill", 10, &mut buf, 8);
//!
//! assert_eq!(codec::unpack_i64(&buf, 0), 42);
//! assert_eq!(codec::unpack_str(10, &buf, 8), "drill");
//! ```

// =============================================================================
// Integer Primitives
// =============================================================================

/// Packs a 64-bit signed integer into `buf` at `offset` (8 bytes, big-endian).
#[inline]
pub fn pack_i64(value: i64, buf: &mut [u8], offset: usize) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Unpacks a 64-bit signed integer from `buf` at `offset`.
#[inline]
pub fn unpack_i64(buf: &[u8], offset: usize) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    i64::from_be_bytes(bytes)
}

/// Packs a 32-bit signed integer into `buf` at `offset` (4 bytes, big-endian).
#[inline]
pub fn pack_i32(value: i32, buf: &mut [u8], offset: usize) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Unpacks a 32-bit signed integer from `buf` at `offset`.
#[inline]
pub fn unpack_i32(buf: &[u8], offset: usize) -> i32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    i32::from_be_bytes(bytes)
}

// =============================================================================
// Capped Text
// =============================================================================

/// Packs a string into exactly `2 * limit` bytes at `offset`.
///
/// Each character slot holds one big-endian UTF-16 code unit. Strings shorter
/// than `limit` are zero-padded; strings longer than `limit` are **silently
/// truncated** (the caller caps input lengths if truncation is unacceptable).
pub fn pack_str(value: &str, limit: usize, buf: &mut [u8], offset: usize) {
    let mut units = value.encode_utf16();
    for slot in 0..limit {
        let unit = units.next().unwrap_or(0);
        let at = offset + slot * 2;
        buf[at..at + 2].copy_from_slice(&unit.to_be_bytes());
    }
}

/// Unpacks a string from `2 * limit` bytes at `offset`.
///
/// Reads UTF-16 code units up to `limit`, stopping at the first zero unit
/// (the padding value). The returned string owns its data.
pub fn unpack_str(limit: usize, buf: &[u8], offset: usize) -> String {
    let mut units = Vec::with_capacity(limit);
    for slot in 0..limit {
        let at = offset + slot * 2;
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(&buf[at..at + 2]);
        let unit = u16::from_be_bytes(bytes);
        if unit == 0 {
            break;
        }
        units.push(unit);
    }
    String::from_utf16_lossy(&units)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn i64_round_trip_at_offset() {
        let mut buf = [0u8; 24];
        pack_i64(i64::MAX, &mut buf, 8);
        pack_i64(-1, &mut buf, 16);
        assert_eq!(unpack_i64(&buf, 8), i64::MAX);
        assert_eq!(unpack_i64(&buf, 16), -1);
        // Untouched region stays zero
        assert_eq!(unpack_i64(&buf, 0), 0);
    }

    #[test]
    fn i32_round_trip_at_offset() {
        let mut buf = [0u8; 12];
        pack_i32(i32::MIN, &mut buf, 4);
        pack_i32(7, &mut buf, 8);
        assert_eq!(unpack_i32(&buf, 4), i32::MIN);
        assert_eq!(unpack_i32(&buf, 8), 7);
    }

    #[test]
    fn i64_is_big_endian() {
        let mut buf = [0u8; 8];
        pack_i64(1, &mut buf, 0);
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn str_occupies_exactly_two_bytes_per_slot() {
        let mut buf = [0xffu8; 20];
        pack_str("ab", 10, &mut buf, 0);
        // 'a' = 0x0061, 'b' = 0x0062, then zero padding for all 8 free slots
        assert_eq!(&buf[0..4], &[0x00, 0x61, 0x00, 0x62]);
        assert!(buf[4..20].iter().all(|&b| b == 0));
    }

    #[test]
    fn str_round_trip_with_padding() {
        let mut buf = [0u8; 20];
        pack_str("drill", 10, &mut buf, 0);
        assert_eq!(unpack_str(10, &buf, 0), "drill");
    }

    #[test]
    fn str_longer_than_limit_is_truncated() {
        let mut buf = [0u8; 8];
        pack_str("abcdefgh", 4, &mut buf, 0);
        assert_eq!(unpack_str(4, &buf, 0), "abcd");
    }

    #[test]
    fn str_exactly_at_limit_has_no_padding() {
        let mut buf = [0u8; 6];
        pack_str("xyz", 3, &mut buf, 0);
        assert_eq!(unpack_str(3, &buf, 0), "xyz");
    }

    #[test]
    fn str_non_ascii_round_trip() {
        let mut buf = [0u8; 20];
        pack_str("cámara", 10, &mut buf, 0);
        assert_eq!(unpack_str(10, &buf, 0), "cámara");
    }

    #[test]
    fn empty_str_unpacks_empty() {
        let buf = [0u8; 20];
        assert_eq!(unpack_str(10, &buf, 0), "");
    }

    proptest! {
        #[test]
        fn prop_i64_round_trip(value: i64) {
            let mut buf = [0u8; 8];
            pack_i64(value, &mut buf, 0);
            prop_assert_eq!(unpack_i64(&buf, 0), value);
        }

        #[test]
        fn prop_i32_round_trip(value: i32) {
            let mut buf = [0u8; 4];
            pack_i32(value, &mut buf, 0);
            prop_assert_eq!(unpack_i32(&buf, 0), value);
        }

        // NUL-free BMP strings within the limit survive the round trip intact.
        // (NUL is the padding sentinel; longer input is covered by the
        // truncation tests above.)
        #[test]
        fn prop_str_round_trip(value in "[a-zA-Z0-9 àéíóúñç]{0,10}") {
            let mut buf = [0u8; 20];
            pack_str(&value, 10, &mut buf, 0);
            prop_assert_eq!(unpack_str(10, &buf, 0), value);
        }
    }
}
