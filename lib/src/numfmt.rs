//! Stack-only integer formatting for `no_std` contexts.
//!
//! Both formatters return an owned [`NumStr`]: a fixed-capacity inline byte
//! buffer holding the formatted text plus a NUL terminator, so the result can
//! be handed directly to NUL-scanning consumers (the text console's
//! `write_string` stops at the terminator). No heap, no allocator, no shared
//! scratch storage; every call yields an independent value.
//!
//! ```ignore
//! let dec = to_decimal(-42);   // "-42"
//! let hex = to_hex(1234);      // "0x4d2"
//! console.write_string(hex.as_bytes_with_nul());
//! ```

use core::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Worst case is decimal `i64::MIN`: '-' + 19 digits + NUL.
/// (Hex needs at most "0x" + 16 nibbles + NUL = 19.)
const NUM_STR_CAP: usize = 21;

// ---------------------------------------------------------------------------
// NumStr --- owned formatting result
// ---------------------------------------------------------------------------

/// Owned, fixed-capacity formatted number.
///
/// The stored text is always NUL-terminated. Unused tail bytes are zero.
#[derive(Clone, Copy)]
pub struct NumStr {
    buf: [u8; NUM_STR_CAP],
    len: usize,
}

impl NumStr {
    const fn empty() -> Self {
        Self {
            buf: [0; NUM_STR_CAP],
            len: 0,
        }
    }

    /// Append one byte. Internal; callers never exceed `NUM_STR_CAP - 1`,
    /// leaving the final slot for the NUL terminator.
    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Formatted text without the NUL terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Formatted text including the NUL terminator, for NUL-scanning
    /// consumers.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..self.len + 1]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        crate::string::bytes_as_str(&self.buf)
    }

    /// Text length in bytes, not counting the NUL terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for NumStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for NumStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NumStr").field(&self.as_str()).finish()
    }
}

// ---------------------------------------------------------------------------
// Shared primitive
// ---------------------------------------------------------------------------

/// Reverse `bytes` in place, swapping from both ends inward.
///
/// Both formatters emit digits least-significant-first and then reverse the
/// digit region so it reads most-significant-first.
pub fn reverse_in_place(bytes: &mut [u8]) {
    if bytes.is_empty() {
        return;
    }
    let mut start = 0;
    let mut end = bytes.len() - 1;
    while start < end {
        bytes.swap(start, end);
        start += 1;
        end -= 1;
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

/// Format `value` as minimal decimal digits, `"0"` for zero.
///
/// Negative values render as `'-'` followed by the magnitude's digits;
/// `i64::MIN` is widened through `u64` so the negation cannot overflow.
pub fn to_decimal(value: i64) -> NumStr {
    let mut out = NumStr::empty();
    if value < 0 {
        out.push(b'-');
    }
    let digits_at = out.len;

    let mut n = value.unsigned_abs();
    loop {
        out.push(b'0' + (n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let end = out.len;
    reverse_in_place(&mut out.buf[digits_at..end]);
    out
}

/// Format `value` as `"0x"` followed by minimal lowercase hex digits of its
/// 64-bit two's-complement bit pattern, `"0x0"` for zero.
///
/// The prefix occupies the first two bytes before the digit loop runs; digit
/// emission and reversal only touch the region after it.
pub fn to_hex(value: i64) -> NumStr {
    let mut out = NumStr::empty();
    out.push(b'0');
    out.push(b'x');

    let mut n = value as u64;
    loop {
        out.push(HEX_DIGITS[(n % 16) as usize]);
        n /= 16;
        if n == 0 {
            break;
        }
    }

    let end = out.len;
    reverse_in_place(&mut out.buf[2..end]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_zero_is_single_digit() {
        let s = to_decimal(0);
        assert_eq!(s.as_str(), "0");
        assert_eq!(s.as_bytes_with_nul(), b"0\0");
    }

    #[test]
    fn decimal_positive_values() {
        assert_eq!(to_decimal(7).as_str(), "7");
        assert_eq!(to_decimal(10).as_str(), "10");
        assert_eq!(to_decimal(1234).as_str(), "1234");
        assert_eq!(to_decimal(1_000_000_007).as_str(), "1000000007");
    }

    #[test]
    fn decimal_has_no_leading_zeros() {
        assert_eq!(to_decimal(5000).as_str(), "5000");
        assert_eq!(to_decimal(90).as_str(), "90");
    }

    #[test]
    fn decimal_negative_values() {
        assert_eq!(to_decimal(-1).as_str(), "-1");
        assert_eq!(to_decimal(-1234).as_str(), "-1234");
    }

    #[test]
    fn decimal_extremes_fit_the_buffer() {
        assert_eq!(to_decimal(i64::MAX).as_str(), "9223372036854775807");
        assert_eq!(to_decimal(i64::MIN).as_str(), "-9223372036854775808");
    }

    #[test]
    fn hex_zero_is_0x0() {
        let s = to_hex(0);
        assert_eq!(s.as_str(), "0x0");
        assert_eq!(s.as_bytes_with_nul(), b"0x0\0");
    }

    #[test]
    fn hex_minimal_lowercase_digits() {
        assert_eq!(to_hex(1234).as_str(), "0x4d2");
        assert_eq!(to_hex(0xdead_beef).as_str(), "0xdeadbeef");
        assert_eq!(to_hex(16).as_str(), "0x10");
        assert_eq!(to_hex(15).as_str(), "0xf");
    }

    #[test]
    fn hex_negative_formats_bit_pattern() {
        assert_eq!(to_hex(-1).as_str(), "0xffffffffffffffff");
        assert_eq!(to_hex(i64::MIN).as_str(), "0x8000000000000000");
    }

    #[test]
    fn every_result_is_nul_terminated() {
        for value in [0, 1, -1, 42, -42, i64::MAX, i64::MIN] {
            let s = to_decimal(value);
            assert_eq!(s.as_bytes_with_nul()[s.len()], 0);
            let h = to_hex(value);
            assert_eq!(h.as_bytes_with_nul()[h.len()], 0);
        }
    }

    #[test]
    fn reversal_is_an_involution() {
        let original = *b"0123456";
        for len in 0..=original.len() {
            let mut twice = original;
            reverse_in_place(&mut twice[..len]);
            reverse_in_place(&mut twice[..len]);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn reversal_reverses() {
        let mut buf = *b"abcde";
        reverse_in_place(&mut buf);
        assert_eq!(&buf, b"edcba");
    }
}
