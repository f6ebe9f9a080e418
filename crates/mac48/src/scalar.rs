//! Portable reference kernels.
//!
//! These implement the exact algorithm of the vector kernels with ordinary
//! loops, one lane at a time, including the signed byte comparisons and
//! wrapping arithmetic of the vector path. The two paths therefore agree
//! bit for bit even on garbage input that only a validation-off
//! configuration will ever decode.
//!
//! The module is public: it is the baseline for the differential property
//! tests and the benchmark suite, and it is the dispatch target on builds
//! without AVX2.

use crate::options::MacOptions;
use crate::{MAC_MASK, MAC_STR_LEN, WINDOW_LEN};

/// Delimiter offsets within the 17-byte textual form.
const DELIMITER_OFFSETS: [usize; 5] = [2, 5, 8, 11, 14];

/// Hex-digit offsets within the 17-byte textual form, in reading order.
const DIGIT_OFFSETS: [usize; 12] = [0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, 16];

/// Parse one fixed-size window into a 48-bit value.
///
/// The window is always [`WINDOW_LEN`] bytes; bytes past offset 16 are never
/// interpreted. Returns `None` only for validation failures, so a caller
/// with validation disabled always gets a (possibly meaningless) value.
pub fn parse_window(window: &[u8; WINDOW_LEN], opts: MacOptions) -> Option<u64> {
    if opts.validate_delimiters {
        for &offset in &DELIMITER_OFFSETS {
            if window[offset] != opts.delimiter {
                return None;
            }
        }
    }

    let mut value: u64 = 0;
    for pair in 0..6 {
        let hi = decode_digit(window[DIGIT_OFFSETS[pair * 2]], opts.validate_hex)?;
        let lo = decode_digit(window[DIGIT_OFFSETS[pair * 2 + 1]], opts.validate_hex)?;
        // Low byte of hi * 16 + lo, exactly like the widening multiply-add
        // in the vector kernel.
        let octet = (hi << 4).wrapping_add(lo);
        value = (value << 8) | u64::from(octet);
    }
    Some(value)
}

/// Decode one ASCII hex digit to its numeric value.
///
/// Comparisons are signed and the case bit is cleared unconditionally to
/// mirror `cmpgt`/`andnot` in the vector kernel; with validation off, bytes
/// outside `[0-9A-Fa-f]` decode through the same arithmetic as valid ones.
fn decode_digit(raw: u8, validate: bool) -> Option<u8> {
    let upper = raw & !0x20;
    let is_digit = (raw as i8) > b'0' as i8 - 1 && (raw as i8) < b'9' as i8 + 1;
    if validate {
        let is_alpha = (upper as i8) > b'A' as i8 - 1 && (upper as i8) < b'F' as i8 + 1;
        if !is_digit && !is_alpha {
            return None;
        }
    }
    if is_digit {
        Some(raw.wrapping_sub(b'0'))
    } else {
        Some(upper.wrapping_sub(b'A' - 10))
    }
}

/// Format a 48-bit value into the caller's 17-byte buffer.
///
/// Bits above 48 are masked off. Always writes all 17 bytes.
pub fn format_into(value: u64, opts: MacOptions, out: &mut [u8; MAC_STR_LEN]) {
    let digits: &[u8; 16] = if opts.uppercase {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };

    let value = value & MAC_MASK;
    for octet in 0..6 {
        let byte = (value >> ((5 - octet) * 8)) as u8;
        let pos = octet * 3;
        out[pos] = digits[usize::from(byte >> 4)];
        out[pos + 1] = digits[usize::from(byte & 0x0F)];
        if octet < 5 {
            out[pos + 2] = opts.delimiter;
        }
    }
}
