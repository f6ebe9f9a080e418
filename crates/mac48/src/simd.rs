//! AVX2 kernels for the fixed-width codec.
//!
//! Compiled only when AVX2 is statically enabled (the dispatch in
//! [`crate::parse`] and [`crate::format`] falls back to [`crate::scalar`]
//! otherwise). The scalar kernels are the executable specification for
//! everything here; the differential property tests hold the two paths to
//! bit-for-bit agreement.
//!
//! Parse direction, over a single 32-byte register:
//!
//! 1. load the window
//! 2. gather the five delimiter bytes and compare them in one shot
//!    (validation only)
//! 3. compact the twelve digit bytes into contiguous lanes; the digit at
//!    offset 16 lives in the upper 128-bit half, so the halves are swapped
//!    first and the stray byte merged in (`vpshufb` cannot cross halves)
//! 4. clear the ASCII case bit, classify digits with signed range compares,
//!    optionally reject non-hex lanes
//! 5. select digit-value or letter-value per lane, combine each pair with a
//!    widening multiply-add (weights 16 and 1), compact the six result
//!    bytes, extract, byte-swap, shift
//!
//! The format direction mirrors it: mask, byte-swap, split nibbles, look
//! both up in a replicated 16-entry digit table, interleave, shuffle into
//! the 17-character layout, blend the delimiter in, store 16 bytes plus one
//! scalar tail byte.

use core::arch::x86_64::{
    __m128i, __m256i, _mm_storeu_si128, _mm256_and_si256, _mm256_andnot_si256,
    _mm256_blendv_epi8, _mm256_castsi256_si128, _mm256_cmpeq_epi8,
    _mm256_cmpgt_epi8, _mm256_extract_epi8, _mm256_extract_epi64, _mm256_loadu_si256,
    _mm256_maddubs_epi16, _mm256_movemask_epi8, _mm256_or_si256, _mm256_permute2x128_si256,
    _mm256_set1_epi8, _mm256_set1_epi16, _mm256_set1_epi64x, _mm256_setr_epi8,
    _mm256_shuffle_epi8, _mm256_srli_epi64, _mm256_sub_epi8,
};

use crate::options::MacOptions;
use crate::{MAC_MASK, MAC_STR_LEN};

/// Parse one 32-byte window into a 48-bit value.
///
/// # Safety
///
/// `ptr` must point to at least [`crate::WINDOW_LEN`] readable bytes; the
/// load is unconditional and width-constant regardless of how much of the
/// window is meaningful.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn parse_window(ptr: *const u8, opts: MacOptions) -> Option<u64> {
    // SAFETY: the caller guarantees WINDOW_LEN readable bytes; the unaligned
    // load has no alignment requirement.
    let chunk = unsafe { _mm256_loadu_si256(ptr.cast::<__m256i>()) };

    if opts.validate_delimiters {
        // Gather the five delimiter bytes into the low lanes; indices with
        // the high bit set zero their lane.
        #[rustfmt::skip]
        let delimiter_idx = _mm256_setr_epi8(
               2,    5,    8,   11,   14, -128, -128, -128,
            -128, -128, -128, -128, -128, -128, -128, -128,
            -128, -128, -128, -128, -128, -128, -128, -128,
            -128, -128, -128, -128, -128, -128, -128, -128,
        );
        let delimiter_bytes = _mm256_shuffle_epi8(chunk, delimiter_idx);
        let eq = _mm256_cmpeq_epi8(delimiter_bytes, _mm256_set1_epi8(opts.delimiter as i8));
        let mask = _mm256_movemask_epi8(eq) as u32;
        if mask & 0x1F != 0x1F {
            return None;
        }
    }

    // Compact the twelve digit bytes, dropping the five delimiters. vpshufb
    // shuffles within each 128-bit half, and the digit at offset 16 sits in
    // the upper half: swap the halves, extract that one byte into lane 11,
    // and merge.
    #[rustfmt::skip]
    let compact_lo_idx = _mm256_setr_epi8(
           0,    1,    3,    4,    6,    7,    9,   10,
          12,   13,   15, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    let digits_lo = _mm256_shuffle_epi8(chunk, compact_lo_idx);
    let swapped = _mm256_permute2x128_si256(chunk, chunk, 0x11);
    #[rustfmt::skip]
    let compact_hi_idx = _mm256_setr_epi8(
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128,    0, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    let digits_hi = _mm256_shuffle_epi8(swapped, compact_hi_idx);
    let digits = _mm256_or_si256(digits_lo, digits_hi);

    // Upper-cased copy: clearing 0x20 never affects '0'..'9'.
    let upper = _mm256_andnot_si256(_mm256_set1_epi8(0x20), digits);

    let is_digit = _mm256_and_si256(
        _mm256_cmpgt_epi8(digits, _mm256_set1_epi8(b'0' as i8 - 1)),
        _mm256_cmpgt_epi8(_mm256_set1_epi8(b'9' as i8 + 1), digits),
    );

    if opts.validate_hex {
        let is_alpha = _mm256_and_si256(
            _mm256_cmpgt_epi8(upper, _mm256_set1_epi8(b'A' as i8 - 1)),
            _mm256_cmpgt_epi8(_mm256_set1_epi8(b'F' as i8 + 1), upper),
        );
        let is_valid = _mm256_or_si256(is_digit, is_alpha);
        // Only the twelve compacted lanes matter.
        let mask = _mm256_movemask_epi8(is_valid) as u32;
        if mask & 0x0FFF != 0x0FFF {
            return None;
        }
    }

    let digit_val = _mm256_sub_epi8(digits, _mm256_set1_epi8(b'0' as i8));
    let alpha_val = _mm256_sub_epi8(upper, _mm256_set1_epi8((b'A' - 10) as i8));
    let values = _mm256_blendv_epi8(alpha_val, digit_val, is_digit);

    // Each adjacent (hi, lo) pair becomes hi * 16 + lo in a 16-bit lane.
    // vpmaddubsw: (unsigned a0 * signed b0) + (unsigned a1 * signed b1),
    // so the per-lane weights are (0x10, 0x01).
    let packed = _mm256_maddubs_epi16(values, _mm256_set1_epi16(0x0110));

    // Low byte of each of the six 16-bit lanes, compacted to the front.
    #[rustfmt::skip]
    let result_idx = _mm256_setr_epi8(
           0,    2,    4,    6,    8,   10, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    let octets = _mm256_shuffle_epi8(packed, result_idx);

    // The six octets sit in textual (big-endian) order in the low 64 bits;
    // byte-swap and drop the two zero-filled tail bytes.
    let raw = _mm256_extract_epi64::<0>(octets) as u64;
    Some(raw.swap_bytes() >> 16)
}

/// Format a 48-bit value into the caller's 17-byte buffer.
///
/// Bits above 48 are masked off. Always writes all 17 bytes. `unsafe` only
/// because AVX2 must be available, which the dispatch in [`crate::format`]
/// guarantees at compile time.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn format_into(value: u64, opts: MacOptions, out: &mut [u8; MAC_STR_LEN]) {
    // Mask, then byte-swap so the six octets land in textual order in the
    // low 8 bytes (two zero tail bytes follow them).
    let raw = ((value & MAC_MASK) << 16).swap_bytes();
    let octets = _mm256_set1_epi64x(raw as i64);

    let hi_nibbles = _mm256_and_si256(_mm256_srli_epi64::<4>(octets), _mm256_set1_epi8(0x0F));
    let lo_nibbles = _mm256_and_si256(octets, _mm256_set1_epi8(0x0F));

    // 16-entry digit table, replicated per 128-bit half for vpshufb.
    #[rustfmt::skip]
    let digits = if opts.uppercase {
        _mm256_setr_epi8(
            b'0' as i8, b'1' as i8, b'2' as i8, b'3' as i8,
            b'4' as i8, b'5' as i8, b'6' as i8, b'7' as i8,
            b'8' as i8, b'9' as i8, b'A' as i8, b'B' as i8,
            b'C' as i8, b'D' as i8, b'E' as i8, b'F' as i8,
            b'0' as i8, b'1' as i8, b'2' as i8, b'3' as i8,
            b'4' as i8, b'5' as i8, b'6' as i8, b'7' as i8,
            b'8' as i8, b'9' as i8, b'A' as i8, b'B' as i8,
            b'C' as i8, b'D' as i8, b'E' as i8, b'F' as i8,
        )
    } else {
        _mm256_setr_epi8(
            b'0' as i8, b'1' as i8, b'2' as i8, b'3' as i8,
            b'4' as i8, b'5' as i8, b'6' as i8, b'7' as i8,
            b'8' as i8, b'9' as i8, b'a' as i8, b'b' as i8,
            b'c' as i8, b'd' as i8, b'e' as i8, b'f' as i8,
            b'0' as i8, b'1' as i8, b'2' as i8, b'3' as i8,
            b'4' as i8, b'5' as i8, b'6' as i8, b'7' as i8,
            b'8' as i8, b'9' as i8, b'a' as i8, b'b' as i8,
            b'c' as i8, b'd' as i8, b'e' as i8, b'f' as i8,
        )
    };
    let hi_chars = _mm256_shuffle_epi8(digits, hi_nibbles);
    let lo_chars = _mm256_shuffle_epi8(digits, lo_nibbles);

    // Interleave within the low half: H0 L0 H1 L1 ... (twelve significant
    // characters in lanes 0..12).
    #[rustfmt::skip]
    let interleave_hi_idx = _mm256_setr_epi8(
           0, -128,    1, -128,    2, -128,    3, -128,
           4, -128,    5, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    #[rustfmt::skip]
    let interleave_lo_idx = _mm256_setr_epi8(
        -128,    0, -128,    1, -128,    2, -128,    3,
        -128,    4, -128,    5, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    let hex_chars = _mm256_or_si256(
        _mm256_shuffle_epi8(hi_chars, interleave_hi_idx),
        _mm256_shuffle_epi8(lo_chars, interleave_lo_idx),
    );

    // Spread into the 17-character layout, leaving the delimiter slots
    // zeroed; the 17th character does not fit the 16-byte store and is
    // extracted separately below.
    #[rustfmt::skip]
    let layout_idx = _mm256_setr_epi8(
           0,    1, -128,    2,    3, -128,    4,    5,
        -128,    6,    7, -128,    8,    9, -128,   10,
        -128, -128, -128, -128, -128, -128, -128, -128,
        -128, -128, -128, -128, -128, -128, -128, -128,
    );
    let spread = _mm256_shuffle_epi8(hex_chars, layout_idx);

    // Blend the delimiter into slots 2, 5, 8, 11 and 14.
    #[rustfmt::skip]
    let delimiter_mask = _mm256_setr_epi8(
        0, 0, -128, 0, 0, -128, 0, 0,
        -128, 0, 0, -128, 0, 0, -128, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
    );
    let merged = _mm256_blendv_epi8(spread, _mm256_set1_epi8(opts.delimiter as i8), delimiter_mask);

    // SAFETY: `out` is exactly MAC_STR_LEN (17) bytes, so a 16-byte
    // unaligned store at its start is in bounds.
    unsafe { _mm_storeu_si128(out.as_mut_ptr().cast::<__m128i>(), _mm256_castsi256_si128(merged)) };
    out[MAC_STR_LEN - 1] = _mm256_extract_epi8::<11>(hex_chars) as u8;
}
