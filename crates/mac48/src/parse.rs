//! Text-to-integer direction of the codec.

use crate::options::MacOptions;
use crate::{MAC_STR_LEN, WINDOW_LEN};

/// Parse a textual MAC address into the low 48 bits of a `u64`.
///
/// Accepts any slice. Inputs shorter than [`MAC_STR_LEN`] return `None`;
/// bytes past offset 16 are ignored. The slice is copied into a zeroed
/// [`WINDOW_LEN`]-byte stack buffer before the engine runs, so no read ever
/// leaves the input's bounds; that copy is the only overhead over
/// [`parse_mac_unchecked`].
///
/// ```
/// use mac48::{MacOptions, parse_mac};
///
/// assert_eq!(parse_mac(b"01:23:45:67:89:ab", MacOptions::DEFAULT), Some(0x0123_4567_89AB));
/// assert_eq!(parse_mac(b"too short", MacOptions::DEFAULT), None);
/// ```
#[must_use]
pub fn parse_mac(text: &[u8], opts: MacOptions) -> Option<u64> {
    if text.len() < MAC_STR_LEN {
        return None;
    }
    let mut window = [0u8; WINDOW_LEN];
    let copy_len = text.len().min(WINDOW_LEN);
    window[..copy_len].copy_from_slice(&text[..copy_len]);
    // SAFETY: `window` is a stack array of exactly WINDOW_LEN readable bytes.
    unsafe { parse_mac_unchecked(&window, opts) }
}

/// Parse without the bounded-read copy.
///
/// The engine always reads a full [`WINDOW_LEN`]-byte window starting at
/// `text.as_ptr()`, regardless of `text.len()`, to keep the transformation
/// width-constant and branch-free. Returns `None` when the declared length
/// is below [`MAC_STR_LEN`] or when an enabled validation rejects the input;
/// rejection is the only failure surface, never a panic.
///
/// # Safety
///
/// At least [`WINDOW_LEN`] (32) bytes must be readable from `text.as_ptr()`,
/// even though only the first 17 are ever interpreted. Callers that cannot
/// guarantee this must use [`parse_mac`].
#[must_use]
pub unsafe fn parse_mac_unchecked(text: &[u8], opts: MacOptions) -> Option<u64> {
    if text.len() < MAC_STR_LEN {
        return None;
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        // SAFETY: the caller guarantees WINDOW_LEN readable bytes, and AVX2
        // is statically enabled when this branch is compiled.
        return unsafe { crate::simd::parse_window(text.as_ptr(), opts) };
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
    {
        // SAFETY: the caller guarantees WINDOW_LEN readable bytes at the
        // slice's start, which is exactly the array being reborrowed.
        let window = unsafe { &*text.as_ptr().cast::<[u8; WINDOW_LEN]>() };
        return crate::scalar::parse_window(window, opts);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejects_short_declared_length_before_touching_memory() {
        let window = [b'0'; WINDOW_LEN];
        // SAFETY: `window` is WINDOW_LEN bytes.
        let parsed = unsafe { parse_mac_unchecked(&window[..MAC_STR_LEN - 1], opts()) };
        assert_eq!(parsed, None);
    }

    #[test]
    fn unchecked_matches_safe_wrapper() {
        let mut window = [0u8; WINDOW_LEN];
        window[..MAC_STR_LEN].copy_from_slice(b"FE:DC:BA:98:76:54");
        // SAFETY: `window` is WINDOW_LEN bytes.
        let fast = unsafe { parse_mac_unchecked(&window, opts()) };
        assert_eq!(fast, parse_mac(b"FE:DC:BA:98:76:54", opts()));
        assert_eq!(fast, Some(0xFEDC_BA98_7654));
    }

    fn opts() -> MacOptions {
        MacOptions::DEFAULT
    }
}
