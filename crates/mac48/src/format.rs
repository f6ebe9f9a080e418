//! Integer-to-text direction of the codec.

use crate::options::MacOptions;
use crate::MAC_STR_LEN;

/// Format the low 48 bits of `value` into the caller's 17-byte buffer.
///
/// Bits above 48 are masked off rather than treated as an error, so every
/// `u64` formats. Always writes all 17 bytes and returns [`MAC_STR_LEN`].
/// Only `delimiter` and `uppercase` are consulted; the validation flags
/// have no meaning in this direction. No allocation.
///
/// ```
/// use mac48::{MAC_STR_LEN, MacOptions, format_mac_into};
///
/// let mut buf = [0u8; MAC_STR_LEN];
/// let written = format_mac_into(0xFFFF_AABB_CCDD_EEFF, MacOptions::DEFAULT, &mut buf);
/// assert_eq!(written, MAC_STR_LEN);
/// assert_eq!(&buf, b"AA:BB:CC:DD:EE:FF");
/// ```
pub fn format_mac_into(value: u64, opts: MacOptions, out: &mut [u8; MAC_STR_LEN]) -> usize {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    // SAFETY: AVX2 is statically enabled when this branch is compiled, and
    // `out` has exactly the size the kernel expects.
    unsafe {
        crate::simd::format_into(value, opts, out);
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
    crate::scalar::format_into(value, opts, out);

    MAC_STR_LEN
}

/// Format into a newly allocated `String` of exactly 17 characters.
///
/// Exactly one allocation. With the documented ASCII delimiters the result
/// is always 17 characters; a non-ASCII delimiter byte cannot form valid
/// UTF-8 on its own and comes back as U+FFFD (use [`format_mac_into`] for
/// byte-exact output in that case).
#[must_use]
pub fn format_mac(value: u64, opts: MacOptions) -> String {
    let mut buf = [0u8; MAC_STR_LEN];
    format_mac_into(value, opts, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
