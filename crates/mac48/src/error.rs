//! Error type for the typed [`crate::MacAddr`] parsing surface.

use thiserror::Error;

/// Why a string failed to parse as a [`crate::MacAddr`].
///
/// The raw engine reports every failure as `None`; this enum is re-derived
/// by the typed wrapper (length is checked before the engine runs, so a
/// `None` from a long-enough input can only be a format violation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMacError {
    /// Fewer than the 17 bytes of the canonical textual form.
    #[error("MAC address too short: need 17 bytes, got {len}")]
    TooShort {
        /// Declared length of the rejected input.
        len: usize,
    },

    /// A delimiter slot or hex-digit position held an unexpected byte.
    #[error("malformed MAC address")]
    InvalidFormat,
}
