//! # mac48
//!
//! A micro-codec between the canonical textual form of a 48-bit link-layer
//! (MAC / EUI-48) address and its integer encoding, built for call sites
//! where the conversion runs per packet or per log line and scalar-loop
//! overhead is measurable.
//!
//! The hot path is a fixed-width vectorized transformation: on x86_64 with
//! AVX2 enabled at build time (`-C target-feature=+avx2` or a matching
//! `target-cpu`), parsing loads a 32-byte window into one wide register and
//! decodes all twelve hex digits in parallel, without a data-dependent
//! branch. Every other platform uses the portable kernels in [`scalar`],
//! which implement the identical algorithm and agree with the vector path
//! bit for bit.
//!
//! ## Usage
//!
//! ```
//! use mac48::{MacOptions, format_mac, parse_mac};
//!
//! let value = parse_mac(b"AA:BB:CC:DD:EE:FF", MacOptions::DEFAULT);
//! assert_eq!(value, Some(0xAABB_CCDD_EEFF));
//!
//! assert_eq!(format_mac(0xAABB_CCDD_EEFF, MacOptions::DEFAULT), "AA:BB:CC:DD:EE:FF");
//! ```
//!
//! Validation is off by default: the default options decode the twelve digit
//! positions unconditionally and never inspect the delimiter slots. Enable
//! [`MacOptions::STRICT`] (or the individual `with_validate_*` overrides) to
//! reject malformed input instead:
//!
//! ```
//! use mac48::{MacOptions, parse_mac};
//!
//! assert_eq!(parse_mac(b"01-23-45-67-89-AB", MacOptions::STRICT), None);
//! assert_eq!(parse_mac(b"01:23:45:67:89:AG", MacOptions::STRICT), None);
//! ```
//!
//! A typed [`MacAddr`] wrapper with `FromStr`/`Display` (and optional serde
//! support behind the `serde` feature) sits on top of the raw `u64` API for
//! callers that want a value type rather than a codec.

mod addr;
mod error;
mod format;
mod options;
mod parse;
pub mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod simd;

mod codec_props;

pub use addr::MacAddr;
pub use error::ParseMacError;
pub use format::{format_mac, format_mac_into};
pub use options::MacOptions;
pub use parse::{parse_mac, parse_mac_unchecked};

/// Length in bytes of the canonical textual form (`AA:BB:CC:DD:EE:FF`).
pub const MAC_STR_LEN: usize = 17;

/// Width of the window the parse engine reads, regardless of input length.
///
/// [`parse_mac_unchecked`] always loads this many bytes so the
/// transformation stays width-constant; [`parse_mac`] copies the input into
/// a zeroed buffer of this size first.
pub const WINDOW_LEN: usize = 32;

/// Mask selecting the 48 significant bits of an address value.
pub(crate) const MAC_MASK: u64 = 0xFFFF_FFFF_FFFF;
