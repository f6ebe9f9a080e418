//! Typed 48-bit address value.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseMacError;
use crate::options::MacOptions;
use crate::{MAC_MASK, MAC_STR_LEN, format_mac_into, parse_mac};

/// A 48-bit link-layer (EUI-48) address.
///
/// A thin, typed layer over the raw `u64` codec: `FromStr` parses the
/// canonical strict form, `Display` emits it, and the predicates read the
/// standard flag bits of the first octet.
///
/// ```
/// use mac48::MacAddr;
///
/// let addr: MacAddr = "01:23:45:67:89:AB".parse().unwrap();
/// assert_eq!(addr.to_u64(), 0x0123_4567_89AB);
/// assert_eq!(addr.to_string(), "01:23:45:67:89:AB");
/// assert!(addr.is_multicast());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct MacAddr(u64);

impl MacAddr {
    /// The all-zero address.
    pub const ZERO: MacAddr = MacAddr(0);

    /// The broadcast address `FF:FF:FF:FF:FF:FF`.
    pub const BROADCAST: MacAddr = MacAddr(MAC_MASK);

    /// Build from an integer; bits above 48 are masked off.
    #[must_use]
    pub const fn from_u64(value: u64) -> MacAddr {
        MacAddr(value & MAC_MASK)
    }

    /// The address as an integer in the low 48 bits.
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Build from octets in textual (big-endian) order.
    #[must_use]
    pub const fn from_octets(octets: [u8; 6]) -> MacAddr {
        let mut value = 0u64;
        let mut i = 0;
        while i < 6 {
            value = (value << 8) | octets[i] as u64;
            i += 1;
        }
        MacAddr(value)
    }

    /// The six octets in textual (big-endian) order.
    #[must_use]
    pub const fn octets(self) -> [u8; 6] {
        [
            (self.0 >> 40) as u8,
            (self.0 >> 32) as u8,
            (self.0 >> 24) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        ]
    }

    /// Group bit of the first octet.
    #[must_use]
    pub const fn is_multicast(self) -> bool {
        self.0 >> 40 & 0x01 != 0
    }

    /// Inverse of [`MacAddr::is_multicast`].
    #[must_use]
    pub const fn is_unicast(self) -> bool {
        !self.is_multicast()
    }

    /// Locally-administered bit of the first octet.
    #[must_use]
    pub const fn is_local(self) -> bool {
        self.0 >> 40 & 0x02 != 0
    }

    /// True only for `FF:FF:FF:FF:FF:FF`.
    #[must_use]
    pub const fn is_broadcast(self) -> bool {
        self.0 == MAC_MASK
    }

    /// Parse with explicit options instead of the strict defaults of
    /// [`FromStr`]. Keeps the codec's window semantics: input longer than
    /// 17 bytes is accepted and the tail ignored.
    pub fn parse_with(text: &str, opts: MacOptions) -> Result<MacAddr, ParseMacError> {
        if text.len() < MAC_STR_LEN {
            return Err(ParseMacError::TooShort { len: text.len() });
        }
        parse_mac(text.as_bytes(), opts)
            .map(MacAddr)
            .ok_or(ParseMacError::InvalidFormat)
    }

    /// Format with explicit options instead of the canonical form of
    /// [`fmt::Display`].
    #[must_use]
    pub fn format_with(self, opts: MacOptions) -> String {
        crate::format_mac(self.0, opts)
    }
}

impl FromStr for MacAddr {
    type Err = ParseMacError;

    /// Strict parse of exactly the canonical 17-character form.
    fn from_str(s: &str) -> Result<MacAddr, ParseMacError> {
        if s.len() < MAC_STR_LEN {
            return Err(ParseMacError::TooShort { len: s.len() });
        }
        if s.len() > MAC_STR_LEN {
            return Err(ParseMacError::InvalidFormat);
        }
        MacAddr::parse_with(s, MacOptions::STRICT)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAC_STR_LEN];
        format_mac_into(self.0, MacOptions::DEFAULT, &mut buf);
        // The default options emit ASCII only.
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> MacAddr {
        MacAddr::from_octets(octets)
    }
}

impl From<MacAddr> for u64 {
    fn from(addr: MacAddr) -> u64 {
        addr.to_u64()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
