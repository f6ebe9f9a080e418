//! Typed `MacAddr` surface.

#![allow(clippy::unwrap_used)]

use mac48::{MacAddr, MacOptions, ParseMacError};
use pretty_assertions::assert_eq;

#[test]
fn from_str_is_strict() {
    let addr: MacAddr = "01:23:45:67:89:AB".parse().unwrap();
    assert_eq!(addr.to_u64(), 0x0123_4567_89AB);

    assert_eq!(
        "01-23-45-67-89-AB".parse::<MacAddr>(),
        Err(ParseMacError::InvalidFormat)
    );
    assert_eq!(
        "01:23:45:67:89:AG".parse::<MacAddr>(),
        Err(ParseMacError::InvalidFormat)
    );
}

#[test]
fn from_str_reports_length() {
    assert_eq!(
        "01:23".parse::<MacAddr>(),
        Err(ParseMacError::TooShort { len: 5 })
    );
    // Trailing bytes are an error for the typed form, unlike the raw codec.
    assert_eq!(
        "01:23:45:67:89:AB:CD".parse::<MacAddr>(),
        Err(ParseMacError::InvalidFormat)
    );
}

#[test]
fn parse_with_keeps_window_semantics() {
    let addr = MacAddr::parse_with("aa:bb:cc:dd:ee:ff plus a tail", MacOptions::DEFAULT).unwrap();
    assert_eq!(addr, MacAddr::from_u64(0xAABB_CCDD_EEFF));
}

#[test]
fn display_is_canonical() {
    let addr = MacAddr::from_u64(0x0123_4567_89AB);
    assert_eq!(addr.to_string(), "01:23:45:67:89:AB");
}

#[test]
fn display_round_trips() {
    let addr = MacAddr::from_u64(0xFEDC_BA98_7654);
    assert_eq!(addr.to_string().parse::<MacAddr>(), Ok(addr));
}

#[test]
fn format_with_options() {
    let addr = MacAddr::from_u64(0xAABB_CCDD_EEFF);
    let opts = MacOptions::DEFAULT.with_delimiter(b'-').with_uppercase(false);
    assert_eq!(addr.format_with(opts), "aa-bb-cc-dd-ee-ff");
}

#[test]
fn octet_round_trip() {
    let octets = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB];
    let addr = MacAddr::from_octets(octets);
    assert_eq!(addr.octets(), octets);
    assert_eq!(addr, MacAddr::from(octets));
    assert_eq!(u64::from(addr), 0x0123_4567_89AB);
}

#[test]
fn from_u64_masks_upper_bits() {
    assert_eq!(
        MacAddr::from_u64(0xFFFF_AABB_CCDD_EEFF),
        MacAddr::from_u64(0xAABB_CCDD_EEFF)
    );
}

#[test]
fn flag_bits() {
    assert!(MacAddr::BROADCAST.is_broadcast());
    assert!(MacAddr::BROADCAST.is_multicast());
    assert!(!MacAddr::ZERO.is_multicast());
    assert!(MacAddr::ZERO.is_unicast());

    // 01:... has the group bit set; 02:... the locally-administered bit.
    assert!(MacAddr::from_u64(0x0100_0000_0000).is_multicast());
    assert!(MacAddr::from_u64(0x0200_0000_0000).is_local());
    assert!(!MacAddr::from_u64(0x0200_0000_0000).is_multicast());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_as_string() {
    let addr = MacAddr::from_u64(0x0123_4567_89AB);
    let json = serde_json::to_string(&addr).unwrap();
    assert_eq!(json, "\"01:23:45:67:89:AB\"");
    assert_eq!(serde_json::from_str::<MacAddr>(&json).unwrap(), addr);

    assert!(serde_json::from_str::<MacAddr>("\"not a mac\"").is_err());
}
