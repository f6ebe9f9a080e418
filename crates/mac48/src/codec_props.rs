//! Property-based tests for the codec laws.
//!
//! The portable kernels in [`crate::scalar`] double as the executable
//! specification for the vector kernels, so the differential properties
//! here pin the two paths to bit-for-bit agreement on arbitrary windows
//! and arbitrary option combinations.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::{MAC_STR_LEN, MacOptions, WINDOW_LEN, format_mac, parse_mac, scalar};

    /// Delimiters that are not themselves hex digits, as the round-trip law
    /// requires.
    fn round_trip_delimiter() -> impl Strategy<Value = u8> {
        prop::sample::select(vec![b':', b'-', b' ', b'.', b'_', b'|'])
    }

    fn any_options() -> impl Strategy<Value = MacOptions> {
        (any::<bool>(), any::<bool>(), any::<u8>(), any::<bool>()).prop_map(
            |(validate_delimiters, validate_hex, delimiter, uppercase)| MacOptions {
                validate_delimiters,
                validate_hex,
                delimiter,
                uppercase,
            },
        )
    }

    proptest! {
        /// parse(format(v)) == v for every 48-bit value, under any
        /// configuration whose delimiter is not a hex digit.
        #[test]
        fn prop_round_trip(
            value in 0u64..(1 << 48),
            delimiter in round_trip_delimiter(),
            uppercase in any::<bool>(),
            strict in any::<bool>(),
        ) {
            let base = if strict { MacOptions::STRICT } else { MacOptions::DEFAULT };
            let opts = base.with_delimiter(delimiter).with_uppercase(uppercase);
            let text = format_mac(value, opts);
            prop_assert_eq!(parse_mac(text.as_bytes(), opts), Some(value));
        }

        /// Bits above 48 never affect the formatted text.
        #[test]
        fn prop_upper_bits_masked(value in any::<u64>()) {
            prop_assert_eq!(
                format_mac(value, MacOptions::DEFAULT),
                format_mac(value & 0xFFFF_FFFF_FFFF, MacOptions::DEFAULT)
            );
        }

        /// Anything shorter than 17 bytes is rejected regardless of content
        /// or configuration.
        #[test]
        fn prop_short_input_rejected(
            text in prop::collection::vec(any::<u8>(), 0..MAC_STR_LEN),
            opts in any_options(),
        ) {
            prop_assert_eq!(parse_mac(&text, opts), None);
        }

        /// The vector and scalar parse kernels agree bit for bit on
        /// arbitrary windows, including garbage only a validation-off
        /// configuration will decode.
        #[test]
        fn prop_parse_matches_scalar(
            window in any::<[u8; WINDOW_LEN]>(),
            opts in any_options(),
        ) {
            prop_assert_eq!(
                parse_mac(&window, opts),
                scalar::parse_window(&window, opts)
            );
        }

        /// The vector and scalar format kernels agree bit for bit on any
        /// value and any option combination.
        #[test]
        fn prop_format_matches_scalar(value in any::<u64>(), opts in any_options()) {
            let mut via_dispatch = [0u8; MAC_STR_LEN];
            let mut via_scalar = [0u8; MAC_STR_LEN];
            crate::format_mac_into(value, opts, &mut via_dispatch);
            scalar::format_into(value, opts, &mut via_scalar);
            prop_assert_eq!(via_dispatch, via_scalar);
        }

        /// Parsing ignores letter case in digit positions.
        #[test]
        fn prop_parse_is_case_insensitive(value in 0u64..(1 << 48)) {
            let lower = format_mac(value, MacOptions::DEFAULT.with_uppercase(false));
            let upper = format_mac(value, MacOptions::DEFAULT);
            prop_assert_eq!(
                parse_mac(lower.as_bytes(), MacOptions::STRICT),
                parse_mac(upper.as_bytes(), MacOptions::STRICT)
            );
        }

        /// With delimiter validation off, the delimiter slots are never
        /// inspected: scribbling over them does not change the result.
        #[test]
        fn prop_delimiters_uninspected_when_unvalidated(
            value in 0u64..(1 << 48),
            junk in any::<[u8; 5]>(),
        ) {
            let mut text = format_mac(value, MacOptions::DEFAULT).into_bytes();
            for (slot, byte) in [2usize, 5, 8, 11, 14].into_iter().zip(junk) {
                text[slot] = byte;
            }
            prop_assert_eq!(parse_mac(&text, MacOptions::DEFAULT), Some(value));
        }
    }
}
