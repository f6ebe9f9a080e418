//! Codec options, resolved once at the call boundary.

/// Options controlling both directions of the codec.
///
/// The parse direction consults `validate_delimiters`, `validate_hex` and
/// `delimiter`; the format direction consults `delimiter` and `uppercase`
/// and ignores the validation flags entirely.
///
/// Start from a preset and override individual fields with the `with_*`
/// builders. Overrides are per field: deriving from [`MacOptions::STRICT`]
/// and changing only the delimiter keeps both validations enabled.
///
/// ```
/// use mac48::MacOptions;
///
/// let opts = MacOptions::STRICT.with_delimiter(b'-');
/// assert!(opts.validate_delimiters);
/// assert!(opts.validate_hex);
/// assert_eq!(opts.delimiter, b'-');
/// ```
///
/// `delimiter` may be any byte for parsing. Formatting writes it verbatim
/// into the output buffer; a non-ASCII delimiter therefore makes the
/// buffer-writing variant emit non-UTF-8 bytes, and the `String`-returning
/// variant substitutes U+FFFD for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacOptions {
    /// Require the configured delimiter byte at offsets 2, 5, 8, 11 and 14.
    pub validate_delimiters: bool,
    /// Require `[0-9A-Fa-f]` at the twelve digit positions.
    pub validate_hex: bool,
    /// Delimiter byte between octets.
    pub delimiter: u8,
    /// Emit `A-F` when formatting; `a-f` otherwise.
    pub uppercase: bool,
}

impl MacOptions {
    /// No validation, `:` delimiter, uppercase output.
    pub const DEFAULT: MacOptions = MacOptions {
        validate_delimiters: false,
        validate_hex: false,
        delimiter: b':',
        uppercase: true,
    };

    /// Both validations enabled, `:` delimiter, uppercase output.
    pub const STRICT: MacOptions = MacOptions {
        validate_delimiters: true,
        validate_hex: true,
        delimiter: b':',
        uppercase: true,
    };

    /// Override only the delimiter byte.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> MacOptions {
        self.delimiter = delimiter;
        self
    }

    /// Override only the output letter case.
    #[must_use]
    pub const fn with_uppercase(mut self, uppercase: bool) -> MacOptions {
        self.uppercase = uppercase;
        self
    }

    /// Override only delimiter-position validation.
    #[must_use]
    pub const fn with_validate_delimiters(mut self, enabled: bool) -> MacOptions {
        self.validate_delimiters = enabled;
        self
    }

    /// Override only hex-digit validation.
    #[must_use]
    pub const fn with_validate_hex(mut self, enabled: bool) -> MacOptions {
        self.validate_hex = enabled;
        self
    }
}

impl Default for MacOptions {
    fn default() -> Self {
        MacOptions::DEFAULT
    }
}
