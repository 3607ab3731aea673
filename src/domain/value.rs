use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Digit-only phone number derived from user input.
///
/// Invariant: only ASCII digits, length `7..=15`.
pub struct CleanedNumber(String);

impl CleanedNumber {
    /// Shortest accepted national significant number.
    pub const MIN_DIGITS: usize = 7;
    /// E.164 ceiling for a full international number.
    pub const MAX_DIGITS: usize = 15;
    /// Spaces tolerated between country code, area code and local number.
    pub const MAX_SEPARATORS: usize = 2;

    /// Strip an optional leading `+` and the internal spaces, then validate what is left.
    ///
    /// Spacing is only counted here; whether the spaces sit at the right boundaries is
    /// decided later, once the area code is known.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        if unsigned.starts_with(' ') {
            return Err(ValidationError::LeadingSpace);
        }

        let separators = unsigned.chars().filter(|c| c.is_whitespace()).count();
        if separators > Self::MAX_SEPARATORS {
            return Err(ValidationError::TooManySeparators {
                max: Self::MAX_SEPARATORS,
                actual: separators,
            });
        }

        let compact: String = unsigned.chars().filter(|c| !c.is_whitespace()).collect();
        let length = compact.chars().count();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&length) {
            return Err(ValidationError::LengthOutOfRange {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                actual: length,
            });
        }
        if !compact.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonDigit { input: compact });
        }

        Ok(Self(compact))
    }

    /// Borrow the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when no country code can be prepended without exceeding E.164 length.
    pub fn is_at_ceiling(&self) -> bool {
        self.0.len() >= Self::MAX_DIGITS
    }
}

impl fmt::Display for CleanedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ISO 3166-1 alpha-2 region code as supplied by the caller (`countryCode`).
///
/// Invariant: exactly two ASCII letters. Case is preserved.
pub struct RegionCode(String);

impl RegionCode {
    /// Create a validated [`RegionCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let mut chars = value.chars();
        let well_formed = matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic()
        );
        if !well_formed {
            return Err(ValidationError::InvalidRegionCode { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the code as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-case form used by metadata lookups.
    pub fn canonical(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Exact comparison against a region reported by the metadata service.
    ///
    /// Only the lookup is case-insensitive: `us` resolves to calling code `1` but does
    /// not match the reported `US`.
    pub fn matches(&self, region: &str) -> bool {
        self.0 == region
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// International calling code (`1` for US/CA, `44` for GB, ...).
pub struct CallingCode(u16);

impl CallingCode {
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CallingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Query parameters accepted by the lookup endpoint.
pub enum Field {
    PhoneNumber,
    CountryCode,
}

impl Field {
    /// Query-string / JSON key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhoneNumber => "phoneNumber",
            Self::CountryCode => "countryCode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The two user-visible failure kinds.
pub enum ErrorKind {
    /// The field was supplied but failed validation.
    Invalid,
    /// The field is required and was not supplied.
    Missing,
}

impl ErrorKind {
    /// Message placed under `error.<field>` in the response body.
    pub fn message(self) -> &'static str {
        match self {
            Self::Invalid => "invalid input",
            Self::Missing => "required value is missing",
        }
    }
}
