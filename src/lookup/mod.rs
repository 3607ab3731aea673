//! Lookup layer: the seam to the phone-number metadata service.

mod metadata;

pub use metadata::MetadataLookup;

use crate::domain::{CallingCode, RegionCode};

/// Formatted views of a parsed number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberData {
    /// String handed to [`NumberLookup::parse`].
    pub input: String,
    /// `tel:+<cc>-<area>-<rest>` form.
    pub rfc3966: String,
    /// National significant number (no calling code).
    pub significant: String,
}

/// What the metadata service knows about a `+<digits>` string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupResult {
    pub valid: bool,
    /// ISO 3166-1 alpha-2 region, empty when unknown.
    pub region_code: String,
    pub country_code: u16,
    pub number: NumberData,
}

impl LookupResult {
    /// Result for input the service could not make sense of.
    pub fn invalid(input: impl Into<String>) -> Self {
        Self {
            number: NumberData {
                input: input.into(),
                ..NumberData::default()
            },
            ..Self::default()
        }
    }
}

/// Phone-number parsing and metadata.
///
/// Implementations must be deterministic and side-effect free; the service calls them
/// at most twice per request.
pub trait NumberLookup: Send + Sync {
    /// Parse a full international number of the form `+<digits>`.
    fn parse(&self, number: &str) -> LookupResult;

    /// Calling code for a region, or `None` if the region is unknown.
    fn calling_code(&self, region: &RegionCode) -> Option<CallingCode>;
}
