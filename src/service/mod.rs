//! Service layer: the lookup decision procedure.

mod spacing;

pub use spacing::is_spacing_valid;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    CleanedNumber, Decomposition, Field, LookupResponse, Outcome, PhoneQuery, RegionCode,
};
use crate::lookup::{LookupResult, MetadataLookup, NumberLookup};

#[derive(Clone)]
/// Validates a [`PhoneQuery`] and splits the number into country, area and local parts.
///
/// The bare number is tried first, so a number that already carries its calling code
/// needs no `countryCode`. Only when that fails is the caller's `countryCode` resolved
/// and prepended for a second attempt.
pub struct PhoneNumberService {
    lookup: Arc<dyn NumberLookup>,
}

impl Default for PhoneNumberService {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberService {
    /// Service backed by the bundled `phonenumber` metadata.
    pub fn new() -> Self {
        Self::with_lookup(MetadataLookup::new())
    }

    /// Service backed by a custom [`NumberLookup`].
    pub fn with_lookup(lookup: impl NumberLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Resolve `query` and shape the JSON body. Never fails.
    pub fn handle(&self, query: &PhoneQuery) -> LookupResponse {
        LookupResponse::from_outcome(query, self.resolve(query))
    }

    /// Run the guard sequence and return the first terminal outcome.
    pub fn resolve(&self, query: &PhoneQuery) -> Outcome {
        let Some(phone_number) = query.phone_number.as_ref() else {
            return Outcome::Missing(Field::PhoneNumber);
        };
        let Some(raw) = phone_number.as_text() else {
            debug!("phoneNumber is not a string");
            return Outcome::Invalid(Field::PhoneNumber);
        };

        let cleaned = match CleanedNumber::new(raw) {
            Ok(cleaned) => cleaned,
            Err(err) => {
                debug!(input = raw, %err, "rejected phoneNumber");
                return Outcome::Invalid(Field::PhoneNumber);
            }
        };

        let bare = self.lookup.parse(&format!("+{cleaned}"));
        if bare.valid {
            if let Some(supplied) = query.country_code.as_ref() {
                let agrees = supplied
                    .as_text()
                    .is_some_and(|code| code == bare.region_code);
                if !agrees {
                    debug!(region = %bare.region_code, "countryCode disagrees with number");
                    return Outcome::Invalid(Field::CountryCode);
                }
            }
            return self.decompose(raw, &bare);
        }

        if cleaned.is_at_ceiling() {
            debug!(input = raw, "no room left for a calling code");
            return Outcome::Invalid(Field::PhoneNumber);
        }

        let Some(supplied) = query.country_code.as_ref() else {
            return Outcome::Missing(Field::CountryCode);
        };
        let Some(supplied) = supplied.as_text() else {
            debug!("countryCode is not a string");
            return Outcome::Invalid(Field::CountryCode);
        };
        let region = match RegionCode::new(supplied) {
            Ok(region) => region,
            Err(err) => {
                debug!(%err, "rejected countryCode");
                return Outcome::Invalid(Field::CountryCode);
            }
        };
        let Some(calling_code) = self.lookup.calling_code(&region) else {
            debug!(region = region.as_str(), "unknown region");
            return Outcome::Invalid(Field::CountryCode);
        };

        let qualified = self.lookup.parse(&format!("+{calling_code}{cleaned}"));
        if !qualified.valid {
            debug!(input = %qualified.number.input, "number invalid for supplied region");
            return Outcome::Invalid(Field::PhoneNumber);
        }
        if !region.matches(&qualified.region_code) {
            debug!(
                supplied = region.as_str(),
                parsed = %qualified.region_code,
                "countryCode shares a calling code with the number's region but differs"
            );
            return Outcome::Invalid(Field::CountryCode);
        }

        self.decompose(raw, &qualified)
    }

    fn decompose(&self, raw: &str, result: &LookupResult) -> Outcome {
        let Some(area_code) = area_code(&result.number.rfc3966) else {
            debug!(rfc3966 = %result.number.rfc3966, "no area code in formatted number");
            return Outcome::Invalid(Field::PhoneNumber);
        };
        let Some(local_number) = result.number.significant.get(area_code.len()..) else {
            return Outcome::Invalid(Field::PhoneNumber);
        };

        let calling_code = result.country_code.to_string();
        if !is_spacing_valid(raw, &calling_code, area_code, local_number) {
            debug!(input = raw, "spaces outside group boundaries");
            return Outcome::Invalid(Field::PhoneNumber);
        }

        let decomposition = Decomposition {
            phone_number: result.number.input.clone(),
            country_code: result.region_code.clone(),
            area_code: area_code.to_owned(),
            local_phone_number: local_number.to_owned(),
        };
        debug!(number = %decomposition.phone_number, "lookup succeeded");
        Outcome::Found(decomposition)
    }
}

/// Digits between the first and second `-` of a `tel:+<cc>-<area>-<rest>` string.
fn area_code(rfc3966: &str) -> Option<&str> {
    let mut groups = rfc3966.split('-');
    groups.next()?;
    let area = groups.next()?;
    groups.next()?;
    (!area.is_empty() && area.bytes().all(|b| b.is_ascii_digit())).then_some(area)
}
