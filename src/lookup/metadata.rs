use std::panic;

use phonenumber::Mode;
use phonenumber::metadata::DATABASE;

use crate::domain::{CallingCode, RegionCode};
use crate::lookup::{LookupResult, NumberData, NumberLookup};

/// [`NumberLookup`] backed by the metadata bundled with the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataLookup;

impl MetadataLookup {
    pub fn new() -> Self {
        Self
    }
}

impl NumberLookup for MetadataLookup {
    fn parse(&self, number: &str) -> LookupResult {
        // The metadata library unwraps internally on some inputs.
        let parsed = match panic::catch_unwind(|| phonenumber::parse(None, number)) {
            Ok(Ok(parsed)) => parsed,
            Ok(Err(err)) => {
                tracing::debug!(number, error = ?err, "metadata service could not parse number");
                return LookupResult::invalid(number);
            }
            Err(_) => {
                tracing::error!(number, "metadata service panicked while parsing number");
                return LookupResult::invalid(number);
            }
        };

        LookupResult {
            valid: phonenumber::is_valid(&parsed),
            region_code: region_of(&parsed),
            country_code: parsed.code().value(),
            number: NumberData {
                input: number.to_owned(),
                rfc3966: phonenumber::format(&parsed)
                    .mode(Mode::Rfc3966)
                    .to_string(),
                significant: parsed.national().to_string(),
            },
        }
    }

    fn calling_code(&self, region: &RegionCode) -> Option<CallingCode> {
        DATABASE
            .by_id(&region.canonical())
            .map(|metadata| CallingCode::new(metadata.country_code()))
    }
}

/// ISO region of a parsed number, empty when no region claims it.
fn region_of(parsed: &phonenumber::PhoneNumber) -> String {
    if let Some(id) = parsed.country().id() {
        return format!("{id:?}");
    }

    // `Country::id` matches on the national number without its leading zeros, which
    // misses plans such as Italy's where the zero is significant.
    let code = parsed.code().value();
    let national = parsed.national().to_string();
    let Some(candidates) = DATABASE.by_code(&code) else {
        return String::new();
    };
    let region = match candidates.as_slice() {
        [only] => Some(*only),
        _ => candidates.iter().copied().find(|metadata| {
            metadata
                .descriptors()
                .general()
                .national_number()
                .find(&national)
                .is_some_and(|found| found.start() == 0 && found.end() == national.len())
        }),
    };

    region
        .map(|metadata| metadata.id().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_us_number() {
        let result = MetadataLookup::new().parse("+16573310806");
        assert!(result.valid);
        assert_eq!(result.region_code, "US");
        assert_eq!(result.country_code, 1);
        assert_eq!(result.number.input, "+16573310806");
        assert_eq!(result.number.rfc3966, "tel:+1-657-331-0806");
        assert_eq!(result.number.significant, "6573310806");
    }

    #[test]
    fn keeps_leading_zero_when_resolving_region() {
        let result = MetadataLookup::new().parse("+390612345678");
        assert!(result.valid);
        assert_eq!(result.region_code, "IT");
        assert_eq!(result.country_code, 39);
        assert_eq!(result.number.rfc3966, "tel:+39-06-1234-5678");
        assert_eq!(result.number.significant, "0612345678");
    }

    #[test]
    fn nanp_number_with_impossible_area_code_is_invalid() {
        let result = MetadataLookup::new().parse("+11573310806");
        assert!(!result.valid);
    }

    #[test]
    fn garbage_is_reported_invalid_not_panicking() {
        let result = MetadataLookup::new().parse("+");
        assert!(!result.valid);
        assert_eq!(result.number.input, "+");
    }

    #[test]
    fn resolves_calling_codes_for_known_regions() {
        let lookup = MetadataLookup::new();
        let us = RegionCode::new("US").unwrap();
        assert_eq!(lookup.calling_code(&us), Some(CallingCode::new(1)));

        let gb = RegionCode::new("gb").unwrap();
        assert_eq!(lookup.calling_code(&gb).map(CallingCode::value), Some(44));
    }

    #[test]
    fn unknown_region_has_no_calling_code() {
        let zz = RegionCode::new("ZZ").unwrap();
        assert_eq!(MetadataLookup::new().calling_code(&zz), None);
    }
}
