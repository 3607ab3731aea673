use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::request::{PhoneQuery, QueryValue};
use crate::domain::value::{ErrorKind, Field};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// A phone number split into its parts.
pub struct Decomposition {
    /// Number as submitted to the metadata service (`+<calling code><national number>`).
    pub phone_number: String,
    /// ISO 3166-1 alpha-2 region the number belongs to.
    pub country_code: String,
    pub area_code: String,
    pub local_phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal result of a lookup.
pub enum Outcome {
    Found(Decomposition),
    Missing(Field),
    Invalid(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `error` member of a rejection: a single `{ <field>: <message> }` entry.
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field.as_str(), self.kind.message())?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Error body. Echoes the caller's inputs alongside the failing field.
pub struct Rejection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<QueryValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<QueryValue>,
    pub error: FieldError,
}

impl Rejection {
    /// `field` was supplied but is not acceptable. Both inputs are echoed when present.
    pub fn invalid(query: &PhoneQuery, field: Field) -> Self {
        Self {
            phone_number: query.phone_number.clone(),
            country_code: query.country_code.clone(),
            error: FieldError {
                field,
                kind: ErrorKind::Invalid,
            },
        }
    }

    /// `field` is required but absent. Only the phone number is echoed.
    pub fn missing(query: &PhoneQuery, field: Field) -> Self {
        Self {
            phone_number: query.phone_number.clone(),
            country_code: None,
            error: FieldError {
                field,
                kind: ErrorKind::Missing,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
/// JSON body returned by the lookup endpoint.
pub enum LookupResponse {
    Found(Decomposition),
    Rejected(Rejection),
}

impl LookupResponse {
    /// Shape an [`Outcome`] for the caller that sent `query`.
    pub fn from_outcome(query: &PhoneQuery, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Found(decomposition) => Self::Found(decomposition),
            Outcome::Missing(field) => Self::Rejected(Rejection::missing(query, field)),
            Outcome::Invalid(field) => Self::Rejected(Rejection::invalid(query, field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    fn us_decomposition() -> Decomposition {
        Decomposition {
            phone_number: "+16573310806".to_owned(),
            country_code: "US".to_owned(),
            area_code: "657".to_owned(),
            local_phone_number: "3310806".to_owned(),
        }
    }

    #[test]
    fn found_serializes_camel_case_fields() {
        let query = PhoneQuery::new(Some("16573310806"), None);
        let response = LookupResponse::from_outcome(&query, Outcome::Found(us_decomposition()));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "phoneNumber": "+16573310806",
                "countryCode": "US",
                "areaCode": "657",
                "localPhoneNumber": "3310806"
            })
        );
    }

    #[test]
    fn invalid_echoes_both_inputs_when_present() {
        let query = PhoneQuery::new(Some("6573310806"), Some("CA"));
        let response =
            LookupResponse::from_outcome(&query, Outcome::Invalid(Field::CountryCode));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "phoneNumber": "6573310806",
                "countryCode": "CA",
                "error": { "countryCode": "invalid input" }
            })
        );
    }

    #[test]
    fn invalid_omits_absent_country_code() {
        let query = PhoneQuery::new(Some("1234567890123456"), None);
        let response =
            LookupResponse::from_outcome(&query, Outcome::Invalid(Field::PhoneNumber));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "phoneNumber": "1234567890123456",
                "error": { "phoneNumber": "invalid input" }
            })
        );
    }

    #[test]
    fn invalid_echoes_non_string_values_verbatim() {
        let query = PhoneQuery {
            phone_number: Some(QueryValue::List(vec![
                QueryValue::text("1"),
                QueryValue::text("2"),
            ])),
            country_code: Some(QueryValue::Map(BTreeMap::from([(
                "a".to_owned(),
                QueryValue::text("US"),
            )]))),
        };
        let response =
            LookupResponse::from_outcome(&query, Outcome::Invalid(Field::PhoneNumber));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "phoneNumber": ["1", "2"],
                "countryCode": { "a": "US" },
                "error": { "phoneNumber": "invalid input" }
            })
        );
    }

    #[test]
    fn missing_phone_number_has_only_error() {
        let query = PhoneQuery::default();
        let response =
            LookupResponse::from_outcome(&query, Outcome::Missing(Field::PhoneNumber));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "error": { "phoneNumber": "required value is missing" } })
        );
    }

    #[test]
    fn missing_country_code_echoes_phone_number_only() {
        let query = PhoneQuery::new(Some("11573310806"), None);
        let response =
            LookupResponse::from_outcome(&query, Outcome::Missing(Field::CountryCode));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "phoneNumber": "11573310806",
                "error": { "countryCode": "required value is missing" }
            })
        );
    }
}
