use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Untyped query-parameter value as it arrived on the wire.
///
/// Only [`QueryValue::Text`] counts as a string; the other shapes come from repeated
/// keys (`a=1&a=2`) or bracket syntax (`a[]=1`, `a[x]=1`) and are always rejected, but
/// they are echoed back in error responses exactly as received.
pub enum QueryValue {
    Text(String),
    List(Vec<QueryValue>),
    Map(BTreeMap<String, QueryValue>),
}

impl QueryValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Borrow the value if it is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) | Self::Map(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Raw inputs of one lookup request. `None` means the parameter was absent.
pub struct PhoneQuery {
    pub phone_number: Option<QueryValue>,
    pub country_code: Option<QueryValue>,
}

impl PhoneQuery {
    /// Query with string values for whichever parameters are given.
    pub fn new(phone_number: Option<&str>, country_code: Option<&str>) -> Self {
        Self {
            phone_number: phone_number.map(QueryValue::text),
            country_code: country_code.map(QueryValue::text),
        }
    }
}
