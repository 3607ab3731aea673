use std::collections::BTreeMap;

use crate::domain::{Field, PhoneQuery, QueryValue};

/// Decode a raw URL query string into a [`PhoneQuery`].
///
/// Keys follow the usual bracket conventions so that array- and object-shaped values
/// stay distinguishable from plain strings:
/// - `k=v` is text; repeating `k` turns it into a list,
/// - `k[]=v` appends to a list,
/// - `k[x]=v` sets member `x` of a map.
///
/// Keys other than `phoneNumber` and `countryCode` are ignored.
pub fn decode_query(raw: Option<&str>) -> PhoneQuery {
    let mut query = PhoneQuery::default();
    let Some(raw) = raw else {
        return query;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        let (name, incoming) = split_key(&key, value.into_owned());
        let slot = if name == Field::PhoneNumber.as_str() {
            &mut query.phone_number
        } else if name == Field::CountryCode.as_str() {
            &mut query.country_code
        } else {
            continue;
        };
        *slot = Some(merge(slot.take(), incoming));
    }

    query
}

fn split_key(key: &str, value: String) -> (&str, QueryValue) {
    let Some((name, rest)) = key.split_once('[') else {
        return (key, QueryValue::Text(value));
    };
    match rest.strip_suffix(']') {
        Some("") => (name, QueryValue::List(vec![QueryValue::Text(value)])),
        Some(member) if !member.contains(['[', ']']) => (
            name,
            QueryValue::Map(BTreeMap::from([(member.to_owned(), QueryValue::Text(value))])),
        ),
        // Deeper nesting is out of scope; keep it non-text.
        _ => (name, QueryValue::List(vec![QueryValue::Text(value)])),
    }
}

fn merge(existing: Option<QueryValue>, incoming: QueryValue) -> QueryValue {
    match (existing, incoming) {
        (None, incoming) => incoming,
        (Some(QueryValue::List(mut items)), QueryValue::List(more)) => {
            items.extend(more);
            QueryValue::List(items)
        }
        (Some(QueryValue::List(mut items)), incoming) => {
            items.push(incoming);
            QueryValue::List(items)
        }
        (Some(QueryValue::Map(mut members)), QueryValue::Map(more)) => {
            members.extend(more);
            QueryValue::Map(members)
        }
        (Some(existing), QueryValue::List(more)) => {
            let mut items = vec![existing];
            items.extend(more);
            QueryValue::List(items)
        }
        (Some(existing), incoming) => QueryValue::List(vec![existing, incoming]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_query_has_no_fields() {
        assert_eq!(decode_query(None), PhoneQuery::default());
        assert_eq!(decode_query(Some("")), PhoneQuery::default());
    }

    #[test]
    fn plain_keys_decode_as_text() {
        let query = decode_query(Some("phoneNumber=16573310806&countryCode=US"));
        assert_eq!(query, PhoneQuery::new(Some("16573310806"), Some("US")));
    }

    #[test]
    fn percent_and_plus_encoding_is_decoded() {
        let query = decode_query(Some("phoneNumber=%2B1+657+3310806"));
        assert_eq!(query, PhoneQuery::new(Some("+1 657 3310806"), None));

        let query = decode_query(Some("phoneNumber=%2B1%20657%203310806"));
        assert_eq!(query, PhoneQuery::new(Some("+1 657 3310806"), None));
    }

    #[test]
    fn empty_value_is_still_text() {
        let query = decode_query(Some("phoneNumber=&countryCode"));
        assert_eq!(query, PhoneQuery::new(Some(""), Some("")));
    }

    #[test]
    fn repeated_keys_become_lists() {
        let query = decode_query(Some("phoneNumber=1&phoneNumber=2&phoneNumber=3"));
        assert_eq!(
            query.phone_number,
            Some(QueryValue::List(vec![
                QueryValue::text("1"),
                QueryValue::text("2"),
                QueryValue::text("3"),
            ]))
        );
    }

    #[test]
    fn bracket_keys_are_not_text() {
        let query = decode_query(Some("phoneNumber[]=16573310806&countryCode[a]=US"));
        assert_eq!(
            query.phone_number,
            Some(QueryValue::List(vec![QueryValue::text("16573310806")]))
        );
        assert_eq!(
            query.country_code,
            Some(QueryValue::Map(BTreeMap::from([(
                "a".to_owned(),
                QueryValue::text("US")
            )])))
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let query = decode_query(Some("foo=bar&phoneNumber=16573310806&PhoneNumber=x"));
        assert_eq!(query, PhoneQuery::new(Some("16573310806"), None));
    }
}
