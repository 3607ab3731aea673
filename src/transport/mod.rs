//! Transport layer: HTTP wire-format details (query decoding, JSON encoding).

mod query;

pub use query::decode_query;

use crate::domain::LookupResponse;

/// Render a response body as JSON indented with two spaces.
pub fn encode_response(response: &LookupResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}
