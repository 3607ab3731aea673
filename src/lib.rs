//! Phone number lookup service.
//!
//! Takes a phone number (and optionally an ISO 3166-1 alpha-2 `countryCode`) as typed by
//! a user and splits it into region, area code and local number. The layers follow the
//! usual split: a domain layer of validated types, a lookup layer wrapping the
//! `phonenumber` metadata, a service layer with the decision procedure, and a thin
//! HTTP transport/server on top.
//!
//! ```rust
//! use phone_lookup::{LookupResponse, PhoneNumberService, PhoneQuery};
//!
//! let service = PhoneNumberService::new();
//! let query = PhoneQuery::new(Some("+1 657 3310806"), None);
//! match service.handle(&query) {
//!     LookupResponse::Found(found) => assert_eq!(found.area_code, "657"),
//!     LookupResponse::Rejected(rejection) => panic!("{rejection:?}"),
//! }
//! ```
#![forbid(unsafe_code)]

pub mod domain;
pub mod lookup;
pub mod server;
pub mod service;
mod transport;

pub use domain::{
    CallingCode, CleanedNumber, Decomposition, ErrorKind, Field, LookupResponse, Outcome,
    PhoneQuery, QueryValue, RegionCode, Rejection, ValidationError,
};
pub use lookup::{LookupResult, MetadataLookup, NumberData, NumberLookup};
pub use server::{ServerConfig, ServerError};
pub use service::PhoneNumberService;
pub use transport::{decode_query, encode_response};
