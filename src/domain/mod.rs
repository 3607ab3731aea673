//! Domain layer: validated input types and response shapes (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{PhoneQuery, QueryValue};
pub use response::{Decomposition, FieldError, LookupResponse, Outcome, Rejection};
pub use validation::ValidationError;
pub use value::{CallingCode, CleanedNumber, ErrorKind, Field, RegionCode};
