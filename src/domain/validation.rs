use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    LeadingSpace,
    TooManySeparators { max: usize, actual: usize },
    LengthOutOfRange { min: usize, max: usize, actual: usize },
    NonDigit { input: String },
    InvalidRegionCode { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeadingSpace => write!(f, "phone number must not start with a space"),
            Self::TooManySeparators { max, actual } => {
                write!(f, "too many spaces: {actual} (max {max})")
            }
            Self::LengthOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "phone number length out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::NonDigit { input } => write!(f, "phone number contains non-digits: {input}"),
            Self::InvalidRegionCode { input } => {
                write!(f, "not an ISO 3166-1 alpha-2 region code: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
