//! Domain error types.
//!
//! These errors describe malformed search input. They are raised before any
//! cache or provider access and always map to a client error.

/// A search request field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field absent or blank
    #[error("{field}: field is required")]
    Required { field: &'static str },

    /// Field longer than allowed
    #[error("{field}: must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Field is not a whole number
    #[error("{field}: must be an integer")]
    NotInteger { field: &'static str },

    /// Number outside the allowed range
    #[error("{field}: must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
    },

    /// Arrival station equals departure station
    #[error("arrival_station: must differ from departure_station")]
    SameStation,
}

impl ValidationError {
    /// The request field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotInteger { field }
            | ValidationError::OutOfRange { field, .. } => field,
            ValidationError::SameStation => "arrival_station",
        }
    }
}
