//! Timetable provider error types.

use std::fmt;

/// Errors from the timetable provider.
///
/// Messages never contain credentials: they are only sent in request bodies,
/// which are not echoed here.
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body was not the expected JSON
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider returned an error status code
    Api { status: u16, message: String },

    /// Credentials rejected
    Unauthorized,

    /// Provider answered with no data at all
    EmptyResponse,

    /// Provider answered but omitted a required top-level field
    MissingField(&'static str),

    /// Mock fixtures could not be loaded
    Fixture(String),
}

impl ProviderError {
    /// Whether the provider answered but the payload was unusable.
    ///
    /// Everything else is a transport or protocol failure.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            ProviderError::EmptyResponse | ProviderError::MissingField(_)
        )
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "provider request failed: {e}"),
            ProviderError::Json { message, body } => {
                write!(f, "provider JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ProviderError::Api { status, message } => {
                write!(f, "provider error {status}: {message}")
            }
            ProviderError::Unauthorized => {
                write!(f, "unauthorized (provider rejected credentials)")
            }
            ProviderError::EmptyResponse => {
                write!(f, "provider response error: service returned no data")
            }
            ProviderError::MissingField(field) => {
                write!(f, "provider response error: missing {field}")
            }
            ProviderError::Fixture(msg) => write!(f, "mock fixture error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}
