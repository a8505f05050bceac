//! Station directory error types.

/// Errors from mapping a station name to a provider code.
#[derive(Debug, thiserror::Error)]
pub enum StationMappingError {
    /// Station not present in the directory
    #[error("station \"{station}\" not found in the station list")]
    NotFound { station: String },

    /// Directory file could not be read or parsed
    #[error("failed to load station directory: {message}")]
    Load { message: String },
}
