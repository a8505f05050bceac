//! Station name → provider code lookup.
//!
//! The timetable provider identifies stations by numeric codes, while users
//! type names. The directory is injected into the orchestrator so it can be
//! backed by a static table, a config file or a remote service.

mod directory;
mod error;

pub use directory::{StaticStationDirectory, StationDirectory};
pub use error::StationMappingError;
