//! Station directory implementations.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{StationCode, normalize_station};

use super::error::StationMappingError;

/// Built-in entries used when no directory file is configured.
const BUILTIN_STATIONS: &[(&str, u32)] = &[("москва", 2000000), ("санкт-петербург", 2004000)];

/// Maps a normalized station name to the provider's station code.
pub trait StationDirectory: Send + Sync {
    /// Look up the code for `station`.
    ///
    /// `station` is expected to be normalized already (trimmed, lowercased).
    fn map(&self, station: &str) -> Result<StationCode, StationMappingError>;
}

/// Station directory held entirely in memory.
///
/// Lookups are exact on the normalized name; no fuzzy matching is done here.
#[derive(Debug, Clone)]
pub struct StaticStationDirectory {
    codes: HashMap<String, StationCode>,
}

impl StaticStationDirectory {
    /// Build a directory from `(name, code)` pairs. Names are normalized.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, StationCode)>,
        S: AsRef<str>,
    {
        let codes = entries
            .into_iter()
            .map(|(name, code)| (normalize_station(name.as_ref()), code))
            .collect();

        Self { codes }
    }

    /// Load a directory from a JSON object of `{"station name": code}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StationMappingError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| StationMappingError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let entries: HashMap<String, StationCode> =
            serde_json::from_str(&contents).map_err(|e| StationMappingError::Load {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        Ok(Self::from_entries(entries))
    }

    /// Get the number of stations in the directory.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for StaticStationDirectory {
    fn default() -> Self {
        Self::from_entries(
            BUILTIN_STATIONS
                .iter()
                .map(|&(name, code)| (name, StationCode::new(code))),
        )
    }
}

impl StationDirectory for StaticStationDirectory {
    fn map(&self, station: &str) -> Result<StationCode, StationMappingError> {
        self.codes
            .get(station)
            .copied()
            .ok_or_else(|| StationMappingError::NotFound {
                station: station.to_string(),
            })
    }
}
