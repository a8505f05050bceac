//! Mock timetable provider for running without provider access.
//!
//! Loads sample `trainRoute` responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::convert::{TrainRoute, convert_route};
use super::error::ProviderError;
use super::query::{RouteQuery, TimetableProvider};
use super::types::TrainRouteResponse;

/// Mock provider that serves routes from JSON files.
///
/// Each file holds one provider response; files are indexed by
/// `train_description.number`. Station codes and dates in the query are
/// ignored, since mock data is static.
#[derive(Debug, Clone)]
pub struct MockProvider {
    routes: Arc<HashMap<String, TrainRouteResponse>>,
}

impl MockProvider {
    /// Create a new mock provider by loading every `*.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            ProviderError::Fixture(format!(
                "failed to read mock data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                ProviderError::Fixture(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                ProviderError::Fixture(format!("failed to read {}: {}", path.display(), e))
            })?;

            let response: TrainRouteResponse = serde_json::from_str(&json).map_err(|e| {
                ProviderError::Fixture(format!("failed to parse {}: {}", path.display(), e))
            })?;

            let Some(number) = response
                .train_description
                .as_ref()
                .and_then(|d| d.number.clone())
            else {
                warn!(path = %path.display(), "skipping fixture without train number");
                continue;
            };

            routes.insert(number, response);
        }

        if routes.is_empty() {
            return Err(ProviderError::Fixture(format!(
                "no mock route files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            routes: Arc::new(routes),
        })
    }

    /// List the train numbers available in the mock data.
    pub fn available_trains(&self) -> Vec<String> {
        let mut trains: Vec<String> = self.routes.keys().cloned().collect();
        trains.sort();
        trains
    }
}

impl TimetableProvider for MockProvider {
    async fn train_route(&self, query: &RouteQuery) -> Result<TrainRoute, ProviderError> {
        debug!(train = %query.train_number, "serving mock route");

        let response = self
            .routes
            .get(&query.train_number)
            .cloned()
            .ok_or_else(|| ProviderError::Api {
                status: 404,
                message: format!(
                    "No mock data for train {}. Available: {:?}",
                    query.train_number,
                    self.available_trains()
                ),
            })?;

        convert_route(response)
    }
}
