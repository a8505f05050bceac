//! Cache-first search state machine.
//!
//! ```text
//! Start → CacheCheck ─┬─ hit  → Respond
//!                     └─ miss → ProviderFetch ─┬─ ok  → Extract → CacheWrite → Respond
//!                                              └─ err → RespondError
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::cache::{CacheKey, CacheStore, DEFAULT_TTL};
use crate::domain::{RouteSegment, SearchRequest};
use crate::provider::{ProviderError, RouteQuery, TimetableProvider};
use crate::segment::extract;
use crate::stations::{StationDirectory, StationMappingError};

/// Why a search could not produce a segment.
///
/// An empty segment is not an error. Every variant aborts the search before
/// anything is written to the cache.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A station name has no provider code
    #[error(transparent)]
    StationMapping(#[from] StationMappingError),

    /// The provider could not be reached or refused the request
    #[error(transparent)]
    ProviderTransport(ProviderError),

    /// The provider answered without the data we need
    #[error(transparent)]
    ProviderData(ProviderError),
}

impl From<ProviderError> for SearchError {
    fn from(err: ProviderError) -> Self {
        if err.is_data_error() {
            SearchError::ProviderData(err)
        } else {
            SearchError::ProviderTransport(err)
        }
    }
}

/// Coordinates cache, station directory, provider and extractor for a search.
///
/// Holds no per-request state; one instance serves all requests concurrently.
/// Concurrent misses for the same key are not de-duplicated: each calls the
/// provider and the last cache write wins.
pub struct SearchOrchestrator<P, C> {
    provider: P,
    cache: C,
    stations: Arc<dyn StationDirectory>,
    ttl: Duration,
}

impl<P, C> SearchOrchestrator<P, C>
where
    P: TimetableProvider,
    C: CacheStore,
{
    /// Create an orchestrator writing cache entries with the default 5-minute TTL.
    pub fn new(provider: P, cache: C, stations: Arc<dyn StationDirectory>) -> Self {
        Self {
            provider,
            cache,
            stations,
            ttl: DEFAULT_TTL,
        }
    }

    /// Set the TTL used for cache writes.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Find the route segment for `request`.
    ///
    /// Reads the cache exactly once. On a hit the provider is not contacted.
    /// On a miss the provider is called once and the extracted segment is
    /// cached even when it is empty. Errors are returned unchanged and leave
    /// the cache untouched.
    pub async fn search(&self, request: &SearchRequest) -> Result<RouteSegment, SearchError> {
        let key = CacheKey::for_request(request);

        info!(
            train_number = request.train_number(),
            departure_station = request.departure_station(),
            arrival_station = request.arrival_station(),
            day = request.day(),
            month = request.month(),
            "search requested"
        );

        match self.cache.get(key.as_str()).await {
            Some(bytes) => match serde_json::from_slice::<RouteSegment>(&bytes) {
                Ok(segment) => {
                    info!(key = %key, stations = segment.len(), "cache hit");
                    return Ok(segment);
                }
                Err(e) => warn!(key = %key, error = %e, "unreadable cache entry, refetching"),
            },
            None => info!(key = %key, "cache miss"),
        }

        let segment = self
            .fetch_and_extract(request)
            .await
            .inspect_err(|e| error!(key = %key, error = %e, "search failed"))?;
        info!(key = %key, stations = segment.len(), "segment extracted");

        match serde_json::to_vec(&segment) {
            Ok(bytes) => {
                self.cache.set(key.as_str(), bytes, self.ttl).await;
                info!(key = %key, ttl_secs = self.ttl.as_secs(), "cache write");
            }
            Err(e) => warn!(key = %key, error = %e, "failed to serialize segment, not cached"),
        }

        Ok(segment)
    }

    /// Map stations, call the provider and extract the segment.
    async fn fetch_and_extract(&self, request: &SearchRequest) -> Result<RouteSegment, SearchError> {
        let query = RouteQuery {
            train_number: request.train_number().to_string(),
            from: self.stations.map(request.departure_station())?,
            to: self.stations.map(request.arrival_station())?,
            day: request.day(),
            month: request.month(),
        };

        let route = self.provider.train_route(&query).await?;

        Ok(extract(
            &route.stops,
            request.departure_station(),
            request.arrival_station(),
        ))
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Access the underlying cache store.
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
