//! Provider-facing query and the provider abstraction.

use std::future::Future;

use crate::domain::StationCode;

use super::convert::TrainRoute;
use super::error::ProviderError;

/// Everything the provider needs to look up one train's route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub train_number: String,
    pub from: StationCode,
    pub to: StationCode,
    pub day: u8,
    pub month: u8,
}

/// Source of train routes.
///
/// Each call is independent: implementations keep no per-request state and
/// return the result directly. Implementations must bound their own latency
/// (e.g. with a request timeout) rather than hang.
pub trait TimetableProvider: Send + Sync {
    /// Fetch the route of `query.train_number` for the given endpoints and date.
    fn train_route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<TrainRoute, ProviderError>> + Send;
}
