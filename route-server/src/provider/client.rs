//! Timetable provider HTTP client.
//!
//! Talks to the provider's JSON gateway. Handles authentication, bounds
//! concurrency, and converts responses to domain types.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{error, info};

use super::convert::{TrainRoute, parse_route_body};
use super::error::ProviderError;
use super::query::{RouteQuery, TimetableProvider};
use super::types::{AuthBlock, TrainRouteRequest, TravelInfo};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Account details sent in every request's `auth` block.
#[derive(Clone)]
pub struct ProviderCredentials {
    pub login: String,
    pub password: String,
    pub terminal: String,
    pub represent_id: String,
    pub language: String,
    pub currency: String,
}

impl ProviderCredentials {
    /// Create credentials with the default language (`RU`) and currency (`RUB`).
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        terminal: impl Into<String>,
        represent_id: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            terminal: terminal.into(),
            represent_id: represent_id.into(),
            language: "RU".to_string(),
            currency: "RUB".to_string(),
        }
    }

    fn auth_block(&self) -> AuthBlock<'_> {
        AuthBlock {
            login: &self.login,
            psw: &self.password,
            terminal: &self.terminal,
            represent_id: &self.represent_id,
            language: &self.language,
            currency: &self.currency,
        }
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("terminal", &self.terminal)
            .field("represent_id", &self.represent_id)
            .field("language", &self.language)
            .field("currency", &self.currency)
            .finish()
    }
}

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider gateway
    pub base_url: String,
    /// Account details
    pub credentials: ProviderCredentials,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a new config for the given gateway and account.
    pub fn new(base_url: impl Into<String>, credentials: ProviderCredentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Timetable provider API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
/// Cheap to clone; clones share the connection pool and the semaphore.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Arc<ProviderCredentials>,
    semaphore: Arc<Semaphore>,
}

impl ProviderClient {
    /// Create a new provider client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: route_endpoint(&config.base_url),
            credentials: Arc::new(config.credentials),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// The full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TimetableProvider for ProviderClient {
    async fn train_route(&self, query: &RouteQuery) -> Result<TrainRoute, ProviderError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ProviderError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let body = TrainRouteRequest {
            auth: self.credentials.auth_block(),
            train: &query.train_number,
            travel_info: TravelInfo {
                from: query.from,
                to: query.to,
                day: query.day,
                month: query.month,
            },
        };

        info!(
            train = %query.train_number,
            from_code = %query.from,
            to_code = %query.to,
            day = query.day,
            month = query.month,
            "sending provider request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "provider request failed"))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            error!(status = status.as_u16(), "provider rejected credentials");
            return Err(ProviderError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "provider returned error status");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let route = parse_route_body(&body)
            .inspect_err(|e| error!(error = %e, "provider response rejected"))?;

        info!(
            train_number = route.description.number.as_deref().unwrap_or("empty"),
            stops = route.stops.len(),
            "provider response received"
        );

        Ok(route)
    }
}

fn route_endpoint(base_url: &str) -> String {
    format!("{}/trainRoute", base_url.trim_end_matches('/'))
}
