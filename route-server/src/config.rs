//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::provider::{ProviderConfig, ProviderCredentials};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Live provider settings
    pub provider: ProviderConfig,

    /// Route cache settings
    pub cache: CacheConfig,

    /// JSON file of `{"station name": code}`; built-in table if unset
    pub station_codes_path: Option<PathBuf>,

    /// Directory of fixture responses; when set the live provider is not used
    pub mock_routes_dir: Option<PathBuf>,

    /// Directory served under `/static`
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr =
            parse("BIND_ADDR", get("BIND_ADDR"))?.unwrap_or(DEFAULT_BIND_ADDR);

        let mut credentials = ProviderCredentials::new(
            get("PROVIDER_LOGIN").unwrap_or_default(),
            get("PROVIDER_PASSWORD").unwrap_or_default(),
            get("PROVIDER_TERMINAL").unwrap_or_default(),
            get("PROVIDER_REPRESENT_ID").unwrap_or_default(),
        );
        if let Some(language) = get("PROVIDER_LANGUAGE") {
            credentials.language = language;
        }
        if let Some(currency) = get("PROVIDER_CURRENCY") {
            credentials.currency = currency;
        }

        let mut provider =
            ProviderConfig::new(get("PROVIDER_BASE_URL").unwrap_or_default(), credentials);
        if let Some(secs) = parse("PROVIDER_TIMEOUT_SECS", get("PROVIDER_TIMEOUT_SECS"))? {
            provider = provider.with_timeout(secs);
        }
        if let Some(n) = parse::<usize>("PROVIDER_MAX_CONCURRENT", get("PROVIDER_MAX_CONCURRENT"))? {
            if n == 0 {
                return Err(ConfigError::Invalid {
                    var: "PROVIDER_MAX_CONCURRENT",
                    value: n.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            provider = provider.with_max_concurrent(n);
        }

        let mut cache = CacheConfig::default();
        if let Some(capacity) = parse("CACHE_MAX_CAPACITY", get("CACHE_MAX_CAPACITY"))? {
            cache.max_capacity = capacity;
        }

        Ok(Self {
            bind_addr,
            provider,
            cache,
            station_codes_path: get("STATION_CODES_PATH").map(PathBuf::from),
            mock_routes_dir: get("MOCK_ROUTES_DIR").map(PathBuf::from),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        })
    }

    /// Names of the provider variables that are unset.
    ///
    /// Only relevant when talking to the live provider; requests will fail
    /// without them but the server still starts.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let creds = &self.provider.credentials;
        [
            ("PROVIDER_BASE_URL", self.provider.base_url.as_str()),
            ("PROVIDER_LOGIN", creds.login.as_str()),
            ("PROVIDER_PASSWORD", creds.password.as_str()),
            ("PROVIDER_TERMINAL", creds.terminal.as_str()),
            ("PROVIDER_REPRESENT_ID", creds.represent_id.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn parse<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                value: v.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
