use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use route_server::cache::{CacheStore, MokaStore};
use route_server::config::{AppConfig, ConfigError};
use route_server::provider::{MockProvider, ProviderClient, ProviderError, TimetableProvider};
use route_server::search::SearchOrchestrator;
use route_server::stations::{StaticStationDirectory, StationDirectory, StationMappingError};
use route_server::web::{AppState, create_router};

/// Anything that stops the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stations(#[from] StationMappingError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let stations: Arc<dyn StationDirectory> = match &config.station_codes_path {
        Some(path) => {
            let directory = StaticStationDirectory::from_json_file(path)?;
            info!(path = %path.display(), stations = directory.len(), "loaded station directory");
            Arc::new(directory)
        }
        None => {
            info!("using built-in station directory");
            Arc::new(StaticStationDirectory::default())
        }
    };

    let cache = MokaStore::new(&config.cache);

    match &config.mock_routes_dir {
        Some(dir) => {
            let provider = MockProvider::new(dir)?;
            info!(
                dir = %dir.display(),
                trains = ?provider.available_trains(),
                "serving mock routes"
            );
            serve(&config, provider, cache, stations).await
        }
        None => {
            for var in config.missing_credentials() {
                warn!(var, "not set, provider calls will fail");
            }
            let provider = ProviderClient::new(config.provider.clone())?;
            info!(endpoint = provider.endpoint(), "using live provider");
            serve(&config, provider, cache, stations).await
        }
    }
}

async fn serve<P, C>(
    config: &AppConfig,
    provider: P,
    cache: C,
    stations: Arc<dyn StationDirectory>,
) -> Result<(), StartupError>
where
    P: TimetableProvider + 'static,
    C: CacheStore + 'static,
{
    let orchestrator = SearchOrchestrator::new(provider, cache, stations).with_ttl(config.cache.ttl);
    let app = create_router(AppState::new(orchestrator), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "route server listening");
    info!("  GET  /        - Search page");
    info!("  GET  /health  - Health check");
    info!("  POST /search  - Find the stops between two stations");

    axum::serve(listener, app).await?;
    Ok(())
}
