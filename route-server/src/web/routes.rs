//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::cache::CacheStore;
use crate::domain::ValidationError;
use crate::provider::TimetableProvider;
use crate::search::SearchError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<P, C>(state: AppState<P, C>, static_dir: &str) -> Router
where
    P: TimetableProvider + 'static,
    C: CacheStore + 'static,
{
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", post(search::<P, C>))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Find the stops between two stations on a train's route.
async fn search<P, C>(
    State(state): State<AppState<P, C>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Json<SearchResponse>, AppError>
where
    P: TimetableProvider,
    C: CacheStore,
{
    let Form(form) = form?;
    let request = form
        .validate()
        .inspect_err(|e| debug!(field = e.field(), "search form rejected"))?;
    let segment = state.search.search(&request).await?;

    Ok(Json(SearchResponse::new(segment)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Input the caller can fix: bad fields or an unknown station
    Unprocessable { message: String },
    /// Provider failure or anything else on our side
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Unprocessable {
            message: e.to_string(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(e: FormRejection) -> Self {
        AppError::Unprocessable {
            message: e.body_text(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::StationMapping(_) => AppError::Unprocessable {
                message: e.to_string(),
            },
            SearchError::ProviderTransport(_) | SearchError::ProviderData(_) => {
                AppError::Internal {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Unprocessable { message } => {
                warn!(status = status.as_u16(), %message, "request rejected");
                message
            }
            AppError::Internal { message } => {
                error!(status = status.as_u16(), %message, "request failed");
                message
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cache::{CacheConfig, MokaStore};
    use crate::provider::{MockProvider, ProviderError};
    use crate::search::SearchOrchestrator;
    use crate::stations::{StaticStationDirectory, StationMappingError};

    fn state() -> AppState<MockProvider, MokaStore> {
        let provider = MockProvider::new("data/mock_routes").unwrap();
        let cache = MokaStore::new(&CacheConfig::default());
        AppState::new(SearchOrchestrator::new(
            provider,
            cache,
            Arc::new(StaticStationDirectory::default()),
        ))
    }

    fn form(train: &str, from: &str, to: &str) -> SearchForm {
        SearchForm {
            train_number: Some(train.into()),
            departure_station: Some(from.into()),
            arrival_station: Some(to.into()),
            day: Some("15".into()),
            month: Some("3".into()),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn search_returns_segment() {
        let Json(response) = search(
            State(state()),
            Ok(Form(form("016А", "Москва", "Санкт-Петербург"))),
        )
        .await
        .unwrap();

        assert!(response.success);
        let stations = response.stations.stops();
        assert_eq!(stations.len(), 6);
        assert_eq!(stations[0].station_name, "МОСКВА ОКТЯБРЬСКАЯ");
        assert_eq!(stations[2].dwell_minutes, 2);
        assert_eq!(stations[5].station_name, "САНКТ-ПЕТЕРБУРГ ГЛАВН.");
        assert_eq!(stations[5].index, 6);
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let mut bad = form("016А", "Москва", "Санкт-Петербург");
        bad.month = Some("13".into());

        let err = search(State(state()), Ok(Form(bad))).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn unknown_station_is_422() {
        let err = search(State(state()), Ok(Form(form("016А", "Тверь", "Москва"))))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_train_is_500() {
        let err = search(
            State(state()),
            Ok(Form(form("999Я", "Москва", "Санкт-Петербург"))),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("999Я"));
    }

    #[test]
    fn error_status_mapping() {
        let mapping = AppError::from(SearchError::StationMapping(StationMappingError::NotFound {
            station: "x".into(),
        }));
        assert_eq!(mapping.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let data = AppError::from(SearchError::from(ProviderError::EmptyResponse));
        assert_eq!(data.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let transport = AppError::from(SearchError::from(ProviderError::Unauthorized));
        assert_eq!(transport.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let validation = AppError::from(ValidationError::SameStation);
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn undecodable_form_is_json_422() {
        use axum::body::Body;
        use axum::extract::FromRequest;
        use axum::http::Request;

        // Wrong content type
        let request = Request::post("/search")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"train_number": "016А"}"#))
            .unwrap();
        let rejection = Form::<SearchForm>::from_request(request, &())
            .await
            .unwrap_err();

        let err = search(State(state()), Err(rejection)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
