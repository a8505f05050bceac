//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteSegment, SearchRequest, ValidationError};

/// Search form as posted by the browser.
///
/// Every field is optional here so that a missing field is reported as a
/// validation error rather than a form rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub train_number: Option<String>,
    pub departure_station: Option<String>,
    pub arrival_station: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
}

impl SearchForm {
    /// Validate the form into a [`SearchRequest`].
    pub fn validate(&self) -> Result<SearchRequest, ValidationError> {
        SearchRequest::new(
            self.train_number.as_deref().unwrap_or_default(),
            self.departure_station.as_deref().unwrap_or_default(),
            self.arrival_station.as_deref().unwrap_or_default(),
            self.day.as_deref().unwrap_or_default(),
            self.month.as_deref().unwrap_or_default(),
        )
    }
}

/// Successful search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Always `true`
    pub success: bool,

    /// Stops from departure to arrival; empty when no segment was found
    pub stations: RouteSegment,
}

impl SearchResponse {
    pub fn new(stations: RouteSegment) -> Self {
        Self {
            success: true,
            stations,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SegmentStop, StopRecord};

    fn form() -> SearchForm {
        SearchForm {
            train_number: Some("016А".into()),
            departure_station: Some("Москва".into()),
            arrival_station: Some("Тверь".into()),
            day: Some("15".into()),
            month: Some("3".into()),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let req = form().validate().unwrap();
        assert_eq!(req.departure_station(), "москва");
        assert_eq!(req.arrival_station(), "тверь");
    }

    #[test]
    fn missing_field_is_required_error() {
        let form = SearchForm {
            day: None,
            ..form()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::Required { field: "day" }
        );
    }

    #[test]
    fn success_response_shape() {
        let mut stop = StopRecord::new("ТВЕРЬ");
        stop.arrival_time = Some("11:00".into());
        let segment = RouteSegment::new(vec![SegmentStop::from_record(1, &stop)]);

        let json = serde_json::to_value(SearchResponse::new(segment)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["stations"][0]["indexItem"], 1);
        assert_eq!(json["stations"][0]["station"], "ТВЕРЬ");
        assert_eq!(json["stations"][0]["departure_time"], "");
        assert_eq!(json["stations"][0]["stop_time"], 0);
    }

    #[test]
    fn empty_success_has_empty_stations() {
        let json = serde_json::to_string(&SearchResponse::new(RouteSegment::empty())).unwrap();
        assert_eq!(json, r#"{"success":true,"stations":[]}"#);
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse::new("day is required")).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"day is required"}"#);
    }
}
