//! Conversion from provider DTOs to domain types.
//!
//! This is where a provider answer is checked for the fields we depend on.
//! A response that parses but lacks them is a data error, not a transport
//! error.

use crate::domain::StopRecord;

use super::error::ProviderError;
use super::types::{StopDto, TrainRouteResponse};

/// Summary of the train the route belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainDescription {
    pub number: Option<String>,
    pub route_name: Option<String>,
}

/// A validated provider answer: the train and its ordered stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRoute {
    pub description: TrainDescription,
    pub stops: Vec<StopRecord>,
}

/// Parse a raw provider body into a validated route.
///
/// `null`, `{}` or `[]` is [`ProviderError::EmptyResponse`]; anything that is not
/// JSON is [`ProviderError::Json`].
pub fn parse_route_body(body: &str) -> Result<TrainRoute, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ProviderError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let is_empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(ProviderError::EmptyResponse);
    }

    let response: TrainRouteResponse =
        serde_json::from_value(value).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: None,
        })?;

    convert_route(response)
}

/// Validate a parsed response and convert it to a [`TrainRoute`].
pub fn convert_route(response: TrainRouteResponse) -> Result<TrainRoute, ProviderError> {
    let description = response
        .train_description
        .ok_or(ProviderError::MissingField("train_description"))?;
    let route_list = response
        .route_list
        .ok_or(ProviderError::MissingField("route_list"))?;

    let stops = route_list
        .stop_list
        .unwrap_or_default()
        .into_iter()
        .map(convert_stop)
        .collect();

    Ok(TrainRoute {
        description: TrainDescription {
            number: description.number,
            route_name: route_list.name,
        },
        stops,
    })
}

fn convert_stop(dto: StopDto) -> StopRecord {
    StopRecord {
        name: dto.stop,
        arrival_time: dto.arrival_time,
        departure_time: dto.departure_time,
        dwell_minutes: dto.stop_time,
    }
}
