//! Provider API DTOs.
//!
//! These types map directly to the provider's `trainRoute` JSON request and
//! response. Response fields are `Option` throughout because the provider
//! omits fields rather than sending nulls, and presence is checked during
//! conversion, not deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::domain::StationCode;

/// Body of a `trainRoute` request.
#[derive(Serialize)]
pub struct TrainRouteRequest<'a> {
    pub auth: AuthBlock<'a>,

    /// Train number as the user typed it (e.g. "016А").
    pub train: &'a str,

    pub travel_info: TravelInfo,
}

/// Authentication block sent with every request.
///
/// Deliberately not `Debug`: it carries the password.
#[derive(Serialize)]
pub struct AuthBlock<'a> {
    pub login: &'a str,
    pub psw: &'a str,
    pub terminal: &'a str,
    pub represent_id: &'a str,
    pub language: &'a str,
    pub currency: &'a str,
}

/// Route endpoints and travel date.
#[derive(Debug, Clone, Serialize)]
pub struct TravelInfo {
    pub from: StationCode,
    pub to: StationCode,
    pub day: u8,
    pub month: u8,
}

/// Response from `trainRoute`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainRouteResponse {
    /// Train summary. Required.
    pub train_description: Option<TrainDescriptionDto>,

    /// Route with its stops. Required.
    pub route_list: Option<RouteListDto>,
}

/// Summary of the train.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainDescriptionDto {
    /// Train number.
    pub number: Option<String>,
}

/// The train's route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteListDto {
    /// Route name (e.g. "МОСКВА - САНКТ-ПЕТЕРБУРГ").
    pub name: Option<String>,

    /// Stops in travel order. Absent means no stops.
    pub stop_list: Option<Vec<StopDto>>,
}

/// A stop on the route.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    /// Station name.
    pub stop: String,

    /// Arrival time, "HH:MM".
    pub arrival_time: Option<String>,

    /// Departure time, "HH:MM".
    pub departure_time: Option<String>,

    /// Dwell time in minutes. Sent as a number or a numeric string.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub stop_time: Option<u32>,
}

/// Read a minute count sent as `5`, `"5"`, `5.0`, `""` or `null`.
///
/// A value that is not a non-negative whole number is dropped with a warning
/// instead of failing the whole route.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let minutes = match &value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(serde_json::Value::Number(n)) => whole_minutes(n.as_f64()),
        Some(serde_json::Value::String(s)) => whole_minutes(s.trim().parse::<f64>().ok()),
        Some(_) => None,
    };

    if minutes.is_none() {
        warn!(stop_time = ?value, "ignoring unreadable stop_time");
    }
    Ok(minutes)
}

fn whole_minutes(n: Option<f64>) -> Option<u32> {
    n.filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n))
        .map(|n| n as u32)
}
