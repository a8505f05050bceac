//! Validated search request.

use super::error::ValidationError;

/// Maximum length of a train number, in characters.
pub const MAX_TRAIN_NUMBER_LEN: usize = 20;

/// Maximum length of a station name, in characters.
pub const MAX_STATION_LEN: usize = 100;

/// A request for the part of a train's route between two stations.
///
/// Station names are stored trimmed and lowercased, so two requests that
/// differ only in case or surrounding whitespace are equal. The only way to
/// build one is [`SearchRequest::new`], which enforces every field rule.
///
/// # Examples
///
/// ```
/// use route_server::domain::SearchRequest;
///
/// let req = SearchRequest::new("016А", "  Москва ", "Санкт-Петербург", "15", "3").unwrap();
/// assert_eq!(req.departure_station(), "москва");
/// assert_eq!(req.day(), 15);
///
/// // Same station twice is rejected
/// assert!(SearchRequest::new("016А", "Москва", "москва", "15", "3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    train_number: String,
    departure_station: String,
    arrival_station: String,
    day: u8,
    month: u8,
}

impl SearchRequest {
    /// Validate raw boundary fields and build a request.
    ///
    /// Fields are checked in order and the first failure is returned.
    pub fn new(
        train_number: &str,
        departure_station: &str,
        arrival_station: &str,
        day: &str,
        month: &str,
    ) -> Result<Self, ValidationError> {
        let train_number = bounded_text("train_number", train_number, MAX_TRAIN_NUMBER_LEN)?;
        let departure_station =
            bounded_text("departure_station", departure_station, MAX_STATION_LEN)?;
        let arrival_station = bounded_text("arrival_station", arrival_station, MAX_STATION_LEN)?;
        let day = bounded_int("day", day, 1, 31)?;
        let month = bounded_int("month", month, 1, 12)?;

        let departure_station = normalize_station(departure_station);
        let arrival_station = normalize_station(arrival_station);

        if departure_station == arrival_station {
            return Err(ValidationError::SameStation);
        }

        Ok(Self {
            train_number: train_number.to_string(),
            departure_station,
            arrival_station,
            day,
            month,
        })
    }

    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    /// Departure station, trimmed and lowercased.
    pub fn departure_station(&self) -> &str {
        &self.departure_station
    }

    /// Arrival station, trimmed and lowercased.
    pub fn arrival_station(&self) -> &str {
        &self.arrival_station
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

/// Trim and lowercase a station name (Unicode-aware).
pub fn normalize_station(name: &str) -> String {
    name.trim().to_lowercase()
}

fn bounded_text<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value)
}

/// Parse a whole number, accepting decimal spellings such as `"15.0"`.
///
/// Anything numeric but too large for the range is `OutOfRange`, not
/// `NotInteger`.
fn bounded_int(field: &'static str, value: &str, min: u8, max: u8) -> Result<u8, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    let n = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .ok_or(ValidationError::NotInteger { field })?;
    if n < f64::from(min) || n > f64::from(max) {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(n as u8)
}
