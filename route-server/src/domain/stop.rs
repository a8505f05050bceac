//! Stops on a train's route and the extracted segment.

use serde::{Deserialize, Serialize};

/// A stop as reported by the timetable provider.
///
/// Times are kept as the provider's strings ("HH:MM"); we never do arithmetic
/// on them, only pass them through to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    /// Station name in the provider's casing.
    pub name: String,

    /// Arrival time, absent at the origin.
    pub arrival_time: Option<String>,

    /// Departure time, absent at the terminus.
    pub departure_time: Option<String>,

    /// Dwell time in minutes.
    pub dwell_minutes: Option<u32>,
}

impl StopRecord {
    /// Create a stop with no timing information.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            departure_time: None,
            dwell_minutes: None,
        }
    }
}

/// One stop of an extracted [`RouteSegment`].
///
/// Serialized with the field names the front end and the cache expect:
/// `indexItem`, `station`, `arrival_time`, `departure_time`, `stop_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStop {
    /// Position within the segment, starting at 1.
    #[serde(rename = "indexItem")]
    pub index: u32,

    /// Station name with its original casing.
    #[serde(rename = "station")]
    pub station_name: String,

    /// Arrival time, empty if the provider gave none.
    pub arrival_time: String,

    /// Departure time, empty if the provider gave none.
    pub departure_time: String,

    /// Dwell time in minutes, 0 if the provider gave none.
    #[serde(rename = "stop_time")]
    pub dwell_minutes: u32,
}

impl SegmentStop {
    /// Build a segment stop from a provider stop, filling in defaults.
    pub fn from_record(index: u32, record: &StopRecord) -> Self {
        Self {
            index,
            station_name: record.name.clone(),
            arrival_time: record.arrival_time.clone().unwrap_or_default(),
            departure_time: record.departure_time.clone().unwrap_or_default(),
            dwell_minutes: record.dwell_minutes.unwrap_or(0),
        }
    }
}

/// The contiguous run of stops between a departure and an arrival station.
///
/// An empty segment means "no route found" and is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteSegment(Vec<SegmentStop>);

impl RouteSegment {
    /// Wrap an ordered list of stops.
    pub fn new(stops: Vec<SegmentStop>) -> Self {
        Self(stops)
    }

    /// The empty segment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[SegmentStop] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SegmentStop> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RouteSegment {
    type Item = &'a SegmentStop;
    type IntoIter = std::slice::Iter<'a, SegmentStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_fills_defaults() {
        let stop = SegmentStop::from_record(1, &StopRecord::new("МОСКВА"));

        assert_eq!(stop.index, 1);
        assert_eq!(stop.station_name, "МОСКВА");
        assert_eq!(stop.arrival_time, "");
        assert_eq!(stop.departure_time, "");
        assert_eq!(stop.dwell_minutes, 0);
    }

    #[test]
    fn from_record_copies_times() {
        let mut record = StopRecord::new("Тверь");
        record.arrival_time = Some("11:00".into());
        record.departure_time = Some("11:05".into());
        record.dwell_minutes = Some(5);

        let stop = SegmentStop::from_record(2, &record);

        assert_eq!(stop.arrival_time, "11:00");
        assert_eq!(stop.departure_time, "11:05");
        assert_eq!(stop.dwell_minutes, 5);
    }

    #[test]
    fn segment_serializes_with_wire_field_names() {
        let segment = RouteSegment::new(vec![SegmentStop {
            index: 1,
            station_name: "МОСКВА".into(),
            arrival_time: "08:15".into(),
            departure_time: "09:00".into(),
            dwell_minutes: 45,
        }]);

        let json = serde_json::to_string(&segment).unwrap();

        // Non-ASCII stays unescaped
        assert_eq!(
            json,
            r#"[{"indexItem":1,"station":"МОСКВА","arrival_time":"08:15","departure_time":"09:00","stop_time":45}]"#
        );
    }

    #[test]
    fn empty_segment_serializes_as_empty_array() {
        assert_eq!(serde_json::to_string(&RouteSegment::empty()).unwrap(), "[]");
    }
}
