//! Single-pass segment extraction.

use tracing::debug;

use crate::domain::{RouteSegment, SegmentStop, StopRecord};

use super::matcher::matches;

/// Extract the stops from `departure` to `arrival` out of an ordered stop list.
///
/// Collection starts at the first stop matching `departure` and ends at the
/// first stop *at or after it* matching `arrival`; both ends are included and
/// indices are renumbered from 1. Scanning is forward-only, so an arrival match
/// before the departure is ignored.
///
/// Absence of a route is an empty segment, never an error:
/// - an empty stop list gives an empty segment;
/// - if no stop matches `departure`, the segment is empty.
///
/// If a stop matches both queries the segment is that single stop. If
/// `departure` matches but `arrival` never does afterwards, the segment runs
/// to the end of the list. This is best effort and the result is not flagged
/// as incomplete.
pub fn extract(stops: &[StopRecord], departure: &str, arrival: &str) -> RouteSegment {
    if stops.is_empty() {
        debug!(departure, arrival, "stop list empty");
        return RouteSegment::empty();
    }

    debug!(
        departure,
        arrival,
        total_stops = stops.len(),
        "extracting segment"
    );

    let mut result = Vec::new();
    let mut collecting = false;
    let mut index = 1;

    for stop in stops {
        if !collecting && matches(&stop.name, departure) {
            collecting = true;
        }

        if collecting {
            result.push(SegmentStop::from_record(index, stop));
            index += 1;

            if matches(&stop.name, arrival) {
                break;
            }
        }
    }

    debug!(
        departure,
        arrival,
        stations_found = result.len(),
        "segment extracted"
    );

    RouteSegment::new(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stop(name: &str, arr: &str, dep: &str, dwell: u32) -> StopRecord {
        StopRecord {
            name: name.to_string(),
            arrival_time: (!arr.is_empty()).then(|| arr.to_string()),
            departure_time: (!dep.is_empty()).then(|| dep.to_string()),
            dwell_minutes: Some(dwell),
        }
    }

    fn names(segment: &RouteSegment) -> Vec<&str> {
        segment.iter().map(|s| s.station_name.as_str()).collect()
    }

    #[test]
    fn empty_stop_list_gives_empty_segment() {
        assert!(extract(&[], "москва", "санкт-петербург").is_empty());
        assert!(extract(&[], "", "").is_empty());
    }

    #[test]
    fn full_route_between_endpoints() {
        let stops = vec![
            stop("Moscow", "", "09:00", 0),
            stop("Tver", "11:00", "11:05", 5),
            stop("Saint Petersburg", "13:00", "", 0),
        ];

        let segment = extract(&stops, "moscow", "saint petersburg");

        assert_eq!(
            segment.stops(),
            &[
                SegmentStop {
                    index: 1,
                    station_name: "Moscow".into(),
                    arrival_time: "".into(),
                    departure_time: "09:00".into(),
                    dwell_minutes: 0,
                },
                SegmentStop {
                    index: 2,
                    station_name: "Tver".into(),
                    arrival_time: "11:00".into(),
                    departure_time: "11:05".into(),
                    dwell_minutes: 5,
                },
                SegmentStop {
                    index: 3,
                    station_name: "Saint Petersburg".into(),
                    arrival_time: "13:00".into(),
                    departure_time: "".into(),
                    dwell_minutes: 0,
                },
            ]
        );
    }

    #[test]
    fn cyrillic_route_keeps_original_casing() {
        let stops = vec![
            stop("МОСКВА", "", "09:00", 0),
            stop("ТВЕРь", "11:00", "11:05", 5),
            stop("САНКТ-ПЕТЕРБУРГ", "13:00", "", 0),
        ];

        let segment = extract(&stops, "москва", "санкт-петербург");

        assert_eq!(names(&segment), ["МОСКВА", "ТВЕРь", "САНКТ-ПЕТЕРБУРГ"]);
        assert_eq!(segment.stops()[1].index, 2);
    }

    #[test]
    fn excludes_stops_before_departure() {
        let stops = vec![
            stop("Нижний Новгород", "", "", 0),
            stop("Владимир", "", "", 0),
            stop("Москва", "", "09:00", 0),
            stop("Санкт-Петербург", "13:00", "", 0),
        ];

        let segment = extract(&stops, "москва", "санкт-петербург");

        assert_eq!(names(&segment), ["Москва", "Санкт-Петербург"]);
        assert_eq!(segment.stops()[0].index, 1);
        assert_eq!(segment.stops()[1].index, 2);
    }

    #[test]
    fn excludes_stops_after_arrival() {
        let stops = vec![
            stop("Москва", "", "", 0),
            stop("Санкт-Петербург", "", "", 0),
            stop("Выборг", "", "", 0),
        ];

        let segment = extract(&stops, "москва", "Санкт-Петербург");

        assert_eq!(names(&segment), ["Москва", "Санкт-Петербург"]);
    }

    #[test]
    fn stops_at_first_arrival_match() {
        let stops = vec![
            stop("A", "", "", 0),
            stop("Тверь", "", "", 0),
            stop("X", "", "", 0),
            stop("Тверь 2", "", "", 0),
        ];

        let segment = extract(&stops, "a", "тверь");

        assert_eq!(names(&segment), ["A", "Тверь"]);
    }

    #[test]
    fn departure_not_found_gives_empty_segment() {
        let stops = vec![stop("Омск", "", "", 0), stop("Санкт-Петербург", "", "", 0)];

        assert!(extract(&stops, "москва", "санкт-петербург").is_empty());
    }

    #[test]
    fn arrival_before_departure_is_ignored() {
        let stops = vec![
            stop("Санкт-Петербург", "", "", 0),
            stop("Тверь", "", "", 0),
            stop("Москва", "", "", 0),
            stop("Владимир", "", "", 0),
        ];

        let segment = extract(&stops, "москва", "санкт-петербург");

        // Arrival never seen after departure, so the segment runs to the end
        assert_eq!(names(&segment), ["Москва", "Владимир"]);
    }

    #[test]
    fn missing_arrival_runs_to_end_of_list() {
        let stops = vec![
            stop("Москва", "", "09:00", 0),
            stop("Тверь", "11:00", "11:05", 5),
            stop("Бологое", "12:00", "12:02", 2),
        ];

        let segment = extract(&stops, "москва", "санкт-петербург");

        assert_eq!(segment.len(), 3);
        assert_eq!(names(&segment), ["Москва", "Тверь", "Бологое"]);
    }

    #[test]
    fn stop_matching_both_queries_is_single_element() {
        let stops = vec![
            stop("Тверь", "", "", 0),
            stop("Москва Пассажирская", "", "10:00", 0),
            stop("Санкт-Петербург", "", "", 0),
        ];

        // Both queries are substrings of the second stop
        let segment = extract(&stops, "москва", "пассажирская");

        assert_eq!(names(&segment), ["Москва Пассажирская"]);
    }

    #[test]
    fn first_departure_match_wins() {
        let stops = vec![
            stop("Омск", "", "", 0),
            stop("Нижний Омск", "", "", 0),
            stop("Москва", "", "", 0),
        ];

        let segment = extract(&stops, "омск", "москва");

        assert_eq!(names(&segment), ["Омск", "Нижний Омск", "Москва"]);
    }

    #[test]
    fn partial_name_matching() {
        let stops = vec![
            stop("МОСКВА ПАССАЖИРСКАЯ", "", "", 0),
            stop("САНКТ-ПЕТЕРБУРГ ГЛАВНЫЙ", "", "", 0),
        ];

        assert_eq!(extract(&stops, "москва", "санкт-петербург").len(), 2);
    }

    #[test]
    fn missing_fields_default() {
        let stops = vec![StopRecord::new("Москва"), StopRecord::new("Тверь")];

        let segment = extract(&stops, "москва", "тверь");

        for s in &segment {
            assert_eq!(s.arrival_time, "");
            assert_eq!(s.departure_time, "");
            assert_eq!(s.dwell_minutes, 0);
        }
    }

    /// Station names that never contain one another.
    fn station_name(i: usize) -> String {
        format!("<{i:03}>")
    }

    fn route(len: usize) -> Vec<StopRecord> {
        (0..len).map(|i| StopRecord::new(station_name(i))).collect()
    }

    proptest! {
        /// Departure absent from the list gives an empty segment
        #[test]
        fn unmatched_departure_is_empty(len in 0usize..30, arr in 0usize..30) {
            let stops = route(len);
            let segment = extract(&stops, "<999>", &station_name(arr));
            prop_assert!(segment.is_empty());
        }

        /// Departure at i and arrival at j >= i gives exactly stops i..=j
        #[test]
        fn segment_is_contiguous_slice(len in 1usize..30, a in 0usize..30, b in 0usize..30) {
            let i = a % len;
            let j = i + (b % (len - i));
            let stops = route(len);

            let segment = extract(&stops, &station_name(i), &station_name(j));

            prop_assert_eq!(segment.len(), j - i + 1);
            for (offset, s) in segment.iter().enumerate() {
                prop_assert_eq!(s.index as usize, offset + 1);
                prop_assert_eq!(&s.station_name, &stops[i + offset].name);
            }
        }

        /// Arrival only before departure runs to the end of the list
        #[test]
        fn arrival_behind_departure_runs_to_end(len in 2usize..30, a in 0usize..30, b in 0usize..30) {
            let i = 1 + a % (len - 1);
            let j = b % i;
            let stops = route(len);

            let segment = extract(&stops, &station_name(i), &station_name(j));

            prop_assert_eq!(segment.len(), len - i);
            prop_assert_eq!(&segment.stops()[0].station_name, &stops[i].name);
        }
    }
}
