//! Domain types for the route segment server.
//!
//! This module contains the validated request type and the stop/segment
//! model shared by the extractor, the cache and the web layer. Request
//! invariants are enforced at construction time, so code that receives a
//! `SearchRequest` can trust its fields.

mod error;
mod request;
mod station;
mod stop;

pub use error::ValidationError;
pub use request::{MAX_STATION_LEN, MAX_TRAIN_NUMBER_LEN, SearchRequest, normalize_station};
pub use station::StationCode;
pub use stop::{RouteSegment, SegmentStop, StopRecord};
