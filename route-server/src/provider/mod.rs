//! Timetable provider client.
//!
//! The provider is the authoritative source of train routes. Given a train
//! number, two provider station codes and a travel date it returns the
//! train's description and its full ordered stop list.
//!
//! Key characteristics:
//! - Stations are identified by numeric codes, not names
//!   (see [`crate::stations`])
//! - Times are "HH:MM" strings and are passed through untouched
//! - A response lacking `train_description` or `route_list` is unusable

mod client;
mod convert;
mod error;
mod mock;
mod query;
mod types;

pub use client::{ProviderClient, ProviderConfig, ProviderCredentials};
pub use convert::{TrainDescription, TrainRoute, convert_route, parse_route_body};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use query::{RouteQuery, TimetableProvider};
pub use types::{RouteListDto, StopDto, TrainDescriptionDto, TrainRouteResponse};
