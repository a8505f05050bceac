//! Train route segment server.
//!
//! Answers: "which stops does this train make between these two stations?"
//! Looks the train up with the timetable provider, cuts out the requested
//! segment and caches it for a few minutes.

pub mod cache;
pub mod config;
pub mod domain;
pub mod provider;
pub mod search;
pub mod segment;
pub mod stations;
pub mod web;
