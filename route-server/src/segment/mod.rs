//! Route segment extraction.
//!
//! Given the ordered stop list of a train, finds the stops between a
//! departure and an arrival station. Station names are compared with a
//! permissive fuzzy match (see [`matches`]), so provider names carrying extra
//! qualifiers ("Москва Пассажирская") still match a plain query ("москва").

mod extract;
mod matcher;

pub use extract::extract;
pub use matcher::matches;
