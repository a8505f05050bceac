//! Provider station code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A station code in the timetable provider's numbering scheme.
///
/// Codes are opaque to us: the provider assigns them (e.g. `2000000` for
/// Moscow) and we only ever pass them back in route queries.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationCode;
///
/// let moscow = StationCode::new(2000000);
/// assert_eq!(moscow.value(), 2000000);
/// assert_eq!(moscow.to_string(), "2000000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCode(u32);

impl StationCode {
    /// Wrap a raw provider code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw numeric code.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
