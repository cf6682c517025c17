//! Solar times supplied by an external collaborator.

use chrono::NaiveTime;
use luach_hdate::GregorianDate;
use serde::{Deserialize, Serialize};

/// Solar depression for nightfall when three small stars are visible.
pub const TZEIT_3_SMALL_STARS: f64 = 8.5;
/// Solar depression for nightfall when three medium stars are visible;
/// used for the end of fasts.
pub const TZEIT_3_MEDIUM_STARS: f64 = 7.083;
/// Morning solar depression at dawn (alot hashachar); minor fasts begin
/// here.
pub const ALOT_HASHACHAR: f64 = 16.1;
/// Evening solar depression at which Chanukah candles are lit on weekdays.
pub const CHANUKAH_DUSK: f64 = 6.0;

/// A geographic location used for sun-relative times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: Option<String>,
    time_zone: Option<String>,
}

impl Location {
    /// Creates a location from a name and decimal coordinates.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country_code: None,
            time_zone: None,
        }
    }

    /// Sets the ISO 3166 country code; "IL" selects the Israeli schedule.
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Sets the IANA time zone name, e.g. "America/Chicago".
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    /// True for locations in Israel.
    pub fn is_israel(&self) -> bool {
        self.country_code.as_deref() == Some("IL")
    }
}

/// A sun-relative moment of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zman {
    /// Minutes after sunset; negative for before.
    SunsetOffset(i32),
    /// Evening, when the sun is this many degrees below the horizon.
    Dusk(f64),
    /// Morning, when the sun is this many degrees below the horizon.
    Dawn(f64),
}

/// Computes local clock times of sun events.
///
/// Returning `None` is not an error: it signals a date and place where the
/// sun event does not happen, such as polar summer, and the calendar
/// omits the dependent event.
pub trait Zmanim {
    /// Local time of `zman` on `date` at `location`.
    fn time(&self, location: &Location, date: GregorianDate, zman: Zman) -> Option<NaiveTime>;
}
