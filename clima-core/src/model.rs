use chrono::{DateTime, Utc};

use crate::icon::WeatherIcon;

/// A geographic position, passed from the location gate to the weather
/// provider and not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The last successfully fetched weather result.
///
/// Replaced wholesale on every successful fetch; never updated
/// field-by-field. The icon is derived from the condition code at
/// construction and cannot be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub city: String,
    pub temperature_c: i32,
    pub condition_code: i64,
    pub observed_at: DateTime<Utc>,
    icon: WeatherIcon,
}

impl Snapshot {
    pub fn new(
        city: String,
        temperature_c: i32,
        condition_code: i64,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            city,
            temperature_c,
            condition_code,
            observed_at,
            icon: WeatherIcon::for_condition(condition_code),
        }
    }

    pub fn icon(&self) -> WeatherIcon {
        self.icon
    }
}
