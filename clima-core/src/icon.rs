//! Mapping from OpenWeather condition codes to display icons.
//!
//! Condition codes follow the provider's taxonomy: the hundreds digit
//! groups phenomena (2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow,
//! 7xx atmosphere, 800 clear, 80x clouds).

/// Symbolic identifier for a weather icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Haze,
    Clear,
    Clouds,
    /// Fallback for codes outside every known range.
    Unknown,
}

impl WeatherIcon {
    /// Resolve a condition code to an icon. Total over all integers:
    /// unrecognized codes map to [`WeatherIcon::Unknown`].
    pub fn for_condition(code: i64) -> Self {
        match code {
            200..=232 => WeatherIcon::Thunderstorm,
            300..=321 => WeatherIcon::Drizzle,
            500..=531 => WeatherIcon::Rain,
            600..=622 => WeatherIcon::Snow,
            701..=781 => WeatherIcon::Haze,
            800 => WeatherIcon::Clear,
            801..=804 => WeatherIcon::Clouds,
            _ => WeatherIcon::Unknown,
        }
    }

    /// Name of the image asset for this icon.
    pub fn asset_name(self) -> &'static str {
        match self {
            WeatherIcon::Thunderstorm => "tstorm",
            WeatherIcon::Drizzle => "drizzle",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Haze => "haze",
            WeatherIcon::Clear => "sunny",
            WeatherIcon::Clouds => "cloudy",
            WeatherIcon::Unknown => "dunno",
        }
    }

    pub const fn all() -> &'static [WeatherIcon] {
        &[
            WeatherIcon::Thunderstorm,
            WeatherIcon::Drizzle,
            WeatherIcon::Rain,
            WeatherIcon::Snow,
            WeatherIcon::Haze,
            WeatherIcon::Clear,
            WeatherIcon::Clouds,
            WeatherIcon::Unknown,
        ]
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.asset_name())
    }
}
