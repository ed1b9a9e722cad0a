use clima_core::{DisplaySurface, WeatherIcon};

/// Display surface that prints each label write to stdout.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn set_city_text(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_temperature_text(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_icon(&mut self, icon: WeatherIcon) {
        println!("{}", glyph(icon));
    }

    fn clear_conditions(&mut self) {
        // Nothing to erase on a line-oriented terminal.
    }
}

fn glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Thunderstorm => "⛈",
        WeatherIcon::Drizzle => "🌦",
        WeatherIcon::Rain => "🌧",
        WeatherIcon::Snow => "❄",
        WeatherIcon::Haze => "🌫",
        WeatherIcon::Clear => "☀",
        WeatherIcon::Clouds => "☁",
        WeatherIcon::Unknown => "?",
    }
}
