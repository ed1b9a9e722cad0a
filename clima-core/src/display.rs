//! Presenter: projects the weather snapshot onto a display surface.

use crate::{error::ErrorKind, icon::WeatherIcon, model::Snapshot};

/// The labels and image slot the presenter writes to. Implemented by
/// the host UI; the core never reads it back.
pub trait DisplaySurface: Send {
    fn set_city_text(&mut self, text: &str);
    fn set_temperature_text(&mut self, text: &str);
    fn set_icon(&mut self, icon: WeatherIcon);
    /// Clear temperature and icon, leaving the city label alone.
    fn clear_conditions(&mut self);
}

/// The one mutable weather cell of the application.
///
/// Updating the stored snapshot and rendering it happen in a single
/// call, so callers that guard the view with a lock get an atomic
/// update-and-render and snapshot fields can never be torn between two
/// overlapping fetches.
pub struct WeatherView {
    surface: Box<dyn DisplaySurface>,
    snapshot: Option<Snapshot>,
}

impl WeatherView {
    pub fn new(surface: Box<dyn DisplaySurface>) -> Self {
        Self {
            surface,
            snapshot: None,
        }
    }

    /// Replace the stored snapshot wholesale and render it.
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.surface.set_city_text(&snapshot.city);
        self.surface
            .set_temperature_text(&format!("{}°", snapshot.temperature_c));
        self.surface.set_icon(snapshot.icon());
        self.snapshot = Some(snapshot);
    }

    /// Render an error placeholder. Any previously stored snapshot is
    /// kept; only the display changes.
    pub fn fail(&mut self, kind: ErrorKind) {
        self.surface.set_city_text(kind.placeholder());
        self.surface.clear_conditions();
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}
