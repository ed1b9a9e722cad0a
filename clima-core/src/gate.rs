//! Location gate: permission state machine and fix handling.
//!
//! The gate is decoupled from any concrete location backend. Commands
//! go out through [`LocationService`]; the backend reports back by
//! feeding [`LocationEvent`]s into [`LocationGate::handle_event`].

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::{
    display::WeatherView,
    error::ErrorKind,
    model::Coordinate,
    provider::WeatherProvider,
};

/// Platform answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Where the gate stands in the permission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unrequested,
    PermissionPending,
    Granted,
    Denied,
}

/// One reported geolocation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub coordinate: Coordinate,
    /// Radius of uncertainty in meters; non-positive means the fix is
    /// unusable and must be discarded.
    pub horizontal_accuracy: f64,
}

/// Events delivered by the location backend.
#[derive(Debug, Clone)]
pub enum LocationEvent {
    PermissionChanged(PermissionStatus),
    /// Zero or more fixes, most recent last.
    LocationsUpdated(Vec<Fix>),
    LocationFailed(String),
}

/// Commands the gate issues to the location backend.
pub trait LocationService: Send + Sync {
    fn request_permission(&self);
    /// Ask for exactly one fresh fix (manual refresh).
    fn request_location(&self);
    fn start_updates(&self);
    fn stop_updates(&self);
}

pub struct LocationGate {
    service: Arc<dyn LocationService>,
    provider: Arc<dyn WeatherProvider>,
    view: Arc<Mutex<WeatherView>>,
    state: GateState,
    updates_active: bool,
    fetches: JoinSet<()>,
}

impl LocationGate {
    pub fn new(
        service: Arc<dyn LocationService>,
        provider: Arc<dyn WeatherProvider>,
        view: Arc<Mutex<WeatherView>>,
    ) -> Self {
        Self {
            service,
            provider,
            view,
            state: GateState::Unrequested,
            updates_active: false,
            fetches: JoinSet::new(),
        }
    }

    /// Kick off the permission prompt. Call once at startup.
    pub fn start(&mut self) {
        self.state = GateState::PermissionPending;
        self.service.request_permission();
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Manual refresh: request one fresh fix, which re-enters the
    /// normal fix-handling path.
    pub fn refresh(&self) {
        self.service.request_location();
    }

    pub fn handle_event(&mut self, event: LocationEvent) {
        match event {
            LocationEvent::PermissionChanged(PermissionStatus::Granted) => {
                self.state = GateState::Granted;
                self.updates_active = true;
                self.service.start_updates();
            }
            LocationEvent::PermissionChanged(PermissionStatus::Denied) => {
                self.state = GateState::Denied;
                self.view.lock().fail(ErrorKind::LocationDenied);
            }
            LocationEvent::LocationsUpdated(fixes) => {
                debug!(count = fixes.len(), "location updated");
                if let Some(fix) = fixes.last().copied() {
                    // Non-positive accuracy means the sample is garbage.
                    if fix.horizontal_accuracy > 0.0 {
                        self.spawn_fetch(fix.coordinate);
                    }
                }
            }
            LocationEvent::LocationFailed(reason) => {
                warn!(%reason, "location provider failed");
                self.view.lock().fail(ErrorKind::LocationUnavailable);
            }
        }
    }

    /// Each accepted fix triggers an independent fetch; overlapping
    /// fetches are not cancelled, and whichever completes last writes
    /// the visible snapshot.
    fn spawn_fetch(&mut self, coordinate: Coordinate) {
        let provider = Arc::clone(&self.provider);
        let view = Arc::clone(&self.view);

        self.fetches.spawn(async move {
            match provider.current_weather(coordinate).await {
                // Write and render under one lock so fields cannot be
                // torn between two fetches.
                Ok(snapshot) => view.lock().apply(snapshot),
                Err(err) => {
                    warn!(error = %err, "weather fetch failed");
                    view.lock().fail(ErrorKind::from(&err));
                }
            }
        });
    }

    /// Wait for every in-flight fetch to finish. Used by one-shot
    /// callers and tests; the event-driven path never needs it.
    pub async fn drain(&mut self) {
        while let Some(joined) = self.fetches.join_next().await {
            if let Err(err) = joined {
                warn!(error = %err, "weather fetch task failed");
            }
        }
    }

    /// Host went to background: pause updates if they were running.
    pub fn entered_background(&self) {
        if self.updates_active {
            debug!("app moved to background, pausing location updates");
            self.service.stop_updates();
        }
    }

    /// Host came back to foreground: resume updates if they were
    /// running before backgrounding.
    pub fn entered_foreground(&self) {
        if self.updates_active {
            debug!("app moved to foreground, resuming location updates");
            self.service.start_updates();
        }
    }
}
