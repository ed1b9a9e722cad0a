//! Core library for the `clima` weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and condition-to-icon mapping
//! - The location gate driving fetches from geolocation fixes
//! - The presenter that projects snapshots onto a display surface
//!
//! It is used by `clima-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod gate;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use display::{DisplaySurface, WeatherView};
pub use error::{ErrorKind, FetchError};
pub use gate::{Fix, GateState, LocationEvent, LocationGate, LocationService, PermissionStatus};
pub use icon::WeatherIcon;
pub use model::{Coordinate, Snapshot};
pub use provider::{WeatherProvider, provider_from_config};
