//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind a provider abstraction
//! - Session state: location selection, fetching, saved locations, search
//! - Derived forecast views (current / hourly / daily)
//! - Icon and temperature-color lookup tables for the presentation layer
//!
//! It is used by `dashboard-cli`, but can also be reused by other front ends.

pub mod colors;
pub mod config;
pub mod error;
pub mod icons;
pub mod locations;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;

pub use config::Config;
pub use error::{FetchError, SearchError};
pub use model::{ForecastPayload, SavedLocation};
pub use provider::{ForecastProvider, provider_from_config};
pub use session::WeatherSession;
pub use view::{DailySlot, HourlySlot};
