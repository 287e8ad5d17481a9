pub mod app_config;
pub mod manifest;

pub use app_config::{Config, OutputFormat};
pub use manifest::{run_flight, FlightReport};
