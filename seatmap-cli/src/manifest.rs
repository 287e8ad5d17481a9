use crate::app_config::FlightManifest;
use seatmap_core::SeatingError;
use seatmap_flight::Flight;
use std::sync::Arc;

/// Outcome of replaying one manifest entry.
#[derive(Debug)]
pub struct FlightReport {
    pub flight: Flight,
    pub rejected: Vec<SeatingError>,
}

/// Builds the flight described by `manifest`, applying every allocation and
/// then every relocation in order.
///
/// A rejected operation is recorded and skipped; only an invalid flight
/// number aborts the whole entry.
pub fn run_flight(manifest: &FlightManifest) -> Result<FlightReport, SeatingError> {
    let mut flight = Flight::new(manifest.number.as_str(), Arc::new(manifest.aircraft.clone()))?;
    let mut rejected = Vec::new();

    for allocation in &manifest.allocations {
        if let Err(e) = flight.allocate(&allocation.seat, allocation.passenger.as_str()) {
            rejected.push(e);
        }
    }

    for relocation in &manifest.relocations {
        if let Err(e) = flight.relocate(&relocation.from, &relocation.to) {
            rejected.push(e);
        }
    }

    if !rejected.is_empty() {
        tracing::warn!(
            "Flight {}: {} of {} operations rejected",
            flight.number(),
            rejected.len(),
            manifest.allocations.len() + manifest.relocations.len()
        );
    }

    Ok(FlightReport { flight, rejected })
}
