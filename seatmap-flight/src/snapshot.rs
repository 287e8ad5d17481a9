use crate::flight::Flight;
use seatmap_core::Seat;
use serde::Serialize;

/// Serializable view of a flight's seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightSnapshot {
    pub flight_number: String,
    pub aircraft_model: String,
    pub registration: String,
    pub total_seats: usize,
    pub available_seats: usize,
    pub occupied: Vec<SeatAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatAssignment {
    pub seat: Seat,
    pub passenger: String,
}

impl Flight {
    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            flight_number: self.number().to_string(),
            aircraft_model: self.aircraft_model().to_string(),
            registration: self.aircraft().registration().to_string(),
            total_seats: self.seating_plan().num_seats(),
            available_seats: self.num_available_seats(),
            occupied: self
                .occupied_seats()
                .map(|(seat, passenger)| SeatAssignment {
                    seat,
                    passenger: passenger.to_string(),
                })
                .collect(),
        }
    }
}

impl FlightSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
