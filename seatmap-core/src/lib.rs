pub mod aircraft;
pub mod flight_number;
pub mod seat;

pub use aircraft::{Aircraft, AircraftModel, SeatingPlan};
pub use flight_number::FlightNumber;
pub use seat::Seat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid flight number: {0}")]
    InvalidFlightNumber(String),
    #[error("Invalid seat letter in {0}")]
    InvalidSeatLetter(String),
    #[error("Invalid seat row in {0}")]
    InvalidSeatRow(String),
    #[error("Seat {0} already occupied")]
    SeatOccupied(String),
    #[error("No passenger to relocate in seat {0}")]
    NoPassengerToRelocate(String),
}

pub type SeatingResult<T> = Result<T, SeatingError>;
