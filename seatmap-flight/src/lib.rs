pub mod boarding;
pub mod flight;
pub mod snapshot;

pub use boarding::{render_card, BoardingCard, CardPrinter, ConsoleCardPrinter};
pub use flight::Flight;
pub use snapshot::{FlightSnapshot, SeatAssignment};
