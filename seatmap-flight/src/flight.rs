use crate::boarding::{BoardingCard, CardPrinter};
use seatmap_core::{Aircraft, FlightNumber, Seat, SeatingError, SeatingPlan, SeatingResult};
use seatmap_shared::Masked;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single scheduled flight and its seat map.
///
/// The seating plan is captured from the aircraft when the flight is created
/// and every seat of that plan is present in the map for the flight's
/// lifetime. Seats are only ever filled by [`Flight::allocate`] and moved by
/// [`Flight::relocate`].
#[derive(Debug, Clone)]
pub struct Flight {
    number: FlightNumber,
    aircraft: Arc<Aircraft>,
    plan: SeatingPlan,
    seating: BTreeMap<Seat, Option<String>>,
}

impl Flight {
    pub fn new(number: impl Into<String>, aircraft: Arc<Aircraft>) -> SeatingResult<Self> {
        let number = FlightNumber::parse(number)?;
        let plan = aircraft.seating_plan();
        let seating = plan.seats().map(|seat| (seat, None)).collect();

        tracing::info!(
            "Flight {} created on {} {} with {} seats",
            number,
            aircraft.model(),
            aircraft.registration(),
            plan.num_seats()
        );

        Ok(Self {
            number,
            aircraft,
            plan,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn flight_number(&self) -> &FlightNumber {
        &self.number
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn aircraft_model(&self) -> &'static str {
        self.aircraft.model()
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        self.plan
    }

    /// Validates a seat reference against this flight's seating plan.
    pub fn parse_seat(&self, seat: &str) -> SeatingResult<Seat> {
        self.plan.parse_seat(seat)
    }

    /// Passenger in `seat`, if any.
    pub fn occupant(&self, seat: &str) -> SeatingResult<Option<&str>> {
        let seat = self.parse_seat(seat)?;
        Ok(self.occupant_at(seat))
    }

    /// The whole seat map in cabin order.
    pub fn seats(&self) -> impl Iterator<Item = (Seat, Option<&str>)> + '_ {
        self.seating
            .iter()
            .map(|(seat, passenger)| (*seat, passenger.as_deref()))
    }

    /// Occupied seats in cabin order.
    pub fn occupied_seats(&self) -> impl Iterator<Item = (Seat, &str)> + '_ {
        self.seats()
            .filter_map(|(seat, passenger)| passenger.map(|passenger| (seat, passenger)))
    }

    /// Places `passenger` in an empty seat.
    ///
    /// An empty passenger name counts as no passenger, so the seat stays free.
    pub fn allocate(&mut self, seat: &str, passenger: impl Into<String>) -> SeatingResult<()> {
        let target = self.parse_seat(seat).inspect_err(|e| self.log_rejected("allocate", e))?;

        if self.occupant_at(target).is_some() {
            let e = SeatingError::SeatOccupied(seat.to_string());
            self.log_rejected("allocate", &e);
            return Err(e);
        }

        let passenger = passenger.into();
        if passenger.is_empty() {
            tracing::debug!("Flight {}: empty passenger for seat {}, seat left free", self.number, target);
            return Ok(());
        }

        tracing::debug!(
            "Flight {}: seat {} allocated to {}",
            self.number,
            target,
            Masked::new(passenger.as_str())
        );
        *self.slot_mut(target) = Some(passenger);

        Ok(())
    }

    /// Moves the passenger in `from_seat` to the empty `to_seat`.
    ///
    /// Both seats are validated and checked before anything changes, so a
    /// failed relocation leaves the seat map untouched.
    pub fn relocate(&mut self, from_seat: &str, to_seat: &str) -> SeatingResult<()> {
        let (from, to) = self
            .parse_seat(from_seat)
            .and_then(|from| self.parse_seat(to_seat).map(|to| (from, to)))
            .inspect_err(|e| self.log_rejected("relocate", e))?;

        if self.occupant_at(from).is_none() {
            let e = SeatingError::NoPassengerToRelocate(from_seat.to_string());
            self.log_rejected("relocate", &e);
            return Err(e);
        }
        if self.occupant_at(to).is_some() {
            let e = SeatingError::SeatOccupied(to_seat.to_string());
            self.log_rejected("relocate", &e);
            return Err(e);
        }

        let passenger = self.slot_mut(from).take();
        tracing::debug!(
            "Flight {}: {} relocated from {} to {}",
            self.number,
            Masked::new(passenger.as_deref().unwrap_or_default()),
            from,
            to
        );
        *self.slot_mut(to) = passenger;

        Ok(())
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating.values().filter(|passenger| passenger.is_none()).count()
    }

    pub fn num_occupied_seats(&self) -> usize {
        self.seating.len() - self.num_available_seats()
    }

    /// Boarding cards for every occupied seat, ordered by passenger name and
    /// then by seat label. Each call builds a fresh sequence.
    pub fn boarding_cards(&self) -> impl Iterator<Item = BoardingCard<'_>> + '_ {
        let mut passenger_seats: Vec<(&str, String)> = self
            .occupied_seats()
            .map(|(seat, passenger)| (passenger, seat.label()))
            .collect();
        passenger_seats.sort();

        passenger_seats
            .into_iter()
            .map(move |(passenger, seat)| BoardingCard {
                passenger,
                seat,
                flight_number: self.number.as_str(),
                aircraft_model: self.aircraft.model(),
            })
    }

    /// Hands every boarding card to `printer`, in [`Flight::boarding_cards`] order.
    pub fn make_boarding_cards<P>(&self, printer: &mut P)
    where
        P: CardPrinter + ?Sized,
    {
        for card in self.boarding_cards() {
            printer.print_card(card.passenger, &card.seat, card.flight_number, card.aircraft_model);
        }
    }

    fn occupant_at(&self, seat: Seat) -> Option<&str> {
        self.seating.get(&seat).and_then(|passenger| passenger.as_deref())
    }

    fn slot_mut(&mut self, seat: Seat) -> &mut Option<String> {
        // Seats are validated against the plan before reaching here, so the entry always exists.
        self.seating.entry(seat).or_default()
    }

    fn log_rejected(&self, operation: &str, error: &SeatingError) {
        tracing::warn!("Flight {}: {} rejected: {}", self.number, operation, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a319_flight() -> Flight {
        Flight::new("BA756", Arc::new(Aircraft::airbus_a319("G-EUPT"))).unwrap()
    }

    #[test]
    fn test_new_flight_is_empty() {
        let flight = a319_flight();
        assert_eq!(flight.number(), "BA756");
        assert_eq!(flight.aircraft_model(), "Airbus A319");
        assert_eq!(flight.aircraft().registration(), "G-EUPT");
        assert_eq!(flight.num_available_seats(), 132);
        assert_eq!(flight.seats().count(), 132);
        assert_eq!(flight.boarding_cards().count(), 0);
    }

    #[test]
    fn test_invalid_flight_number() {
        let aircraft = Arc::new(Aircraft::airbus_a319("G-EUPT"));
        assert!(matches!(
            Flight::new("ba756", aircraft.clone()),
            Err(SeatingError::InvalidFlightNumber(_))
        ));
        assert!(matches!(
            Flight::new("BA10000", aircraft),
            Err(SeatingError::InvalidFlightNumber(_))
        ));
    }

    #[test]
    fn test_allocate() {
        let mut flight = a319_flight();
        flight.allocate("12A", "Jhon Intriago").unwrap();

        assert_eq!(flight.occupant("12A").unwrap(), Some("Jhon Intriago"));
        assert_eq!(flight.num_available_seats(), 131);
        assert_eq!(flight.num_occupied_seats(), 1);
    }

    #[test]
    fn test_allocate_occupied_seat() {
        let mut flight = a319_flight();
        flight.allocate("1C", "Einsten").unwrap();

        let result = flight.allocate("1C", "John Nash");
        assert_eq!(result, Err(SeatingError::SeatOccupied("1C".to_string())));
        assert_eq!(flight.occupant("1C").unwrap(), Some("Einsten"));
        assert_eq!(flight.num_available_seats(), 131);
    }

    #[test]
    fn test_allocate_invalid_seat_leaves_map_unchanged() {
        let mut flight = a319_flight();
        assert!(matches!(flight.allocate("99Z", "X"), Err(SeatingError::InvalidSeatLetter(_))));
        assert!(matches!(flight.allocate("23A", "X"), Err(SeatingError::InvalidSeatRow(_))));
        assert!(matches!(flight.allocate("QA", "X"), Err(SeatingError::InvalidSeatRow(_))));
        assert_eq!(flight.num_available_seats(), 132);
    }

    #[test]
    fn test_same_passenger_in_two_seats() {
        let mut flight = a319_flight();
        flight.allocate("3A", "Belencito").unwrap();
        flight.allocate("3B", "Belencito").unwrap();
        assert_eq!(flight.num_available_seats(), 130);
    }

    #[test]
    fn test_empty_passenger_leaves_seat_free() {
        let mut flight = a319_flight();
        flight.allocate("4D", "").unwrap();
        assert_eq!(flight.occupant("4D").unwrap(), None);
        assert_eq!(flight.num_available_seats(), 132);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_passenger_is_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut flight = a319_flight();
            flight.allocate("4D", "").unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Flight BA756: empty passenger for seat 4D, seat left free"));
    }

    #[test]
    fn test_relocate() {
        let mut flight = a319_flight();
        flight.allocate("12A", "Jhon Intriago").unwrap();
        flight.relocate("12A", "12B").unwrap();

        assert_eq!(flight.occupant("12A").unwrap(), None);
        assert_eq!(flight.occupant("12B").unwrap(), Some("Jhon Intriago"));
        assert_eq!(flight.num_available_seats(), 131);
    }

    #[test]
    fn test_relocate_from_empty_seat() {
        let mut flight = a319_flight();
        assert_eq!(
            flight.relocate("5A", "5B"),
            Err(SeatingError::NoPassengerToRelocate("5A".to_string()))
        );
    }

    #[test]
    fn test_relocate_failures_leave_map_unchanged() {
        let mut flight = a319_flight();
        flight.allocate("12A", "Jhon Intriago").unwrap();
        flight.allocate("12B", "Mabel Sanchez").unwrap();

        assert_eq!(flight.relocate("12A", "12B"), Err(SeatingError::SeatOccupied("12B".to_string())));
        assert!(matches!(flight.relocate("12A", "30B"), Err(SeatingError::InvalidSeatRow(_))));
        assert!(matches!(flight.relocate("12A", "12Z"), Err(SeatingError::InvalidSeatLetter(_))));
        assert!(matches!(flight.relocate("0A", "13A"), Err(SeatingError::InvalidSeatRow(_))));
        assert_eq!(flight.relocate("12A", "12A"), Err(SeatingError::SeatOccupied("12A".to_string())));

        assert_eq!(flight.occupant("12A").unwrap(), Some("Jhon Intriago"));
        assert_eq!(flight.occupant("12B").unwrap(), Some("Mabel Sanchez"));
        assert_eq!(flight.num_available_seats(), 130);
    }

    #[test]
    fn test_relocate_validates_destination_before_checking_source() {
        let mut flight = a319_flight();
        assert_eq!(
            flight.relocate("5A", "99Z"),
            Err(SeatingError::InvalidSeatLetter("99Z".to_string()))
        );
        assert_eq!(
            flight.relocate("5A", "40A"),
            Err(SeatingError::InvalidSeatRow("40A".to_string()))
        );
        assert_eq!(
            flight.relocate("5A", "6A"),
            Err(SeatingError::NoPassengerToRelocate("5A".to_string()))
        );
        assert_eq!(flight.num_available_seats(), 132);
    }

    #[test]
    fn test_seats_in_cabin_order() {
        let mut flight = a319_flight();
        flight.allocate("15F", "Mabel Sanchez").unwrap();
        flight.allocate("1D", "John Nash").unwrap();

        let occupied: Vec<(String, &str)> = flight
            .occupied_seats()
            .map(|(seat, passenger)| (seat.label(), passenger))
            .collect();
        assert_eq!(
            occupied,
            vec![("1D".to_string(), "John Nash"), ("15F".to_string(), "Mabel Sanchez")]
        );
    }

    #[test]
    fn test_boarding_cards_sorted_by_passenger_then_seat() {
        let mut flight = a319_flight();
        flight.allocate("15F", "Mabel Sanchez").unwrap();
        flight.allocate("12A", "Belencito").unwrap();
        flight.allocate("2A", "Belencito").unwrap();
        flight.allocate("1C", "Einsten").unwrap();

        let cards: Vec<(String, String)> = flight
            .boarding_cards()
            .map(|card| (card.passenger.to_string(), card.seat))
            .collect();

        // Seat labels compare as text, so 12A sorts before 2A.
        assert_eq!(
            cards,
            vec![
                ("Belencito".to_string(), "12A".to_string()),
                ("Belencito".to_string(), "2A".to_string()),
                ("Einsten".to_string(), "1C".to_string()),
                ("Mabel Sanchez".to_string(), "15F".to_string()),
            ]
        );
        assert_eq!(flight.boarding_cards().count(), 4);
    }

    #[test]
    fn test_make_boarding_cards_passes_flight_details() {
        let mut flight = a319_flight();
        flight.allocate("1D", "John Nash").unwrap();

        let mut printed = Vec::new();
        let mut printer = |passenger: &str, seat: &str, number: &str, model: &str| {
            printed.push(format!("{}|{}|{}|{}", passenger, seat, number, model));
        };
        flight.make_boarding_cards(&mut printer);

        assert_eq!(printed, vec!["John Nash|1D|BA756|Airbus A319".to_string()]);
    }
}
