use std::io::Write;

/// One passenger's boarding card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingCard<'a> {
    pub passenger: &'a str,
    pub seat: String,
    pub flight_number: &'a str,
    pub aircraft_model: &'a str,
}

/// Receives boarding cards from [`crate::Flight::make_boarding_cards`].
///
/// Any `FnMut(passenger, seat, flight_number, aircraft_model)` closure is a printer.
pub trait CardPrinter {
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str);
}

impl<F> CardPrinter for F
where
    F: FnMut(&str, &str, &str, &str),
{
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        self(passenger, seat, flight_number, aircraft_model)
    }
}

/// Renders a boxed console card:
///
/// ```text
/// +---------------------------------------------------------------------------+
/// |                                                                           |
/// | Name:     John Nash  Flight:   BA756  Seat:     1D  Aircraft: Airbus A319 |
/// |                                                                           |
/// +---------------------------------------------------------------------------+
/// ```
pub fn render_card(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
    let output = format!(
        "| Name:     {}  Flight:   {}  Seat:     {}  Aircraft: {} |",
        passenger, seat, flight_number, aircraft_model
    );
    let inner = output.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(inner));
    let border = format!("|{}|", " ".repeat(inner));

    [banner.as_str(), border.as_str(), output.as_str(), border.as_str(), banner.as_str()].join("\n")
}

/// Writes rendered cards to any writer, stdout by default.
pub struct ConsoleCardPrinter<W: Write> {
    out: W,
    printed: usize,
}

impl ConsoleCardPrinter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleCardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, printed: 0 }
    }

    /// Cards successfully written so far.
    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CardPrinter for ConsoleCardPrinter<W> {
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        let card = render_card(passenger, seat, flight_number, aircraft_model);
        match writeln!(self.out, "{}", card) {
            Ok(()) => self.printed += 1,
            Err(e) => tracing::error!("Failed to print boarding card for seat {}: {}", seat, e),
        }
    }
}
