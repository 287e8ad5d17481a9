use crate::{SeatingError, SeatingResult};
use std::fmt;

const MAX_ROUTE_NUMBER: u16 = 9999;

/// A validated flight designator: a two letter airline code followed by a
/// route number of one to four digits, e.g. `BA756`.
///
/// The designator is kept exactly as given; `BA0756` and `BA756` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightNumber {
    raw: String,
    route: u16,
}

impl FlightNumber {
    pub fn parse(number: impl Into<String>) -> SeatingResult<Self> {
        let raw = number.into();
        let invalid = || SeatingError::InvalidFlightNumber(raw.clone());

        let mut chars = raw.chars();
        let airline_ok = chars
            .by_ref()
            .take(2)
            .filter(|c| c.is_ascii_uppercase())
            .count()
            == 2;
        if !airline_ok {
            return Err(invalid());
        }

        let route_text = chars.as_str();
        if route_text.is_empty()
            || route_text.len() > 4
            || !route_text.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let route: u16 = route_text.parse().map_err(|_| invalid())?;
        if route > MAX_ROUTE_NUMBER {
            return Err(invalid());
        }

        Ok(Self { raw, route })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn airline_code(&self) -> &str {
        &self.raw[..2]
    }

    pub fn route_number(&self) -> u16 {
        self.route
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_numbers() {
        for number in ["BA756", "BA1", "LH9999", "AA0", "UA0042"] {
            assert!(FlightNumber::parse(number).is_ok(), "{} should be valid", number);
        }
    }

    #[test]
    fn test_parts() {
        let number = FlightNumber::parse("BA756").unwrap();
        assert_eq!(number.airline_code(), "BA");
        assert_eq!(number.route_number(), 756);
        assert_eq!(number.to_string(), "BA756");
    }

    #[test]
    fn test_stored_verbatim() {
        let number = FlightNumber::parse("UA0042").unwrap();
        assert_eq!(number.as_str(), "UA0042");
        assert_eq!(number.route_number(), 42);
    }

    #[test]
    fn test_rejects_lowercase_airline_code() {
        assert_eq!(
            FlightNumber::parse("ba756"),
            Err(SeatingError::InvalidFlightNumber("ba756".to_string()))
        );
        assert!(FlightNumber::parse("Ba756").is_err());
    }

    #[test]
    fn test_rejects_non_alphabetic_airline_code() {
        assert!(FlightNumber::parse("B4756").is_err());
        assert!(FlightNumber::parse("12756").is_err());
    }

    #[test]
    fn test_rejects_bad_route_numbers() {
        for number in ["BA10000", "BA", "BA75a", "BA-12", "BA+12", "BA 12", "", "B", "BA00001"] {
            assert!(
                matches!(FlightNumber::parse(number), Err(SeatingError::InvalidFlightNumber(_))),
                "{} should be rejected",
                number
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(FlightNumber::parse("ÄB12").is_err());
        assert!(FlightNumber::parse("AB١٢").is_err());
    }
}
