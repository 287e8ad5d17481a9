use crate::seat::Seat;
use crate::{SeatingError, SeatingResult};
use serde::{Deserialize, Serialize};

/// Valid rows and seat letters for one aircraft model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingPlan {
    first_row: u16,
    last_row: u16,
    letters: &'static str,
}

impl SeatingPlan {
    pub const fn new(first_row: u16, last_row: u16, letters: &'static str) -> Self {
        Self { first_row, last_row, letters }
    }

    /// Row numbers in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = u16> + Clone {
        self.first_row..=self.last_row
    }

    /// Seat letters in cabin order.
    pub fn letters(&self) -> impl Iterator<Item = char> + Clone + '_ {
        self.letters.chars()
    }

    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    pub fn letter_count(&self) -> usize {
        self.letters.chars().count()
    }

    pub fn num_seats(&self) -> usize {
        self.row_count() * self.letter_count()
    }

    pub fn contains_row(&self, row: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Every seat of the plan, row by row.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.rows()
            .flat_map(move |row| self.letters().map(move |letter| Seat::new(row, letter)))
    }

    /// Validates a seat reference such as `12A` against this plan.
    ///
    /// The trailing character is the letter and is checked first; whatever
    /// precedes it must be a row number inside the plan.
    pub fn parse_seat(&self, seat: &str) -> SeatingResult<Seat> {
        let mut chars = seat.chars();
        let letter = chars
            .next_back()
            .filter(|letter| self.contains_letter(*letter))
            .ok_or_else(|| SeatingError::InvalidSeatLetter(seat.to_string()))?;

        let row: u16 = chars
            .as_str()
            .parse()
            .map_err(|_| SeatingError::InvalidSeatRow(seat.to_string()))?;

        if !self.contains_row(row) {
            return Err(SeatingError::InvalidSeatRow(seat.to_string()));
        }

        Ok(Seat::new(row, letter))
    }
}

const AIRBUS_A319_PLAN: SeatingPlan = SeatingPlan::new(1, 22, "ABCDEF");
const BOEING_777_PLAN: SeatingPlan = SeatingPlan::new(1, 56, "ABCDEFGHIJK");

/// Supported aircraft models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftModel {
    #[serde(alias = "a319")]
    AirbusA319,
    #[serde(rename = "boeing_777", alias = "b777")]
    Boeing777,
}

impl AircraftModel {
    pub fn display_name(&self) -> &'static str {
        match self {
            AircraftModel::AirbusA319 => "Airbus A319",
            AircraftModel::Boeing777 => "Boeing 777",
        }
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        match self {
            AircraftModel::AirbusA319 => AIRBUS_A319_PLAN,
            AircraftModel::Boeing777 => BOEING_777_PLAN,
        }
    }
}

/// A registered airframe of a given model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub registration: String,
    pub model: AircraftModel,
}

impl Aircraft {
    pub fn new(registration: impl Into<String>, model: AircraftModel) -> Self {
        Self {
            registration: registration.into(),
            model,
        }
    }

    pub fn airbus_a319(registration: impl Into<String>) -> Self {
        Self::new(registration, AircraftModel::AirbusA319)
    }

    pub fn boeing_777(registration: impl Into<String>) -> Self {
        Self::new(registration, AircraftModel::Boeing777)
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &'static str {
        self.model.display_name()
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        self.model.seating_plan()
    }

    pub fn num_seats(&self) -> usize {
        self.seating_plan().num_seats()
    }
}
