use serde::{Serialize, Serializer};
use std::fmt;

/// A validated seat position. Ordering is row first, then letter, which is
/// the cabin order for every supported seating plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub row: u16,
    pub letter: char,
}

impl Seat {
    pub fn new(row: u16, letter: char) -> Self {
        Self { row, letter }
    }

    /// Seat label as printed on boarding cards, e.g. `12A`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl Serialize for Seat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
