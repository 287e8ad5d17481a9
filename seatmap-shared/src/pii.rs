use std::fmt;

/// A wrapper for passenger-identifying text that masks its value in Debug and
/// Display output. Only the first character survives so that log lines for the
/// same passenger can still be correlated by eye.
#[derive(Clone, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    fn write_masked(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref().chars().next() {
            Some(first) => write!(f, "{}****", first),
            None => write!(f, "****"),
        }
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_only_first_character() {
        let name = Masked::new("Jhon Intriago");
        assert_eq!(name.to_string(), "J****");
        assert_eq!(format!("{:?}", name), "J****");
    }

    #[test]
    fn test_empty_value_is_fully_masked() {
        assert_eq!(Masked::new("").to_string(), "****");
    }
}
