//! Error in berlin clock
//!
//! Each concern owns its error enum ([`TimeOfDayError`] for construction and
//! [`ParseError`] for parsing). Both map onto the same [`ErrorKind`] taxonomy so
//! callers can classify a failure without matching on every variant.
//!
//! [`TimeOfDayError`]: crate::time_of_day::TimeOfDayError
//! [`ParseError`]: crate::time_of_day::ParseError

use std::fmt::Display;

/// Category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No input was given where a string was required
    NullInput,
    /// A component is outside of its bound when constructing directly
    Range,
    /// The text does not have the `hh:mm:ss` shape
    Format,
    /// The value is well shaped but can not exist: a component is out of range
    /// after parsing, or the hours is 24 while minutes or seconds is not 0
    Overflow,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NullInput => "NullInput",
            Self::Range => "Range",
            Self::Format => "Format",
            Self::Overflow => "Overflow",
        };
        f.write_str(name)
    }
}
