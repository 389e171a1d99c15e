//! [`TimeOfDay`] with second precision in the 24h format

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use snafu::{OptionExt, ResultExt, Snafu, ensure};

use crate::error::ErrorKind;

/// Shape of the accepted text. Any two digits are accepted for each component,
/// the range check happens while constructing the [`TimeOfDay`] such that the
/// caller gets the more specific [`ParseError::Overflow`]
static HH_MM_SS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("`hh:mm:ss` regex must compile")
});

/// Component of the [`TimeOfDay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Hours, in range `[0, 24]`
    Hours,
    /// Minutes, in range `[0, 59]`
    Minutes,
    /// Seconds, in range `[0, 59]`
    Seconds,
}

impl Component {
    /// Max value of the component, inclusive
    #[inline]
    pub const fn max(self) -> i32 {
        match self {
            Self::Hours => 24,
            Self::Minutes | Self::Seconds => 59,
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Error returned by constructing the [`TimeOfDay`] from its components
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TimeOfDayError {
    /// Component is out of its range
    #[snafu(display("The value of `{component}` must be between 0 and {max}, got: {value}"))]
    OutOfRange {
        /// Component that is out of range
        component: Component,
        /// Value passed to the constructor
        value: i32,
        /// Max value of the component
        max: i32,
    },
    /// Hours is 24 but the time does not end at the end of day
    #[snafu(display(
        "The max value is 24 hours. When the hours is 24, minutes and seconds must be 0, got: 24:{minutes:02}:{seconds:02}"
    ))]
    DayBoundary {
        /// Minutes passed to the constructor
        minutes: u8,
        /// Seconds passed to the constructor
        seconds: u8,
    },
}

impl TimeOfDayError {
    /// Category of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::DayBoundary { .. } => ErrorKind::Overflow,
        }
    }
}

/// Error returned by parsing the [`TimeOfDay`] from text. Failures of the
/// construction are all reported as [`ParseError::Overflow`]
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ParseError {
    /// No text is given
    #[snafu(display("Can not parse a TimeOfDay without input"))]
    NullInput,
    /// Text does not match `hh:mm:ss`
    #[snafu(display(
        "String `{text}` cannot be parsed as a valid TimeOfDay. The allowed format is hh:mm:ss"
    ))]
    InvalidFormat {
        /// Text passed to the parser
        text: String,
    },
    /// Text has the `hh:mm:ss` shape, but the value is out of range
    #[snafu(display(
        "Cannot parse `{text}` as a valid TimeOfDay. {}",
        overflow_reason(source)
    ))]
    Overflow {
        /// Text passed to the parser
        text: String,
        /// Why the components can not build a TimeOfDay
        source: TimeOfDayError,
    },
}

fn overflow_reason(source: &TimeOfDayError) -> &'static str {
    match source {
        TimeOfDayError::OutOfRange { .. } => "The value of one of the components is out of range",
        TimeOfDayError::DayBoundary { .. } => "The value is out of range",
    }
}

impl ParseError {
    /// Category of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullInput => ErrorKind::NullInput,
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

/// Time of day with second precision in the 24h format, ranging from `00:00:00`
/// to `24:00:00` and ignoring the time zone and locale. `24:00:00` is the only
/// valid time with 24 hours, it represents the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// `00:00:00`
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// `24:00:00`
    pub const END_OF_DAY: Self = Self {
        hours: 24,
        minutes: 0,
        seconds: 0,
    };

    /// Try to create a [`TimeOfDay`]
    ///
    /// # Errors
    ///
    /// - [`TimeOfDayError::OutOfRange`] if hours is not in `[0, 24]`, minutes or
    /// seconds is not in `[0, 59]`. Components are checked in the order hours,
    /// minutes, seconds
    ///
    /// - [`TimeOfDayError::DayBoundary`] if hours is 24 and minutes or seconds
    /// is not 0
    pub fn try_new(hours: i32, minutes: i32, seconds: i32) -> Result<Self, TimeOfDayError> {
        let hours = checked_component(Component::Hours, hours)?;
        let minutes = checked_component(Component::Minutes, minutes)?;
        let seconds = checked_component(Component::Seconds, seconds)?;

        ensure!(
            hours < 24 || (minutes == 0 && seconds == 0),
            DayBoundarySnafu { minutes, seconds }
        );

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Parse the [`TimeOfDay`] from text with format `hh:mm:ss`, each component
    /// has exactly two digits
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidFormat`] if the text does not have the shape
    ///
    /// - [`ParseError::Overflow`] if the components can not build a valid
    /// [`TimeOfDay`], for example `25:00:00` or `24:00:01`
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let Some(captures) = HH_MM_SS.captures(text) else {
            tracing::debug!(%text, "Rejected time of day: expect format `hh:mm:ss`");
            return InvalidFormatSnafu { text }.fail();
        };

        let component = |index: usize| {
            captures[index]
                .parse::<i32>()
                .ok()
                .context(InvalidFormatSnafu { text })
        };
        Self::try_new(component(1)?, component(2)?, component(3)?).context(OverflowSnafu { text })
    }

    /// Same as [`Self::parse`], but the text may be absent. Absent text fails
    /// with [`ParseError::NullInput`], empty text is an invalid format
    pub fn parse_optional(text: Option<&str>) -> Result<Self, ParseError> {
        Self::parse(text.context(NullInputSnafu)?)
    }

    /// Hours, in range `[0, 24]`
    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes, in range `[0, 59]`
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds, in range `[0, 59]`
    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

#[inline]
fn checked_component(component: Component, value: i32) -> Result<u8, TimeOfDayError> {
    let max = component.max();
    ensure!(
        (0..=max).contains(&value),
        OutOfRangeSnafu {
            component,
            value,
            max
        }
    );
    Ok(value as u8)
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(i32, i32, i32)> for TimeOfDay {
    type Error = TimeOfDayError;

    #[inline]
    fn try_from((hours, minutes, seconds): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_new(hours, minutes, seconds)
    }
}
