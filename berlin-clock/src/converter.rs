//! Convert the [`TimeOfDay`] to the lamps of the clock
//!
//! Every row is rendered with the same algorithm: take the fully lit template of
//! the row, keep the color of the first `n` lamps and switch off the others. Only
//! the template and how `n` is derived from the time differ between the rows

use std::fmt::Display;

use crate::lamp::Lamp::{self, Red, Yellow};
use crate::lamp::Lamps;
use crate::time_of_day::{ParseError, TimeOfDay};

const SECONDS_TEMPLATE: [Lamp; 1] = [Yellow];
const HOURS_TEMPLATE: [Lamp; 4] = [Red; 4];
// Every third lamp marks a quarter
const MINUTES_TOP_TEMPLATE: [Lamp; 11] = [
    Yellow, Yellow, Red, Yellow, Yellow, Red, Yellow, Yellow, Red, Yellow, Yellow,
];
const MINUTES_BOTTOM_TEMPLATE: [Lamp; 4] = [Yellow; 4];

/// Rows of the clock, from top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LampRow {
    /// Single lamp, lit on even seconds
    Seconds,
    /// Four lamps, each one counts five hours
    HoursTop,
    /// Four lamps, each one counts one hour
    HoursBottom,
    /// Eleven lamps, each one counts five minutes
    MinutesTop,
    /// Four lamps, each one counts one minute
    MinutesBottom,
}

impl LampRow {
    /// All of the rows, in display order
    pub const ALL: [LampRow; 5] = [
        Self::Seconds,
        Self::HoursTop,
        Self::HoursBottom,
        Self::MinutesTop,
        Self::MinutesBottom,
    ];

    /// The row with all of its lamps lit
    #[inline]
    pub const fn template(self) -> &'static [Lamp] {
        match self {
            Self::Seconds => &SECONDS_TEMPLATE,
            Self::HoursTop | Self::HoursBottom => &HOURS_TEMPLATE,
            Self::MinutesTop => &MINUTES_TOP_TEMPLATE,
            Self::MinutesBottom => &MINUTES_BOTTOM_TEMPLATE,
        }
    }

    /// Number of lamps lit in this row for the given time
    #[inline]
    pub fn lit(self, time: &TimeOfDay) -> usize {
        let lit = match self {
            Self::Seconds => u8::from(time.seconds() % 2 == 0),
            Self::HoursTop => time.hours() / 5,
            Self::HoursBottom => time.hours() % 5,
            Self::MinutesTop => time.minutes() / 5,
            Self::MinutesBottom => time.minutes() % 5,
        };
        usize::from(lit)
    }

    /// Render the row for the given time
    #[inline]
    pub fn render(self, time: &TimeOfDay) -> Lamps {
        Lamps::new(self.template(), self.lit(time))
    }
}

/// `Y` on even seconds, `O` on odd seconds
#[inline]
pub fn seconds_row(time: &TimeOfDay) -> Lamps {
    LampRow::Seconds.render(time)
}

/// A red lamp for every five hours
#[inline]
pub fn hours_top_row(time: &TimeOfDay) -> Lamps {
    LampRow::HoursTop.render(time)
}

/// A red lamp for every hour in the remainder of dividing the hours by five
#[inline]
pub fn hours_bottom_row(time: &TimeOfDay) -> Lamps {
    LampRow::HoursBottom.render(time)
}

/// A lamp for every five minutes, red for the quarters and yellow for the others
#[inline]
pub fn minutes_top_row(time: &TimeOfDay) -> Lamps {
    LampRow::MinutesTop.render(time)
}

/// A yellow lamp for every minute in the remainder of dividing the minutes by five
#[inline]
pub fn minutes_bottom_row(time: &TimeOfDay) -> Lamps {
    LampRow::MinutesBottom.render(time)
}

/// All of the rows of the clock for a single [`TimeOfDay`]. It displays as five
/// lines, from the seconds row to the minutes bottom row, without a trailing
/// line break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BerlinClock {
    time: TimeOfDay,
    rows: [Lamps; 5],
}

impl BerlinClock {
    /// Render the clock at `time`
    pub fn new(time: TimeOfDay) -> Self {
        Self {
            time,
            rows: LampRow::ALL.map(|row| row.render(&time)),
        }
    }

    /// Time displayed by the clock
    #[inline]
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Rendered rows, in the order of [`LampRow::ALL`]
    #[inline]
    pub fn rows(&self) -> &[Lamps; 5] {
        &self.rows
    }

    /// Rendered `row`
    #[inline]
    pub fn row(&self, row: LampRow) -> Lamps {
        self.rows[row as usize]
    }
}

impl From<TimeOfDay> for BerlinClock {
    #[inline]
    fn from(time: TimeOfDay) -> Self {
        Self::new(time)
    }
}

impl Display for BerlinClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [seconds, hours_top, hours_bottom, minutes_top, minutes_bottom] = &self.rows;
        write!(
            f,
            "{seconds}\n{hours_top}\n{hours_bottom}\n{minutes_top}\n{minutes_bottom}"
        )
    }
}

/// Convert the time to the lines of the clock, see [`BerlinClock`]
pub fn convert(time: &TimeOfDay) -> String {
    let clock = BerlinClock::new(*time);
    tracing::debug!(%time, "Converted time of day to Berlin Clock lamps");
    clock.to_string()
}

/// Parse the text with [`TimeOfDay::parse`] and [`convert`] it
pub fn convert_str(text: &str) -> Result<String, ParseError> {
    TimeOfDay::parse(text).map(|time| convert(&time))
}

/// Same as [`convert_str`], absent text fails with [`ParseError::NullInput`]
pub fn convert_optional(text: Option<&str>) -> Result<String, ParseError> {
    TimeOfDay::parse_optional(text).map(|time| convert(&time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn at(hours: i32, minutes: i32, seconds: i32) -> TimeOfDay {
        TimeOfDay::try_new(hours, minutes, seconds).unwrap()
    }

    #[test]
    fn test_seconds_row() {
        assert_eq!(seconds_row(&at(0, 0, 0)).to_string(), "Y");
        assert_eq!(seconds_row(&at(0, 0, 1)).to_string(), "O");
        assert_eq!(seconds_row(&at(0, 0, 2)).to_string(), "Y");
        assert_eq!(seconds_row(&at(0, 0, 59)).to_string(), "O");
    }

    #[test]
    fn test_hours_top_row() {
        assert_eq!(hours_top_row(&at(0, 0, 0)).to_string(), "OOOO");
        assert_eq!(hours_top_row(&at(4, 0, 0)).to_string(), "OOOO");
        assert_eq!(hours_top_row(&at(5, 0, 0)).to_string(), "ROOO");
        assert_eq!(hours_top_row(&at(16, 0, 0)).to_string(), "RRRO");
        assert_eq!(hours_top_row(&at(24, 0, 0)).to_string(), "RRRR");
    }

    #[test]
    fn test_hours_bottom_row() {
        assert_eq!(hours_bottom_row(&at(0, 0, 0)).to_string(), "OOOO");
        assert_eq!(hours_bottom_row(&at(3, 0, 0)).to_string(), "RRRO");
        assert_eq!(hours_bottom_row(&at(4, 0, 0)).to_string(), "RRRR");
        assert_eq!(hours_bottom_row(&at(5, 0, 0)).to_string(), "OOOO");
        assert_eq!(hours_bottom_row(&at(16, 0, 0)).to_string(), "ROOO");
        assert_eq!(hours_bottom_row(&at(24, 0, 0)).to_string(), "RRRR");
    }

    #[test]
    fn test_minutes_top_row() {
        assert_eq!(minutes_top_row(&at(0, 4, 0)).to_string(), "OOOOOOOOOOO");
        assert_eq!(minutes_top_row(&at(0, 8, 0)).to_string(), "YOOOOOOOOOO");
        assert_eq!(minutes_top_row(&at(0, 15, 0)).to_string(), "YYROOOOOOOO");
        assert_eq!(minutes_top_row(&at(0, 45, 0)).to_string(), "YYRYYRYYROO");
        assert_eq!(minutes_top_row(&at(0, 55, 0)).to_string(), "YYRYYRYYRYY");
    }

    #[test]
    fn test_minutes_bottom_row() {
        assert_eq!(minutes_bottom_row(&at(0, 4, 0)).to_string(), "YYYY");
        assert_eq!(minutes_bottom_row(&at(0, 8, 0)).to_string(), "YYYO");
        assert_eq!(minutes_bottom_row(&at(0, 15, 0)).to_string(), "OOOO");
        assert_eq!(minutes_bottom_row(&at(0, 59, 0)).to_string(), "YYYY");
    }

    #[test]
    fn test_rows_follow_the_division_by_five() {
        for hours in 0..=24 {
            let time = at(hours, 0, 0);
            let clock = BerlinClock::new(time);
            assert_eq!(clock.row(LampRow::HoursTop).lit(), (hours / 5) as usize);
            assert_eq!(clock.row(LampRow::HoursBottom).lit(), (hours % 5) as usize);
        }

        for minutes in 0..60 {
            let clock = BerlinClock::new(at(0, minutes, 0));
            assert_eq!(clock.row(LampRow::MinutesTop).lit(), (minutes / 5) as usize);
            assert_eq!(
                clock.row(LampRow::MinutesBottom).lit(),
                (minutes % 5) as usize
            );
        }
    }

    #[test]
    fn test_row_lengths() {
        let clock = BerlinClock::new(at(13, 17, 1));
        let lengths = clock.rows().iter().map(Lamps::len).collect::<Vec<_>>();
        assert_eq!(lengths, [1, 4, 4, 11, 4]);

        for (row, lamps) in LampRow::ALL.into_iter().zip(clock.rows()) {
            assert_eq!(row.template().len(), lamps.to_string().len());
        }
    }

    #[test]
    fn test_convert() {
        let expect = expect_test::expect![[r#"
            O
            RROO
            RRRO
            YYROOOOOOOO
            YYOO"#]];
        expect.assert_eq(&convert(&at(13, 17, 1)));

        let expect = expect_test::expect![[r#"
            Y
            OOOO
            OOOO
            OOOOOOOOOOO
            OOOO"#]];
        expect.assert_eq(&convert(&TimeOfDay::MIDNIGHT));

        let expect = expect_test::expect![[r#"
            O
            RRRR
            RRRO
            YYRYYRYYRYY
            YYYY"#]];
        expect.assert_eq(&convert(&at(23, 59, 59)));

        let expect = expect_test::expect![[r#"
            Y
            RRRR
            RRRR
            OOOOOOOOOOO
            OOOO"#]];
        expect.assert_eq(&convert_str("24:00:00").unwrap());
    }

    #[test]
    fn test_convert_display_shape() {
        let display = convert_str("07:33:12").unwrap();
        assert!(!display.ends_with('\n'));
        assert_eq!(display.matches('\n').count(), 4);
        assert!(display.chars().all(|c| matches!(c, 'Y' | 'O' | 'R' | '\n')));
        assert_eq!(display, BerlinClock::from(at(7, 33, 12)).to_string());
    }

    #[test]
    fn test_convert_propagates_parse_error() {
        assert_eq!(
            convert_optional(None).unwrap_err().kind(),
            ErrorKind::NullInput
        );
        assert_eq!(convert_str("").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(convert_str("10:10").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(
            convert_str("24:01:00").unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            convert_optional(Some("25:00:00")).unwrap_err(),
            TimeOfDay::parse("25:00:00").unwrap_err()
        );
    }
}
