#![warn(clippy::todo)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::private_intra_doc_links,
    rust_2018_idioms,
    missing_docs,
    clippy::needless_borrow,
    clippy::redundant_clone,
    missing_debug_implementations
)]

//! # Berlin Clock
//!
//! `BerlinClock` renders a time of day as the lamps of the [`Berlin Clock`]:
//!
//! - one lamp blinking yellow on every even second
//!
//! - two rows of four red lamps, each lamp of the top row counts five hours and
//! each lamp of the bottom row counts a single hour
//!
//! - a row of eleven lamps counting five minutes each, every third lamp is red to
//! mark the quarters, and a row of four yellow lamps counting single minutes
//!
//! ```
//! let display = berlin_clock::convert_str("13:17:01").unwrap();
//! assert_eq!(display, "O\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
//! ```
//!
//! [`Berlin Clock`]: https://en.wikipedia.org/wiki/Mengenlehreuhr

pub mod converter;
pub mod error;
pub mod lamp;
pub mod time_of_day;

pub use converter::{BerlinClock, LampRow, convert, convert_optional, convert_str};
pub use error::ErrorKind;
pub use lamp::{Lamp, Lamps};
pub use time_of_day::{ParseError, TimeOfDay, TimeOfDayError};
