//! Lamps of the clock

use std::fmt::{Display, Write};

/// State of a single lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    /// Lit yellow, rendered as `Y`
    Yellow,
    /// Not lit, rendered as `O`
    Off,
    /// Lit red, rendered as `R`
    Red,
}

impl Lamp {
    /// Character used to render the lamp
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Yellow => 'Y',
            Self::Off => 'O',
            Self::Red => 'R',
        }
    }
}

impl Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_char())
    }
}

/// A rendered row of lamps: the first `lit` lamps of the template keep their
/// color, the others are [`Lamp::Off`]
#[derive(Debug, Clone, Copy)]
pub struct Lamps {
    template: &'static [Lamp],
    lit: usize,
}

impl Lamps {
    /// Create a row from its fully lit `template`. `lit` is clamped to the
    /// number of lamps in the template
    #[inline]
    pub fn new(template: &'static [Lamp], lit: usize) -> Self {
        Self {
            template,
            lit: lit.min(template.len()),
        }
    }

    /// Number of lamps in the row
    #[inline]
    pub fn len(&self) -> usize {
        self.template.len()
    }

    /// Returns true if the row has no lamp
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Number of lamps that are not [`Lamp::Off`]
    #[inline]
    pub fn lit(&self) -> usize {
        self.lit
    }

    /// Iterate the lamps from left to right
    pub fn iter(&self) -> impl Iterator<Item = Lamp> + '_ {
        self.template
            .iter()
            .enumerate()
            .map(|(index, &lamp)| if index < self.lit { lamp } else { Lamp::Off })
    }
}

impl PartialEq for Lamps {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Lamps {}

impl Display for Lamps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|lamp| f.write_char(lamp.as_char()))
    }
}
