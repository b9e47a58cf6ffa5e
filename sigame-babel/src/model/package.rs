//! Package, round and theme entities.

use super::info::{impl_named, Info};
use super::question::Question;
use std::fmt;

/// Root entity: one quiz set.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub version: f64,
    pub id: String,
    pub restriction: String,
    pub publisher: String,
    pub difficulty: i32,
    pub logo: String,
    pub date: String,
    pub language: String,
    pub tags: Vec<String>,
    pub rounds: Vec<Round>,
    pub info: Info,
}

impl Package {
    pub const DEFAULT_VERSION: f64 = 4.0;
    pub const DEFAULT_DIFFICULTY: i32 = 5;

    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            ..Package::default()
        }
    }

    /// Version as written to the markup encoding, without redundant trailing zeros.
    pub fn version_string(&self) -> String {
        format_decimal(self.version)
    }
}

impl Default for Package {
    fn default() -> Self {
        Package {
            name: String::new(),
            version: Self::DEFAULT_VERSION,
            id: String::new(),
            restriction: String::new(),
            publisher: String::new(),
            difficulty: Self::DEFAULT_DIFFICULTY,
            logo: String::new(),
            date: String::new(),
            language: String::new(),
            tags: Vec::new(),
            rounds: Vec::new(),
            info: Info::default(),
        }
    }
}

impl_named!(Package);

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIGame Package {}, authors: {}, num of rounds: {}",
            self.name,
            self.info.authors.join(", "),
            self.rounds.len()
        )
    }
}

/// A round of play. Final rounds are marked with `type="final"` in markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    pub name: String,
    pub is_final: bool,
    pub themes: Vec<Theme>,
    pub info: Info,
}

impl Round {
    pub fn new(name: impl Into<String>) -> Self {
        Round {
            name: name.into(),
            ..Round::default()
        }
    }

    pub fn new_final(name: impl Into<String>) -> Self {
        Round {
            name: name.into(),
            is_final: true,
            ..Round::default()
        }
    }
}

impl_named!(Round);

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIGame Round: \"{}\"{}, themes: {}",
            self.name,
            if self.is_final { " (final round)" } else { "" },
            self.themes.len()
        )
    }
}

/// A column of questions inside a round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub name: String,
    pub questions: Vec<Question>,
    pub info: Info,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Theme {
            name: name.into(),
            ..Theme::default()
        }
    }
}

impl_named!(Theme);

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIGame Theme: {}, questions {}",
            self.name,
            self.questions.len()
        )
    }
}

// f64's Display prints 4.0 as "4" and never switches to exponent notation.
fn format_decimal(value: f64) -> String {
    format!("{value}")
}
