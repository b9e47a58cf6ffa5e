//! Questions and their behavior types.

use super::atom::Atom;
use super::info::{Info, Named};
use std::fmt;

/// Well-known question type names.
pub mod question_types {
    pub const SIMPLE: &str = "simple";
    pub const AUCTION: &str = "auction";
    pub const CAT: &str = "cat";
    pub const BAGCAT: &str = "bagcat";
    pub const SPONSORED: &str = "sponsored";
    pub const CHOICE: &str = "choice";
}

/// Ordered, key-unique parameter list of a [`QuestionType`].
///
/// Iteration follows insertion order. Setting an existing key overwrites its
/// value in place, so the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeParams {
    entries: Vec<(String, String)>,
}

impl TypeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Insert or overwrite a parameter. The last write for a key wins.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Remove a parameter by name, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = TypeParams::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Named behavior tag of a question plus arbitrary string parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionType {
    pub name: String,
    pub params: TypeParams,
}

impl QuestionType {
    pub fn new(name: impl Into<String>) -> Self {
        QuestionType {
            name: name.into(),
            params: TypeParams::new(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == question_types::SIMPLE
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::new(question_types::SIMPLE)
    }
}

/// A single question: price, presentation scenario and answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub price: i32,
    pub question_type: QuestionType,
    pub scenario: Vec<Atom>,
    pub right: Vec<String>,
    pub wrong: Vec<String>,
    pub info: Info,
}

impl Question {
    /// Sentinel price for a question that has none.
    pub const UNSET_PRICE: i32 = -1;

    pub fn new(price: i32) -> Self {
        Question {
            price,
            ..Question::default()
        }
    }
}

impl Default for Question {
    fn default() -> Self {
        Question {
            price: Self::UNSET_PRICE,
            question_type: QuestionType::default(),
            scenario: Vec::new(),
            right: Vec::new(),
            wrong: Vec::new(),
            info: Info::default(),
        }
    }
}

// Questions are nameless; the name is never encoded.
impl Named for Question {
    fn name(&self) -> &str {
        ""
    }

    fn info(&self) -> &Info {
        &self.info
    }

    fn info_mut(&mut self) -> &mut Info {
        &mut self.info
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIGame Question, price: {}", self.price)
    }
}
