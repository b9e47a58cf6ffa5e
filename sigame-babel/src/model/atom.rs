//! Scenario atoms.

use std::fmt;

/// Presentation kind of an [`Atom`].
///
/// Unknown tags are kept verbatim in [`AtomKind::Other`] so they survive conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AtomKind {
    #[default]
    Text,
    Say,
    Image,
    Voice,
    Video,
    Marker,
    Other(String),
}

impl AtomKind {
    pub fn as_str(&self) -> &str {
        match self {
            AtomKind::Text => "text",
            AtomKind::Say => "say",
            AtomKind::Image => "image",
            AtomKind::Voice => "voice",
            AtomKind::Video => "video",
            AtomKind::Marker => "marker",
            AtomKind::Other(tag) => tag,
        }
    }

    /// Maps a wire tag to a kind. An empty tag means the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "text" => AtomKind::Text,
            "say" => AtomKind::Say,
            "image" => AtomKind::Image,
            "voice" => AtomKind::Voice,
            "video" => AtomKind::Video,
            "marker" => AtomKind::Marker,
            other => AtomKind::Other(other.to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == AtomKind::Text
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a question's presentation sequence.
///
/// For media kinds the text holds a reference to an asset in the archive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    pub text: String,
    pub kind: AtomKind,
    pub time: i32,
}

impl Atom {
    pub fn text(text: impl Into<String>) -> Self {
        Atom {
            text: text.into(),
            ..Atom::default()
        }
    }

    pub fn with_kind(text: impl Into<String>, kind: AtomKind) -> Self {
        Atom {
            text: text.into(),
            kind,
            time: 0,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIGame Atom, type \"{}\", text \"{}\"",
            self.kind, self.text
        )
    }
}
