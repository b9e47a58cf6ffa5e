//! Document tree model for SIGame packages.
//!
//! The tree is strictly owned top-down: a [`Package`] owns its rounds, a
//! [`Round`] its themes, a [`Theme`] its questions and a [`Question`] its
//! scenario atoms. Nothing is shared between entities, so a decoded tree can be
//! handed to any codec without aliasing concerns.
//!
//! Defaults match the wire formats: codecs elide values equal to the defaults
//! defined here, and restore them when the value is absent.

mod atom;
mod info;
mod package;
mod question;

pub use atom::{Atom, AtomKind};
pub use info::{Info, Named};
pub use package::{Package, Round, Theme};
pub use question::{question_types, Question, QuestionType, TypeParams};
