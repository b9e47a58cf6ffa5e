//! Format implementations
//!
//! This module contains the two package encodings. Both decode into and encode
//! from the same [`crate::model::Package`] tree.

pub mod markup;
pub mod structured;

pub use markup::MarkupFormat;
pub use structured::StructuredFormat;
