//! Document model and format conversion for SIGame quiz packages
//!
//!     A SIGame package is a zip archive with one content entry describing the quiz
//!     (rounds, themes, questions) and any number of media assets. The content entry
//!     comes in two encodings:
//!
//!     - siq:  `content.xml`, the tag/attribute encoding used by the game itself.
//!     - jsiq: `content.json`, a JSON rendition of the same tree.
//!
//!     This crate decodes either encoding into one in-memory tree ([`model`]) and
//!     encodes the tree back into either, carrying assets over byte for byte.
//!
//!     This is a pure lib: it powers the sigame cli but is shell agnostic, that is no
//!     code should suppose a shell environment, be it std print, env vars etc.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model                   # Package tree (Package, Round, Theme, Question, Atom, Info)
//!     ├── text.rs                 # Markup text extraction
//!     ├── formats
//!     │   ├── markup              # siq: parser.rs + serializer.rs
//!     │   └── structured          # jsiq: parser.rs + serializer.rs
//!     ├── archive.rs              # Content entry access and asset passthrough
//!     └── document.rs             # Load / save façade
//!
//! Conversion
//!
//!     Conversion is always a fresh decode followed by a fresh encode:
//!
//!     archive bytes → content entry → Format::parse → Package → Format::serialize
//!         → new archive (content entry + raw copies of Texts/, Images/, Audio/, Video/)
//!
//!     Both encodings elide values equal to their defaults, and omit empty info
//!     blocks and empty wrappers. Same-format round trips are lossless. Across
//!     formats, one loss is deliberate: parameters of a `simple` question type only
//!     survive in the structured encoding.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common                  # Package and archive builders
//!     ├── markup
//!     ├── structured
//!     └── conversion              # cross-format and archive-level properties
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in the mod.
//!
pub mod archive;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;
pub mod text;

pub use document::Document;
pub use error::FormatError;
pub use format::Format;
pub use model::Package;
pub use registry::FormatRegistry;
