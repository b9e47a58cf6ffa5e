//! Attribution metadata shared by the named entities.

/// Optional attribution and commentary attached to a package, round, theme or question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub authors: Vec<String>,
    pub sources: Vec<String>,
    pub comments: String,
}

impl Info {
    /// An info block with no authors, no sources and no comments is never encoded.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.sources.is_empty() && self.comments.is_empty()
    }
}

/// Entities that carry a name and an [`Info`] block.
pub trait Named {
    fn name(&self) -> &str;

    fn info(&self) -> &Info;

    fn info_mut(&mut self) -> &mut Info;

    /// Takes ownership of a parsed info block, replacing the current one.
    fn adopt_info(&mut self, info: Info) {
        *self.info_mut() = info;
    }
}

/// Implements [`Named`] for a struct with `name: String` and `info: Info` fields.
macro_rules! impl_named {
    ($ty:ty) => {
        impl $crate::model::Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn info(&self) -> &$crate::model::Info {
                &self.info
            }

            fn info_mut(&mut self) -> &mut $crate::model::Info {
                &mut self.info
            }
        }
    };
}

pub(crate) use impl_named;
