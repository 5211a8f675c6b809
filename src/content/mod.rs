//! Content module - documents, front-matter and where they come from

mod document;
mod fields;
mod frontmatter;
pub mod loader;
mod source;

pub use document::{tag_slug, Body, Document, Tag};
pub use fields::{Slug, Title, ValidationError};
pub use frontmatter::{parse_date_string, FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use source::{DirectorySource, DocumentSource, MemorySource, SourceFile};
