//! Document and Tag models

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::{Slug, Title};

/// One authored content item
///
/// Built only by the loader; immutable once the catalog holds it.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Storage path with the collection segment stripped
    pub slug: Slug,

    /// Document title
    pub title: Title,

    /// Publication date, parsed once at load time
    pub date: DateTime<Utc>,

    /// Tags in authored order
    pub tags: Vec<String>,

    /// Optional summary shown in listings
    pub summary: Option<String>,

    /// Whether the document is published
    pub published: bool,

    /// Content handed to the presentation layer untouched
    #[serde(skip)]
    pub body: Body,

    /// Source file path (collection-root relative, `/`-separated)
    pub source: String,

    /// Detail view URL (without domain)
    pub url: String,

    /// Custom front-matter fields
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Document {
    /// Whether any tag matches `tag` once both are in link form
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag_slug(tag);
        self.tags.iter().any(|t| tag_slug(t) == wanted)
    }

    /// Tags as presentation values
    pub fn tag_links(&self, base_url: &str, tag_dir: &str) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|t| Tag::new(t, base_url, tag_dir))
            .collect()
    }
}

/// Opaque content handle: the raw source after the front-matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// A tag as the presentation layer links it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Text as authored
    pub name: String,
    /// URL-safe form used in links
    pub slug: String,
    /// Tag view URL (without domain)
    pub path: String,
}

impl Tag {
    pub fn new(name: &str, base_url: &str, tag_dir: &str) -> Self {
        let slug = tag_slug(name);
        let path = format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            tag_dir.trim_matches('/'),
            slug
        );
        Self {
            name: name.to_string(),
            slug,
            path,
        }
    }

    /// Display label: first letter upper-cased, the rest lower-cased
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

/// Link form of a tag
///
/// Lower-cased, each whitespace character becomes `-`, and punctuation other
/// than `-` and `_` is dropped. Letters of any script are kept as they are,
/// so `時` and `事` stay distinct.
pub fn tag_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('-')
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
