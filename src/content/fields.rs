//! Validated document fields
//!
//! `Title` and `Slug` can only be built through their `parse` constructors,
//! so any value of these types already satisfies its format rules.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Longest accepted title, in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// A field value that failed its format rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title is {0} characters long, the limit is {max}", max = MAX_TITLE_CHARS)]
    TitleTooLong(usize),

    #[error("slug must not be empty")]
    EmptySlug,

    #[error("invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },
}

/// Document title: trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let len = trimmed.chars().count();
        if len > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Collection-relative document identifier, `/`-separated
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptySlug);
        }

        let invalid = |reason| ValidationError::InvalidSlug {
            slug: raw.to_string(),
            reason,
        };

        if raw.contains('\\') {
            return Err(invalid("backslashes are not allowed"));
        }
        if raw.starts_with('/') || raw.ends_with('/') {
            return Err(invalid("leading or trailing '/'"));
        }
        for segment in raw.split('/') {
            match segment {
                "" => return Err(invalid("empty path segment")),
                "." | ".." => return Err(invalid("relative path segment")),
                _ => {}
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the slug
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
