//! Helper functions for the presentation layer
//!
//! URL building and date display for views that render catalog documents.

mod date;
mod url;

pub use date::*;
pub use url::*;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::content::{Document, Tag};

/// Helpers bound to one site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Absolute permalink of a document
    pub fn permalink(&self, doc: &Document) -> String {
        // doc.url already carries the root
        format!("{}{}", self.config.url.trim_end_matches('/'), doc.url)
    }

    /// Tag links of a document
    pub fn tags(&self, doc: &Document) -> Vec<Tag> {
        doc.tag_links(&self.config.root, &self.config.tag_dir)
    }

    /// Format a date with the configured format unless one is given
    pub fn date(&self, date: &DateTime<Utc>, format: Option<&str>) -> String {
        format_date(date, format.unwrap_or(&self.config.date_format))
    }
}
