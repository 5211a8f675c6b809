//! Content loader - turns source files into validated documents

use super::{Body, DocumentSource, FrontMatter, SourceFile};
use super::{Document, Slug, Title};
use crate::catalog::{Catalog, CatalogError, Result};
use crate::config::SiteConfig;
use crate::helpers;

/// Front-matter keys from earlier publication-flag conventions
const LEGACY_FLAGS: [&str; 2] = ["release", "draft"];

/// Loads documents from a source and builds a catalog from them
pub struct ContentLoader<'a> {
    config: &'a SiteConfig,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Read every document from `source` and build a catalog
    ///
    /// Any invalid document fails the whole build.
    pub fn load<S: DocumentSource + ?Sized>(&self, source: &S) -> Result<Catalog> {
        let files = source.read_all()?;
        let documents = files
            .iter()
            .map(|file| self.load_document(file))
            .collect::<Result<Vec<_>>>()?;

        let catalog = Catalog::from_documents(documents)?;
        tracing::info!(
            "Loaded {} documents ({} published)",
            catalog.len(),
            catalog.published_count()
        );
        Ok(catalog)
    }

    /// Load a single document from a source file
    pub fn load_document(&self, file: &SourceFile) -> Result<Document> {
        let invalid = |reason: String| CatalogError::Validation {
            path: file.path.clone(),
            reason,
        };

        let (fm, body) = FrontMatter::parse(&file.contents).map_err(|e| invalid(e.to_string()))?;

        let title = fm
            .title
            .as_deref()
            .ok_or_else(|| invalid("missing required field `title`".to_string()))?;
        let title = Title::parse(title).map_err(|e| invalid(e.to_string()))?;

        let raw_date = fm
            .date
            .as_deref()
            .ok_or_else(|| invalid("missing required field `date`".to_string()))?;
        let date = fm
            .parse_date()
            .ok_or_else(|| invalid(format!("unparsable date {:?}", raw_date)))?;

        let slug = derive_slug(&file.path).map_err(|e| invalid(e.to_string()))?;
        let url = helpers::document_url(self.config, &slug);

        for key in LEGACY_FLAGS {
            if fm.extra.contains_key(key) {
                tracing::warn!(
                    "{}: `{}` is ignored, use `published: true|false` instead",
                    file.path,
                    key
                );
            }
        }

        tracing::debug!("Loaded {} as {}", file.path, slug);

        Ok(Document {
            slug,
            title,
            date,
            tags: fm.tags,
            summary: fm.summary,
            published: fm.published,
            body: Body::new(body),
            source: file.path.clone(),
            url,
            extra: fm.extra,
        })
    }
}

/// Derive a slug from a collection-relative path by dropping its first segment
///
/// `posts/a.mdx` becomes `a.mdx` and `posts/2024/a.mdx` becomes `2024/a.mdx`.
/// A path with a single segment is kept as-is.
pub fn derive_slug(path: &str) -> std::result::Result<Slug, super::ValidationError> {
    let path = path.trim_start_matches('/');
    let stripped = match path.split_once('/') {
        Some((_, rest)) => rest,
        None => path,
    };
    Slug::parse(stripped)
}
