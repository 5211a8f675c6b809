//! Document catalog
//!
//! Holds the validated document set of one build and answers the queries
//! the listing, detail and tag views need. A catalog is immutable: a new
//! build produces a new catalog.

mod error;
mod shared;

pub use error::{CatalogError, Result};
pub use shared::SharedCatalog;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::content::Document;

/// The validated document set of one build
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Documents keyed by slug, in load order
    documents: IndexMap<String, Document>,
    /// Indices of published documents, newest first
    published: Vec<usize>,
}

/// A tag and how many published documents carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

impl Catalog {
    /// Build a catalog from loaded documents, rejecting duplicate slugs
    pub fn from_documents(docs: Vec<Document>) -> Result<Self> {
        let mut documents: IndexMap<String, Document> = IndexMap::with_capacity(docs.len());

        for doc in docs {
            if let Some(existing) = documents.get(doc.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: doc.slug.to_string(),
                    first: existing.source.clone(),
                    second: doc.source,
                });
            }
            documents.insert(doc.slug.to_string(), doc);
        }

        let mut published: Vec<usize> = documents
            .values()
            .enumerate()
            .filter(|(_, d)| d.published)
            .map(|(i, _)| i)
            .collect();
        // Stable: equal dates keep load order
        published.sort_by(|&a, &b| documents[b].date.cmp(&documents[a].date));

        Ok(Self {
            documents,
            published,
        })
    }

    /// Every document, in load order
    pub fn load_all(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.values()
    }

    /// Published documents, newest first
    pub fn list_published(&self) -> Vec<&Document> {
        self.published.iter().map(|&i| &self.documents[i]).collect()
    }

    /// The first `limit` published documents, newest first
    pub fn latest(&self, limit: usize) -> Vec<&Document> {
        self.published
            .iter()
            .take(limit)
            .map(|&i| &self.documents[i])
            .collect()
    }

    /// Published documents carrying `tag`, newest first
    ///
    /// Tags are compared in link form (`tag_slug`), the way tag links encode them.
    pub fn list_by_tag(&self, tag: &str) -> Vec<&Document> {
        self.list_published()
            .into_iter()
            .filter(|d| d.has_tag(tag))
            .collect()
    }

    /// The document with this slug
    pub fn find_by_slug(&self, slug: &str) -> Result<&Document> {
        self.documents
            .get(slug)
            .ok_or_else(|| CatalogError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Tags of published documents with counts, most used first
    pub fn tags(&self) -> Vec<TagCount> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for doc in self.list_published() {
            // A tag repeated within one document counts once
            let distinct: IndexSet<&str> = doc.tags.iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(name, count)| TagCount {
                name: name.to_string(),
                count,
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        tags
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn published_count(&self) -> usize {
        self.published.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{ContentLoader, MemorySource};
    use chrono::{TimeZone, Utc};

    fn post(title: &str, date: &str, published: bool, tags: &[&str]) -> String {
        format!(
            "---\ntitle: \"{}\"\ndate: {}\npublished: {}\ntags: [{}]\n---\nBody of {}\n",
            title,
            date,
            published,
            tags.join(", "),
            title
        )
    }

    fn build(source: &MemorySource) -> Result<Catalog> {
        let config = SiteConfig::default();
        ContentLoader::new(&config).load(source)
    }

    fn titles(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|d| d.title.to_string()).collect()
    }

    fn scenario() -> MemorySource {
        MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &[]))
            .with("posts/b.mdx", &post("B", "2024-03-05", true, &[]))
            .with("posts/c.mdx", &post("C", "2024-02-01", false, &[]))
    }

    #[test]
    fn test_example_scenario() {
        let catalog = build(&scenario()).unwrap();

        assert_eq!(titles(&catalog.list_published()), vec!["B", "A"]);

        let a = catalog.find_by_slug("a.mdx").unwrap();
        assert_eq!(a.title.as_str(), "A");
        assert_eq!(a.date, Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
        assert!(a.published);
        assert_eq!(a.body.raw(), "Body of A\n");

        let err = catalog.find_by_slug("z.mdx").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_all_keeps_load_order() {
        let catalog = build(&scenario()).unwrap();
        let slugs: Vec<_> = catalog.load_all().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a.mdx", "b.mdx", "c.mdx"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_unpublished_never_listed() {
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", false, &["x"]))
            .with("posts/b.mdx", "---\ntitle: B\ndate: 2024-01-11\n---\n")
            .with("posts/c.mdx", &post("C", "2024-01-12", true, &["x"]));
        let catalog = build(&source).unwrap();

        let listed = catalog.list_published();
        assert!(listed.iter().all(|d| d.published));
        assert_eq!(titles(&listed), vec!["C"]);
        assert_eq!(titles(&catalog.list_by_tag("x")), vec!["C"]);

        // Unpublished documents are still reachable by slug
        assert!(catalog.find_by_slug("a.mdx").is_ok());
    }

    #[test]
    fn test_listing_is_non_increasing_by_date() {
        let source = MemorySource::new()
            .with("posts/1.mdx", &post("1", "2023-06-01", true, &[]))
            .with("posts/2.mdx", &post("2", "2024-06-01T08:00:00Z", true, &[]))
            .with("posts/3.mdx", &post("3", "2022-12-31", true, &[]))
            .with("posts/4.mdx", &post("4", "2024-06-01", true, &[]))
            .with("posts/5.mdx", &post("5", "2025-01-01", true, &[]));
        let catalog = build(&source).unwrap();

        let listed = catalog.list_published();
        assert_eq!(listed.len(), 5);
        for pair in listed.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(titles(&listed), vec!["5", "2", "4", "1", "3"]);
    }

    #[test]
    fn test_equal_dates_keep_load_order() {
        let source = MemorySource::new()
            .with("posts/x.mdx", &post("X", "2024-01-01", true, &[]))
            .with("posts/m.mdx", &post("M", "2024-05-05", true, &[]))
            .with("posts/y.mdx", &post("Y", "2024-01-01", true, &[]))
            .with("posts/z.mdx", &post("Z", "2024-01-01", true, &[]));
        let catalog = build(&source).unwrap();

        assert_eq!(titles(&catalog.list_published()), vec!["M", "X", "Y", "Z"]);
        // Rebuilding from the same input gives the same order
        let again = build(&source).unwrap();
        assert_eq!(
            titles(&again.list_published()),
            titles(&catalog.list_published())
        );
    }

    #[test]
    fn test_find_by_slug_nested() {
        let source = MemorySource::new()
            .with("posts/2024/a.mdx", &post("Nested", "2024-01-10", true, &[]))
            .with("posts/a.mdx", &post("Flat", "2024-01-10", true, &[]));
        let catalog = build(&source).unwrap();

        assert_eq!(
            catalog.find_by_slug("2024/a.mdx").unwrap().title.as_str(),
            "Nested"
        );
        assert_eq!(catalog.find_by_slug("a.mdx").unwrap().title.as_str(), "Flat");
        assert!(catalog.find_by_slug("posts/a.mdx").is_err());
        assert!(catalog.find_by_slug("a").is_err());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        // Different collections, same remainder
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &[]))
            .with("notes/a.mdx", &post("Other A", "2024-01-11", false, &[]));

        match build(&source) {
            Err(CatalogError::DuplicateSlug {
                slug,
                first,
                second,
            }) => {
                assert_eq!(slug, "a.mdx");
                assert_eq!(first, "posts/a.mdx");
                assert_eq!(second, "notes/a.mdx");
            }
            other => panic!("expected duplicate slug error, got {other:?}"),
        }
    }

    #[test]
    fn test_latest_caps_listing() {
        let mut source = MemorySource::new();
        for day in 1..=8 {
            let path = format!("posts/{day}.mdx");
            let date = format!("2024-01-{day:02}");
            source = source.with(&path, &post(&day.to_string(), &date, true, &[]));
        }
        let catalog = build(&source).unwrap();

        assert_eq!(titles(&catalog.latest(5)), vec!["8", "7", "6", "5", "4"]);
        assert_eq!(catalog.latest(100).len(), 8);
        assert!(catalog.latest(0).is_empty());
    }

    #[test]
    fn test_list_by_tag_uses_listing_order() {
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &["Next JS"]))
            .with("posts/b.mdx", &post("B", "2024-03-05", true, &["next-js", "rust"]))
            .with("posts/c.mdx", &post("C", "2024-02-01", true, &["rust"]));
        let catalog = build(&source).unwrap();

        assert_eq!(titles(&catalog.list_by_tag("next-js")), vec!["B", "A"]);
        assert_eq!(titles(&catalog.list_by_tag("Rust")), vec!["B", "C"]);
        assert!(catalog.list_by_tag("go").is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &["rust", "Rust"]))
            .with("posts/b.mdx", &post("B", "2024-03-05", true, &["rust", "mdx"]))
            .with("posts/c.mdx", &post("C", "2024-02-01", false, &["hidden"]));
        let catalog = build(&source).unwrap();

        let tags = catalog.tags();
        assert_eq!(
            tags,
            vec![
                TagCount {
                    name: "rust".to_string(),
                    count: 2
                },
                TagCount {
                    name: "Rust".to_string(),
                    count: 1
                },
                TagCount {
                    name: "mdx".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_list_by_tag_keeps_cjk_tags_apart() {
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &["時"]))
            .with("posts/b.mdx", &post("B", "2024-03-05", true, &["事"]));
        let catalog = build(&source).unwrap();

        assert_eq!(titles(&catalog.list_by_tag("時")), vec!["A"]);
        assert_eq!(titles(&catalog.list_by_tag("事")), vec!["B"]);
        assert!(catalog.list_by_tag("shi").is_empty());
    }

    #[test]
    fn test_tag_counts_documents_not_occurrences() {
        let source = MemorySource::new()
            .with("posts/a.mdx", &post("A", "2024-01-10", true, &["C++", "rust", "rust"]))
            .with("posts/b.mdx", &post("B", "2024-03-05", true, &["rust"]));
        let catalog = build(&source).unwrap();

        assert_eq!(
            catalog.tags(),
            vec![
                TagCount {
                    name: "rust".to_string(),
                    count: 2
                },
                TagCount {
                    name: "C++".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = build(&MemorySource::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_published().is_empty());
        assert!(catalog.tags().is_empty());
        assert!(catalog.find_by_slug("a.mdx").unwrap_err().is_not_found());
    }
}
