//! Write the published listing as JSON for a presentation layer

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{Document, Tag};
use crate::helpers::{self, Helpers};
use crate::Chronicle;

/// Default output file, relative to the site directory
pub const DEFAULT_OUTPUT: &str = "catalog.json";

/// One listing entry as the views consume it
#[derive(Debug, Clone, Serialize)]
pub struct DocumentEntry {
    pub slug: String,
    pub title: String,
    /// RFC 3339, for `<time datetime=...>`
    pub date: String,
    /// Date in the configured display format
    pub display_date: String,
    pub url: String,
    pub tags: Vec<Tag>,
    pub summary: Option<String>,
    pub source: String,
}

impl DocumentEntry {
    pub fn new(helpers: &Helpers, doc: &Document) -> Self {
        Self {
            slug: doc.slug.to_string(),
            title: doc.title.to_string(),
            date: helpers::date_xml(&doc.date),
            display_date: helpers.date(&doc.date, None),
            url: doc.url.clone(),
            tags: helpers.tags(doc),
            summary: doc.summary.clone(),
            source: doc.source.clone(),
        }
    }
}

/// The JSON index file
#[derive(Debug, Serialize)]
struct Index<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    documents: Vec<DocumentEntry>,
}

/// Build the catalog and write every published document to `output`
pub fn run(site: &Chronicle, output: Option<&Path>) -> Result<PathBuf> {
    let start = std::time::Instant::now();
    let catalog = site.load_catalog()?;
    let helpers = Helpers::new(site.config.clone());

    let documents: Vec<DocumentEntry> = catalog
        .list_published()
        .into_iter()
        .map(|d| DocumentEntry::new(&helpers, d))
        .collect();

    let index = Index {
        title: &site.config.title,
        description: &site.config.description,
        url: &site.config.url,
        documents,
    };

    let output = match output {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => site.base_dir.join(path),
        None => site.base_dir.join(DEFAULT_OUTPUT),
    };
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, serde_json::to_string_pretty(&index)?)?;

    tracing::info!(
        "Wrote {} documents to {:?} in {:.2}s",
        index.documents.len(),
        output,
        start.elapsed().as_secs_f64()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_published_documents() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("data/posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(
            posts.join("a.mdx"),
            "---\ntitle: A\ndate: 2024-01-10\npublished: true\ntags: [Next JS]\nsummary: first\n---\n",
        )
        .unwrap();
        fs::write(
            posts.join("b.mdx"),
            "---\ntitle: B\ndate: 2024-03-05\npublished: true\n---\n",
        )
        .unwrap();
        fs::write(
            posts.join("c.mdx"),
            "---\ntitle: C\ndate: 2024-02-01\n---\n",
        )
        .unwrap();

        let site = Chronicle::new(dir.path()).unwrap();
        let output = run(&site, None).unwrap();
        assert_eq!(output, dir.path().join(DEFAULT_OUTPUT));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let docs = json["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["title"], "B");
        assert_eq!(docs[1]["title"], "A");
        assert_eq!(docs[1]["display_date"], "2024/01/10");
        assert_eq!(docs[1]["url"], "/blog/a.mdx");
        assert_eq!(docs[1]["tags"][0]["path"], "/tags/next-js");
        assert_eq!(docs[1]["summary"], "first");
        assert!(docs[0]["summary"].is_null());
    }
}
