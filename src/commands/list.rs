//! List published documents

use anyhow::Result;

use super::index::DocumentEntry;
use crate::content::Document;
use crate::helpers::Helpers;
use crate::Chronicle;

/// What to list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Every document in load order, published or not
    pub all: bool,
    /// Cap on the number of documents (defaults to `index.max_display`)
    pub limit: Option<usize>,
    /// Only documents carrying this tag
    pub tag: Option<String>,
    /// Print JSON instead of text
    pub json: bool,
}

/// List documents
pub fn run(site: &Chronicle, options: &ListOptions) -> Result<()> {
    let catalog = site.load_catalog()?;
    let helpers = Helpers::new(site.config.clone());

    let mut docs: Vec<&Document> = if options.all {
        catalog.load_all().collect()
    } else if let Some(tag) = &options.tag {
        catalog.list_by_tag(tag)
    } else {
        catalog.list_published()
    };

    let limit = if options.all {
        options.limit.unwrap_or(usize::MAX)
    } else {
        options.limit.unwrap_or(site.config.index.max_display)
    };
    docs.truncate(limit);

    if options.json {
        let entries: Vec<DocumentEntry> = docs
            .iter()
            .map(|d| DocumentEntry::new(&helpers, d))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Documents ({}):", docs.len());
    for doc in docs {
        let status = if doc.published { "" } else { " (unpublished)" };
        println!(
            "  {} - {} [{}]{}",
            helpers.date(&doc.date, None),
            doc.title,
            doc.slug,
            status
        );
        if !doc.tags.is_empty() {
            println!("      tags: {}", doc.tags.join(", "));
        }
    }

    Ok(())
}
