//! Show a single document

use anyhow::{bail, Result};

use crate::catalog::CatalogError;
use crate::helpers::{self, Helpers};
use crate::Chronicle;

/// Print one document's metadata and body
///
/// `target` may be a slug or a detail view URL.
pub fn run(site: &Chronicle, target: &str) -> Result<()> {
    let catalog = site.load_catalog()?;
    let helpers = Helpers::new(site.config.clone());
    let slug = helpers::slug_from_url(&site.config, target);

    let doc = match catalog.find_by_slug(&slug) {
        Ok(doc) => doc,
        Err(CatalogError::NotFound { slug }) => bail!("Document not found: {}", slug),
        Err(e) => return Err(e.into()),
    };

    println!("title:     {}", doc.title);
    println!("date:      {}", helpers.date(&doc.date, None));
    println!("slug:      {}", doc.slug);
    println!("url:       {}", helpers.permalink(doc));
    println!("source:    {}", doc.source);
    println!("published: {}", doc.published);
    if !doc.tags.is_empty() {
        let tags: Vec<_> = helpers
            .tags(doc)
            .into_iter()
            .map(|t| format!("{} ({})", t.label(), t.path))
            .collect();
        println!("tags:      {}", tags.join(", "));
    }
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.is_empty()) {
        println!("summary:   {}", summary);
    }
    println!();
    print!("{}", doc.body.raw());

    Ok(())
}
