//! List tags of published documents

use anyhow::Result;

use crate::helpers;
use crate::Chronicle;

pub fn run(site: &Chronicle) -> Result<()> {
    let catalog = site.load_catalog()?;
    let tags = catalog.tags();

    println!("Tags ({}):", tags.len());
    for tag in tags {
        println!(
            "  {} ({}) -> {}",
            tag.name,
            tag.count,
            helpers::tag_url(&site.config, &tag.name)
        );
    }

    Ok(())
}
