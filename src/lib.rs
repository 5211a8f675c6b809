//! chronicle: content catalog for an MDX-authored blog
//!
//! Loads front-matter documents from a content directory, validates them,
//! derives their slugs and URLs, and answers the listing, detail and tag
//! queries a blog front-end needs. Rendering the document bodies is left to
//! the host.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use catalog::{Catalog, CatalogError, SharedCatalog};
pub use content::Document;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The site application
#[derive(Clone)]
pub struct Chronicle {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Collection root (documents live below it)
    pub content_dir: PathBuf,
}

impl Chronicle {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content.dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Build the catalog from the content directory
    pub fn load_catalog(&self) -> catalog::Result<Catalog> {
        let source =
            content::DirectorySource::new(&self.content_dir, &self.config.content.pattern)?;
        content::ContentLoader::new(&self.config).load(&source)
    }
}
