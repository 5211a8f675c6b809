//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,
    pub blog_dir: String,
    pub tag_dir: String,

    // Content
    #[serde(default)]
    pub content: ContentConfig,

    // Date format (Moment.js / dayjs tokens)
    pub date_format: String,

    // Home page
    #[serde(default)]
    pub index: IndexConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Dev Chronicles".to_string(),
            description: String::new(),
            author: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),

            content: ContentConfig::default(),

            date_format: "YYYY/MM/DD".to_string(),

            index: IndexConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Where documents live and which files count as documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Collection root, relative to the site directory
    pub dir: String,
    /// Glob matched against collection-relative paths
    pub pattern: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            pattern: "**/*.mdx".to_string(),
        }
    }
}

/// Listing (home page) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Maximum number of documents shown by the listing view
    pub max_display: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { max_display: 5 }
    }
}
