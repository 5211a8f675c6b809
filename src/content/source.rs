//! Document sources - where raw documents come from

use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog::{CatalogError, Result};

/// One raw document before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Collection-root relative path, always `/`-separated
    pub path: String,
    /// Full file contents (front-matter and body)
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Supplies the full static document set for one catalog build
pub trait DocumentSource {
    /// Read every document, in a deterministic order
    fn read_all(&self) -> Result<Vec<SourceFile>>;
}

/// Reads documents from a directory tree
pub struct DirectorySource {
    root: PathBuf,
    pattern: Pattern,
}

impl DirectorySource {
    /// Create a source rooted at `root`, keeping files whose relative path matches `pattern`
    pub fn new<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| CatalogError::Validation {
            path: pattern.to_string(),
            reason: format!("invalid content pattern: {}", e),
        })?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            pattern,
        })
    }
}

impl DocumentSource for DirectorySource {
    fn read_all(&self) -> Result<Vec<SourceFile>> {
        // A mistyped content.dir must not look like an empty blog
        if !self.root.is_dir() {
            return Err(CatalogError::Io {
                path: self.root.clone(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "content directory does not exist",
                ),
            });
        }

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                CatalogError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_path(&self.root, path);
            if !self.pattern.matches_with(&relative, options) {
                continue;
            }

            let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("Read {}", relative);
            files.push(SourceFile::new(relative, contents));
        }

        Ok(files)
    }
}

/// Array-backed source for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<SourceFile>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style
    pub fn with(mut self, path: &str, contents: &str) -> Self {
        self.push(SourceFile::new(path, contents));
        self
    }

    /// Add or replace the document stored at `file.path`
    pub fn push(&mut self, file: SourceFile) {
        match self.files.iter().position(|f| f.path == file.path) {
            Some(index) => self.files[index] = file,
            None => self.files.push(file),
        }
    }

    /// Remove the document stored at `path`, returning it
    pub fn remove(&mut self, path: &str) -> Option<SourceFile> {
        let index = self.files.iter().position(|f| f.path == path)?;
        Some(self.files.remove(index))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn read_all(&self) -> Result<Vec<SourceFile>> {
        Ok(self.files.clone())
    }
}

/// Path of `path` below `root`, joined with `/` regardless of platform
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
