//! Catalog shared between readers across rebuilds

use std::sync::{Arc, RwLock};

use super::{Catalog, Result};

/// The currently published catalog
///
/// Readers take a snapshot and query it without further locking. A rebuild
/// constructs the whole new catalog before swapping it in, so readers only
/// ever see a complete build.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The catalog published at the time of the call
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Build a new catalog and publish it
    ///
    /// On failure the previous catalog stays published and the error is returned.
    pub fn rebuild<F>(&self, build: F) -> Result<Arc<Catalog>>
    where
        F: FnOnce() -> Result<Catalog>,
    {
        let next = Arc::new(build()?);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&next);
        Ok(next)
    }
}
