//! Build the catalog and report, optionally rebuilding on changes

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebouncedEvent};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::catalog::{Catalog, CatalogError, SharedCatalog};
use crate::{Chronicle, CONFIG_FILE};

/// Build the catalog once and print a summary
pub fn run(site: &Chronicle) -> Result<Catalog> {
    let start = std::time::Instant::now();
    let catalog = site.load_catalog()?;

    println!("{}", summary(&catalog));
    tracing::info!("Checked in {:.2}s", start.elapsed().as_secs_f64());

    Ok(catalog)
}

/// One-line description of a catalog
pub fn summary(catalog: &Catalog) -> String {
    format!(
        "{} documents, {} published, {} tags",
        catalog.len(),
        catalog.published_count(),
        catalog.tags().len()
    )
}

/// Watch the content directory and config file, rebuilding on every change
///
/// A rebuild that fails is reported and the previous catalog stays published.
pub async fn watch(site: &Chronicle, shared: SharedCatalog) -> Result<()> {
    let base_dir = site.base_dir.clone();
    let content_dir = site.content_dir.clone();
    let config_path = site.config_path();

    tokio::task::spawn_blocking(move || {
        watch_blocking(&base_dir, &content_dir, &config_path, &shared)
    })
    .await?
}

fn watch_blocking(
    base_dir: &Path,
    content_dir: &Path,
    config_path: &Path,
    shared: &SharedCatalog,
) -> Result<()> {
    let (tx, rx) = channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if content_dir.exists() {
        debouncer
            .watcher()
            .watch(content_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", content_dir);
    }

    if config_path.exists() {
        debouncer
            .watcher()
            .watch(config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<&DebouncedEvent> =
                    events.iter().filter(|e| is_relevant(&e.path)).collect();
                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Config may have moved the content directory; reload it too
                let result = shared.rebuild(|| match Chronicle::new(base_dir) {
                    Ok(site) => site.load_catalog(),
                    Err(e) => Err(CatalogError::Validation {
                        path: CONFIG_FILE.to_string(),
                        reason: e.to_string(),
                    }),
                });

                match result {
                    Ok(catalog) => println!("Rebuilt: {}", summary(&catalog)),
                    Err(e) => {
                        tracing::error!("Rebuild failed, keeping previous catalog: {}", e);
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Skip editor and VCS noise
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}
