//! CLI entry point for chronicle

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronicle::commands::list::ListOptions;
use chronicle::{commands, Chronicle, SharedCatalog};

#[derive(Parser)]
#[command(name = "chronicle")]
#[command(version)]
#[command(about = "Content catalog for an MDX-authored blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog and report problems
    Check {
        /// Rebuild whenever content or config changes
        #[arg(short, long)]
        watch: bool,
    },

    /// List published documents, newest first
    #[command(alias = "ls")]
    List {
        /// List every document in load order, published or not
        #[arg(short, long)]
        all: bool,

        /// Maximum number of documents (defaults to index.max_display)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only documents with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one document by slug or URL
    Show {
        /// Slug (e.g. a.mdx) or detail URL (e.g. /blog/a.mdx)
        slug: String,
    },

    /// List tags of published documents
    Tags,

    /// Write the published listing as JSON
    Index {
        /// Output file (defaults to catalog.json in the site directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "chronicle=debug,info"
    } else {
        "chronicle=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Check { watch } => {
            let site = Chronicle::new(&base_dir)?;
            tracing::info!("Loading documents from {:?}", site.content_dir);

            if watch {
                // Keep watching even if the first build fails
                let initial = match commands::check::run(&site) {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        tracing::error!("{}", e);
                        chronicle::Catalog::default()
                    }
                };
                commands::check::watch(&site, SharedCatalog::new(initial)).await?;
            } else {
                commands::check::run(&site)?;
            }
        }

        Commands::List {
            all,
            limit,
            tag,
            json,
        } => {
            let site = Chronicle::new(&base_dir)?;
            let options = ListOptions {
                all,
                limit,
                tag,
                json,
            };
            commands::list::run(&site, &options)?;
        }

        Commands::Show { slug } => {
            let site = Chronicle::new(&base_dir)?;
            commands::show::run(&site, &slug)?;
        }

        Commands::Tags => {
            let site = Chronicle::new(&base_dir)?;
            commands::tags::run(&site)?;
        }

        Commands::Index { output } => {
            let site = Chronicle::new(&base_dir)?;
            let path = commands::index::run(&site, output.as_deref())?;
            println!("Wrote {}", path.display());
        }

        Commands::Version => {
            println!("chronicle version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
