//! Galr CLI application entry point
//!
//! Browses a tagged image catalog from the terminal: an archive menu, a
//! filterable gallery and a detail view per image.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! galr
//! galr browse --category nature
//!
//! # List images matching a search and tags
//! galr ls -s mystic -t nature
//!
//! # Tag index, folders and a single image
//! galr tags -c art
//! galr categories
//! galr show 4
//!
//! # Use a catalog file instead of the built-in images
//! galr --catalog images.toml ls
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory (`~/.config/galr/config.toml`
//! on Linux) and are created with defaults on first run.

use galr::{
    GalrError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::GalrConfig,
    filter::Selector,
    logging,
};
use std::path::Path;
use std::time::Duration;

type Result<T> = std::result::Result<T, GalrError>;

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::sample()),
    }
}

fn main() -> Result<()> {
    let config = GalrConfig::load()?;
    let cli = Cli::parse_args();

    logging::init(config.log_level.as_deref());

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let catalog = load_catalog(catalog_path)?;
    tracing::debug!(images = catalog.len(), "catalog loaded");

    match command {
        Commands::Browse {
            category,
            tag,
            no_delay,
        } => {
            let start = match (category, tag) {
                (Some(category), _) => Some(Selector::Category(category)),
                (None, Some(tag)) => Some(Selector::tag(tag)?),
                (None, None) => None,
            };
            let delay = if no_delay {
                Duration::ZERO
            } else {
                config.transition_delay()
            };
            commands::browse(&catalog, start, delay, quiet)?;
        }
        Commands::List(args) => commands::list(&catalog, &args, quiet)?,
        Commands::Tags { category } => commands::tags(&catalog, category, quiet)?,
        Commands::Categories => commands::categories(&catalog, quiet)?,
        Commands::Show { id, json } => commands::show(&catalog, &id, json)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
