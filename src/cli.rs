//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for galr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive gallery starting at the archive menu (default)
//! - **list**: Print the images visible under a search, tags or a selector
//! - **tags**: Tag index with usage counts, optionally one folder's tags
//! - **categories**: The three archive folders and their sizes
//! - **show**: Detail view of one image
//! - **config**: Read and change settings
//!
//! # Examples
//!
//! ```no_run
//! use galr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::List(args) => {
//!         let (filters, selector) = args.query().unwrap();
//!         println!("{selector}: {filters:?}");
//!     }
//!     _ => {}
//! }
//! ```

use crate::filter::{ArchiveCategory, FilterError, FilterState, Selector};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Browse a tagged image gallery from the terminal
#[derive(Parser, Debug)]
#[command(name = "galr", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only print results (ids, tag names), no decoration
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog file to browse instead of the built-in images
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments from the process command line
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to `browse`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            category: None,
            tag: None,
            no_delay: false,
        })
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the gallery interactively
    #[command(visible_alias = "b")]
    Browse {
        /// Start inside an archive folder
        #[arg(short = 'c', long = "category", conflicts_with = "tag")]
        category: Option<ArchiveCategory>,

        /// Start browsing a single tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,

        /// Skip the loading pause between screens
        #[arg(long = "no-delay")]
        no_delay: bool,
    },

    /// List images matching a search, tags or selector
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List all tags with usage counts
    Tags {
        /// Only tags filed under this archive folder
        #[arg(short = 'c', long = "category")]
        category: Option<ArchiveCategory>,
    },

    /// List the archive folders
    Categories,

    /// Show one image in detail
    Show {
        /// Image id
        id: String,

        /// Print the record as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments of the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against titles and tags
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Require this tag (repeatable, all must match)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only images in this archive folder
    #[arg(short = 'c', long = "category", conflicts_with = "selected_tag")]
    pub category: Option<ArchiveCategory>,

    /// Browse a single tag (cannot be combined with --tag)
    #[arg(long = "selected-tag", value_name = "TAG", conflicts_with = "tags")]
    pub selected_tag: Option<String>,

    /// Print records as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl ListArgs {
    /// Filter state and selector described by these arguments
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` for blank tags.
    pub fn query(&self) -> Result<(FilterState, Selector), FilterError> {
        let selector = match (&self.selected_tag, self.category) {
            (Some(tag), _) => Selector::tag(tag.clone())?,
            (None, Some(category)) => Selector::Category(category),
            (None, None) => Selector::All,
        };

        let mut filters = FilterState::new();
        if let Some(search) = &self.search {
            filters.set_search(search.clone());
        }
        for tag in &self.tags {
            if !filters.is_active(tag) {
                filters.toggle_tag(tag)?;
            }
        }

        Ok((filters, selector))
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., transition_delay_ms=0)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}
