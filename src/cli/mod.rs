mod catalog;
mod overnight;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::logging::init_cli_logger;

pub use catalog::{FacetsArgs, ListArgs, TabsArgs};
pub use overnight::OvernightArgs;

/// Service catalog engine for auto shop booking
#[derive(Parser)]
#[command(name = "shop-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.shop-catalog/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show category tabs with service counts
    Tabs(TabsArgs),

    /// List services as a booking widget would display them
    List(ListArgs),

    /// Show filterable facet values for a category
    Facets(FacetsArgs),

    /// Estimate whether a booking stays overnight
    Overnight(OvernightArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_cli_logger(self.verbose);
        let config = self.load_config()?;

        match self.command {
            Commands::Tabs(args) => args.run(&config),
            Commands::List(args) => args.run(&config),
            Commands::Facets(args) => args.run(&config),
            Commands::Overnight(args) => args.run(&config),
        }
    }

    fn load_config(&self) -> anyhow::Result<CatalogConfig> {
        let config = match &self.config {
            Some(path) => CatalogConfig::load_from(path)?,
            None => CatalogConfig::load()?,
        };
        debug!(?config, "effective config");
        Ok(config)
    }
}
