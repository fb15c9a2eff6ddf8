use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use padisquare::{
    catalog::{Catalog, CatalogError},
    fixtures::{DEFAULT_SET, Fixture, FixtureError},
    observability::LoggingConfig,
    render::RenderError,
    theme::Theme,
};

mod browse;
mod vendors;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("the vendor-site surface needs --vendor <SLUG>")]
    MissingVendor,

    #[error("--vendor only applies to the vendor-site surface, not {0}")]
    VendorOutsideSite(String),
}

#[derive(Debug, Parser)]
#[command(name = "padisquare", about = "PadiSquare storefront", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding fixture sets
    #[arg(long, env = "PADISQUARE_FIXTURES", default_value = "./fixtures", global = true)]
    fixtures: PathBuf,

    /// Fixture set to load
    #[arg(long, env = "PADISQUARE_FIXTURE", default_value = DEFAULT_SET, global = true)]
    fixture: String,

    /// Output theme (light, dark)
    #[arg(long, env = "PADISQUARE_THEME", default_value_t = Theme::Light, global = true)]
    theme: Theme,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse products on one of the storefront surfaces
    Browse(browse::BrowseArgs),

    /// List every vendor
    Vendors,

    /// Show one vendor's profile
    Vendor(vendors::VendorArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), CliError> {
        let catalog = self.load_catalog()?;

        match self.command {
            Commands::Browse(args) => browse::run(&catalog, args, self.theme),
            Commands::Vendors => vendors::directory(&catalog, self.theme),
            Commands::Vendor(args) => vendors::profile(&catalog, &args),
        }
    }

    fn load_catalog(&self) -> Result<Catalog, CliError> {
        Ok(Fixture::with_base_path(&self.fixtures).load_vendors(&self.fixture)?)
    }
}
