use std::io;

use clap::Args;

use padisquare::{
    catalog::Catalog,
    render::{write_vendor_directory, write_vendor_profile},
    theme::Theme,
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct VendorArgs {
    /// Vendor slug (e.g. rigaaley-tech)
    pub(crate) slug: String,
}

pub(crate) fn directory(catalog: &Catalog, theme: Theme) -> Result<(), CliError> {
    write_vendor_directory(io::stdout().lock(), catalog.vendors(), theme)?;

    Ok(())
}

pub(crate) fn profile(catalog: &Catalog, args: &VendorArgs) -> Result<(), CliError> {
    let vendor = catalog.vendor(&args.slug)?;

    write_vendor_profile(io::stdout().lock(), vendor)?;

    Ok(())
}
