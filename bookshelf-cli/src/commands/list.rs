use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{open_catalog, print_books};
use crate::error::CliError;

/// List every book in insertion order.
pub(crate) fn run_list(library: &Path) -> Result<(), CliError> {
    let catalog = open_catalog(library)?;
    log::info!(
        "{} {}",
        library.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({} books)", catalog.len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    print_books(&catalog);
    Ok(())
}
