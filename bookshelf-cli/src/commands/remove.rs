use std::path::Path;

use bookshelf_catalog::Outcome;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::open_catalog;
use crate::error::CliError;

/// Remove every book with the given title. The file is only rewritten when
/// something was removed.
pub(crate) fn run_remove(library: &Path, title: &str) -> Result<(), CliError> {
    let mut catalog = open_catalog(library)?;
    match catalog.remove(title) {
        Outcome::Removed(n) => {
            catalog.save(library)?;
            log::info!(
                "{} {} ({} {})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                Outcome::Removed(n),
                n,
                if n == 1 { "copy" } else { "copies" },
            );
        }
        outcome => {
            log::warn!(
                "{} {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                title,
                outcome,
            );
        }
    }
    Ok(())
}
