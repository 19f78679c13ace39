use std::path::Path;

use super::{open_catalog, print_books};
use crate::cli_types::FindArgs;
use crate::error::CliError;

/// Search the library by exact title or by author substring.
pub(crate) fn run_find(library: &Path, query: FindArgs) -> Result<(), CliError> {
    let catalog = open_catalog(library)?;
    let matches = match (query.title, query.author) {
        (Some(title), _) => catalog.find_by_title(&title),
        (None, Some(author)) => catalog.find_by_author(&author),
        (None, None) => return Err(CliError::config("find needs --title or --author")),
    };
    log::debug!("{} match(es)", matches.len());
    print_books(matches);
    Ok(())
}
