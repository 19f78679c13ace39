use std::path::Path;

use bookshelf_catalog::Book;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::open_catalog;
use crate::error::CliError;

/// Add a book and save the library.
pub(crate) fn run_add(library: &Path, book: Book) -> Result<(), CliError> {
    book.validate()?;

    let mut catalog = open_catalog(library)?;
    let title = book.title.clone();
    let outcome = catalog.push(book);
    catalog.save(library)?;

    log::info!(
        "{} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
        outcome,
    );
    Ok(())
}
