pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod remove;

use std::path::Path;

use bookshelf_catalog::{Book, Catalog};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Load the library file, starting empty if it does not exist yet.
///
/// Any other failure is returned, so a damaged file is never overwritten by
/// a later save.
pub(crate) fn open_catalog(path: &Path) -> Result<Catalog, CliError> {
    let mut catalog = Catalog::new();
    match catalog.load(path) {
        Ok(outcome) => {
            log::debug!("{} {} book(s) from {}", outcome, catalog.len(), path.display());
        }
        Err(e) if e.is_not_found() => {
            log::info!(
                "{}",
                format!("No library at {}, starting empty", path.display())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(catalog)
}

/// Print one book as an indented listing line.
pub(crate) fn print_book(book: &Book) {
    let genre = if book.genre.is_empty() {
        String::new()
    } else {
        format!(" [{}]", book.genre)
    };
    log::info!(
        "  {} {} {} ({}){}",
        book.title.if_supports_color(Stdout, |t| t.bold()),
        "by".if_supports_color(Stdout, |t| t.dimmed()),
        book.author.if_supports_color(Stdout, |t| t.cyan()),
        book.year,
        genre.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print a list of matches, or a dimmed note when there are none.
pub(crate) fn print_books<'a>(books: impl IntoIterator<Item = &'a Book>) {
    let mut any = false;
    for book in books {
        any = true;
        print_book(book);
    }
    if !any {
        log::info!(
            "  {}",
            "No matching books".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
