//! The in-memory book catalog.

use std::path::Path;

use crate::error::CatalogError;
use crate::store;
use crate::types::{Book, Outcome};

/// An ordered collection of books.
///
/// Insertion order is the only ordering; nothing is ever sorted. Titles are
/// not unique, and every title-keyed operation affects all matching records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new book. Always succeeds; duplicates are kept.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Outcome {
        self.push(Book::new(title, author, genre, year))
    }

    /// Append an already-built record.
    pub fn push(&mut self, book: Book) -> Outcome {
        log::trace!("Adding {book}");
        self.books.push(book);
        Outcome::Added
    }

    /// All books whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        let folded = title.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title_matches(&folded))
            .collect()
    }

    /// All books whose author contains `author`, ignoring case.
    ///
    /// An empty query matches every book.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        let folded = author.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.author_contains(&folded))
            .collect()
    }

    /// Remove every book whose title equals `title`, ignoring case.
    ///
    /// Returns [`Outcome::NotFound`] when nothing matched.
    pub fn remove(&mut self, title: &str) -> Outcome {
        let folded = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|b| !b.title_matches(&folded));
        let removed = before - self.books.len();
        log::trace!("Removed {removed} book(s) titled {title:?}");
        if removed > 0 {
            Outcome::Removed(removed)
        } else {
            Outcome::NotFound
        }
    }

    /// Write the whole catalog to `path` as a JSON array, overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<Outcome, CatalogError> {
        store::write_books(path.as_ref(), &self.books)?;
        Ok(Outcome::Saved)
    }

    /// Replace the catalog's contents with the books stored at `path`.
    ///
    /// Nothing is merged. On any error, including a missing file, the
    /// current contents are left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Outcome, CatalogError> {
        self.books = store::read_books(path.as_ref())?;
        Ok(Outcome::Loaded(self.books.len()))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
