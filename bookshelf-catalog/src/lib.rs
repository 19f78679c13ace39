//! Book catalog data model, title/author search, and JSON persistence.
//!
//! This crate holds the whole in-memory catalog without any frontend
//! dependencies. Linking it has no side effects: nothing is printed and no
//! file is touched until [`Catalog::save`] or [`Catalog::load`] is called.

pub mod catalog;
pub mod error;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use store::{read_books, write_books};
pub use types::{Book, Outcome};
