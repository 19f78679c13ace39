//! Add a book, save the catalog, reload it into a fresh one, and search it.
//!
//! Usage: cargo run -p bookshelf-catalog --example quickstart [FILE]

use std::path::PathBuf;

use bookshelf_catalog::{Catalog, CatalogError};

fn main() -> Result<(), CatalogError> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("bookshelf-quickstart.json"));

    let mut catalog = Catalog::new();
    catalog.add(
        "Cien años de soledad",
        "Gabriel García Márquez",
        "Novela",
        1967,
    );
    println!("{}", catalog.save(&path)?);

    let mut reloaded = Catalog::new();
    println!("{}", reloaded.load(&path)?);
    for book in reloaded.find_by_author("Gabriel García Márquez") {
        println!("{book}");
    }

    Ok(())
}
