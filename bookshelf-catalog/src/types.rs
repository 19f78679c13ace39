//! Data model types for the book catalog.
//!
//! [`Book`] is the persistent record; [`Outcome`] is the confirmation every
//! catalog operation hands back to its caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ── Book ────────────────────────────────────────────────────────────────────

/// A single book record as stored in the library file.
///
/// Files written with the older Spanish keys (`titulo`, `autor`, `genero`,
/// `anio`) are accepted on load. Saving always writes the English keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "autor")]
    pub author: String,
    #[serde(alias = "genero")]
    pub genre: String,
    /// Publication year. Not range-checked; negative values are allowed.
    #[serde(alias = "anio")]
    pub year: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    /// Reject a record whose title or author is blank.
    ///
    /// The catalog accepts anything; frontends call this at their input
    /// boundary. Genre and year are never checked.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::invalid_input("title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::invalid_input("author must not be empty"));
        }
        Ok(())
    }

    /// Exact title comparison against an already-lowercased query.
    pub(crate) fn title_matches(&self, folded_query: &str) -> bool {
        self.title.to_lowercase() == folded_query
    }

    /// Substring author comparison against an already-lowercased query.
    pub(crate) fn author_contains(&self, folded_query: &str) -> bool {
        self.author.to_lowercase().contains(folded_query)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}", self.title, self.author, self.year)?;
        if !self.genre.is_empty() {
            write!(f, ", {}", self.genre)?;
        }
        write!(f, ")")
    }
}

// ── Outcome ─────────────────────────────────────────────────────────────────

/// Confirmation returned by catalog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    /// Number of records removed. Never zero; an empty removal is `NotFound`.
    Removed(usize),
    NotFound,
    Saved,
    /// Number of records the catalog holds after the load.
    Loaded(usize),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed(_) => "removed",
            Self::NotFound => "not found",
            Self::Saved => "saved",
            Self::Loaded(_) => "loaded",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
