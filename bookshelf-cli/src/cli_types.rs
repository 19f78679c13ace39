//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Manage a personal library of books stored in a JSON file", long_about = None)]
pub(crate) struct Cli {
    /// Library file (defaults to the saved setting, then ./library.json)
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search criteria for `find`; exactly one must be given.
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct FindArgs {
    /// Exact title, ignoring case
    #[arg(short, long)]
    pub title: Option<String>,

    /// Part of the author's name, ignoring case
    #[arg(short, long)]
    pub author: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a book to the library
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        author: String,

        /// Free-form genre
        #[arg(short, long, default_value = "")]
        genre: String,

        /// Publication year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Find books by title or author
    Find {
        #[command(flatten)]
        query: FindArgs,
    },

    /// Remove every book with the given title (ignoring case)
    Remove {
        title: String,
    },

    /// List every book in insertion order
    List,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings and the resolved library file
    Show,

    /// Print the settings file path
    Path,

    /// Remember a library file as the default
    SetLibrary {
        file: PathBuf,
    },

    /// Forget the saved default library file
    ClearLibrary,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
