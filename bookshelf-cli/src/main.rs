//! bookshelf CLI
//!
//! Command-line interface for managing a personal library of books stored
//! in a JSON file.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use bookshelf_catalog::Book;

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::commands::add::run_add;
use crate::commands::config::{
    run_config_clear_library, run_config_path, run_config_set_library, run_config_show,
};
use crate::commands::find::run_find;
use crate::commands::list::run_list;
use crate::commands::remove::run_remove;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Add {
            title,
            author,
            genre,
            year,
        } => {
            let library = settings::resolve_library_file(cli.library);
            run_add(&library, Book::new(title, author, genre, year))
        }
        Commands::Find { query } => {
            let library = settings::resolve_library_file(cli.library);
            run_find(&library, query)
        }
        Commands::Remove { title } => {
            let library = settings::resolve_library_file(cli.library);
            run_remove(&library, &title)
        }
        Commands::List => {
            let library = settings::resolve_library_file(cli.library);
            run_list(&library)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(cli.library);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::SetLibrary { file } => run_config_set_library(&file),
            ConfigAction::ClearLibrary => run_config_clear_library(),
        },
    }
}
