use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings;

/// Show the settings file and the library file it resolves to.
pub(crate) fn run_config_show(cli_override: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Bookshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if cli_override.is_some() {
        "--library"
    } else if settings::load_library_file(&path).is_some() {
        "settings"
    } else {
        "default"
    };
    let library = settings::resolve_library_file_with(cli_override, &path);
    log::info!(
        "  Library file:  {} {}",
        library.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string(&path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Remember `file` as the default library.
pub(crate) fn run_config_set_library(file: &Path) -> Result<(), CliError> {
    let file = absolute_library_file(file, std::env::current_dir())?;
    settings::save_library_file(&settings::settings_path(), Some(&file))?;
    log::info!(
        "{} Default library set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        file.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Anchor a relative library path at the working directory, so the saved
/// setting still points at the same file from anywhere.
pub(crate) fn absolute_library_file(
    file: &Path,
    cwd: std::io::Result<PathBuf>,
) -> Result<PathBuf, CliError> {
    if file.is_absolute() {
        return Ok(file.to_path_buf());
    }
    let cwd = cwd.map_err(|e| {
        CliError::config(format!(
            "cannot resolve {} against the current directory: {e}",
            file.display()
        ))
    })?;
    Ok(cwd.join(file))
}

/// Forget the saved default library.
pub(crate) fn run_config_clear_library() -> Result<(), CliError> {
    settings::save_library_file(&settings::settings_path(), None)?;
    log::info!(
        "{} Default library cleared (using ./{})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings::DEFAULT_LIBRARY_FILE,
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
