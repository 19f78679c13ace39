//! The bookshelf settings file and default-library lookup.
//!
//! Settings live in `~/.config/bookshelf/settings.toml`. bookshelf itself only
//! owns `[library] current_file`; any other keys a user keeps there are
//! carried over verbatim whenever the file is rewritten. A settings file that
//! does not parse is never rewritten.

use std::io;
use std::path::{Path, PathBuf};

/// Library file used when neither the flag nor the settings name one.
pub(crate) const DEFAULT_LIBRARY_FILE: &str = "library.json";

pub(crate) fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookshelf")
        .join("settings.toml")
}

/// Pick the library file for this run: `--library`, then the saved
/// `current_file`, then `./library.json`.
pub(crate) fn resolve_library_file(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_library_file_with(cli_override, &settings_path())
}

pub(crate) fn resolve_library_file_with(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    cli_override
        .or_else(|| load_library_file(settings))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE))
}

/// The saved `current_file`, if the settings file has a non-empty one.
///
/// A broken settings file is treated as unset here; only writes refuse it.
pub(crate) fn load_library_file(settings: &Path) -> Option<PathBuf> {
    let doc = read_settings(settings).ok()?;
    match doc.get("library")?.get("current_file")?.as_str()? {
        "" => None,
        file => Some(PathBuf::from(file)),
    }
}

/// Store `file` as `current_file`, or drop the key when `file` is `None`.
///
/// Fails with `InvalidData` instead of touching a settings file that cannot
/// be parsed or whose `[library]` entry is not a table.
pub(crate) fn save_library_file(settings: &Path, file: Option<&Path>) -> io::Result<()> {
    let mut doc = read_settings(settings)?;

    let library = doc
        .entry("library")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(library) = library.as_table_mut() else {
        return Err(invalid_settings(settings, "[library] is not a table"));
    };

    match file {
        Some(p) => {
            library.insert(
                "current_file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            library.remove("current_file");
        }
    }

    write_settings(settings, &doc)
}

/// The settings file re-rendered as TOML, for `config show`.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    if !settings.exists() {
        return None;
    }
    let doc = read_settings(settings).ok()?;
    toml::to_string_pretty(&doc).ok()
}

/// Parse the settings file. A missing file is an empty table.
fn read_settings(settings: &Path) -> io::Result<toml::Table> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(toml::Table::new()),
        Err(e) => return Err(e),
    };
    contents
        .parse::<toml::Table>()
        .map_err(|e| invalid_settings(settings, e))
}

/// Write via `settings.toml.tmp` + rename, creating the config directory.
fn write_settings(settings: &Path, doc: &toml::Table) -> io::Result<()> {
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, rendered)?;
    std::fs::rename(&tmp, settings)
}

fn invalid_settings(settings: &Path, reason: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{}: {reason}", settings.display()),
    )
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
