//! JSON persistence for book lists.
//!
//! A library file is a single JSON array of [`Book`] objects. Reads are
//! whole-file. Writes go to a hidden sibling `.tmp` file which is then
//! renamed over the target, so an interrupted save never leaves a truncated
//! library.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::types::Book;

/// Read every book from a library file, in file order.
///
/// A missing file is reported as [`CatalogError::FileNotFound`] so callers
/// can start from an empty catalog; every other failure is `Io` or `Parse`.
pub fn read_books(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::file_not_found(path));
        }
        Err(e) => return Err(CatalogError::io(path, e)),
    };
    let books: Vec<Book> =
        serde_json::from_str(&contents).map_err(|e| CatalogError::parse(path, e))?;
    log::debug!("Read {} book(s) from {}", books.len(), path.display());
    Ok(books)
}

/// Write `books` to `path`, replacing any existing file.
///
/// A symlinked `path` is written through: the file it points to is replaced
/// and the link itself is kept. An existing target's permissions carry over
/// to the new file. Parent directories are not created.
pub fn write_books(path: &Path, books: &[Book]) -> Result<(), CatalogError> {
    let serialized = serde_json::to_string_pretty(books)?;
    let target = resolve_target(path)?;
    let tmp = tmp_path(&target)?;

    // An existing file with the temp name is not ours to overwrite or delete.
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp)
        .map_err(|e| CatalogError::io(&tmp, e))?;

    let result = fill_tmp(file, &tmp, &target, serialized.as_bytes())
        .map_err(|e| CatalogError::io(&tmp, e))
        .and_then(|()| fs::rename(&tmp, &target).map_err(|e| CatalogError::io(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    log::debug!("Wrote {} book(s) to {}", books.len(), target.display());
    Ok(())
}

/// Write and flush the temp file, copying the target's permissions if it exists.
fn fill_tmp(mut file: File, tmp: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(tmp, meta.permissions())?;
    }
    Ok(())
}

/// Follow a symlinked library path to the file that should be replaced.
///
/// A dangling link resolves to where it points, so the first save creates it.
fn resolve_target(path: &Path) -> Result<PathBuf, CatalogError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let link = fs::read_link(path).map_err(|e| CatalogError::io(path, e))?;
                Ok(match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            }
            Err(e) => Err(CatalogError::io(path, e)),
        },
        _ => Ok(path.to_path_buf()),
    }
}

/// `library.json` -> `.library.json.<pid>.tmp`, next to the target.
fn tmp_path(path: &Path) -> Result<PathBuf, CatalogError> {
    let Some(name) = path.file_name() else {
        return Err(CatalogError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    };
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}
