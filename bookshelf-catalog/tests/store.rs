use bookshelf_catalog::{Book, CatalogError, read_books, write_books};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn dune() -> Book {
    Book::new("Dune", "Frank Herbert", "SF", 1965)
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_english_keys_as_json_array() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    let books = vec![Book::new(
        "Cien años de soledad",
        "Gabriel García Márquez",
        "Novela",
        1967,
    )];

    write_books(&path, &books).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Cien años de soledad");
    assert_eq!(records[0]["author"], "Gabriel García Márquez");
    assert_eq!(records[0]["genre"], "Novela");
    assert_eq!(records[0]["year"], 1967);
}

#[test]
fn write_overwrites_and_leaves_no_temp_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(tmp.path(), "library.json", "stale contents");

    write_books(&path, &[]).unwrap();

    assert_eq!(read_books(&path).unwrap(), Vec::<Book>::new());
    assert_eq!(dir_entries(tmp.path()), vec!["library.json".to_string()]);
}

#[test]
fn write_leaves_unrelated_tmp_file_alone() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    write_json(tmp.path(), "library.json.tmp", "keep me");

    write_books(&path, &[dune()]).unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("library.json.tmp")).unwrap(),
        "keep me"
    );
    assert_eq!(
        dir_entries(tmp.path()),
        vec!["library.json".to_string(), "library.json.tmp".to_string()]
    );
}

#[test]
fn failed_write_leaves_no_temp_file() {
    let tmp = TempDir::new().unwrap();
    // A directory at the target makes the final rename fail.
    let path = tmp.path().join("library.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupant"), "x").unwrap();

    let err = write_books(&path, &[dune()]).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert_eq!(dir_entries(tmp.path()), vec!["library.json".to_string()]);
}

#[cfg(unix)]
#[test]
fn write_through_symlink_updates_link_target() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    let real = write_json(tmp.path(), "real.json", "[]");
    let link = tmp.path().join("library.json");
    symlink(&real, &link).unwrap();

    write_books(&link, &[dune()]).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(read_books(&real).unwrap(), vec![dune()]);
    assert_eq!(read_books(&link).unwrap(), vec![dune()]);
}

#[cfg(unix)]
#[test]
fn write_through_dangling_symlink_creates_target() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    let link = tmp.path().join("library.json");
    symlink("real.json", &link).unwrap();

    write_books(&link, &[dune()]).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(read_books(&tmp.path().join("real.json")).unwrap(), vec![dune()]);
}

#[cfg(unix)]
#[test]
fn write_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let path = write_json(tmp.path(), "library.json", "[]");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    write_books(&path, &[dune()]).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o640);
}

#[test]
fn reads_legacy_spanish_keys() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "libreria.json",
        r#"[{"titulo": "Cien años de soledad", "autor": "Gabriel García Márquez", "genero": "Novela", "anio": 1967}]"#,
    );

    let books = read_books(&path).unwrap();
    assert_eq!(
        books,
        vec![Book::new(
            "Cien años de soledad",
            "Gabriel García Márquez",
            "Novela",
            1967
        )]
    );
}

#[test]
fn ignores_unknown_keys() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "library.json",
        r#"[{"title": "Dune", "author": "Frank Herbert", "genre": "SF", "year": 1965, "isbn": "0441013597"}]"#,
    );

    let books = read_books(&path).unwrap();
    assert_eq!(books[0].title, "Dune");
}

#[test]
fn missing_field_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "library.json",
        r#"[{"title": "Dune", "author": "Frank Herbert", "genre": "SF"}]"#,
    );

    let err = read_books(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn non_integer_year_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        tmp.path(),
        "library.json",
        r#"[{"title": "Dune", "author": "Frank Herbert", "genre": "SF", "year": "1965"}]"#,
    );

    assert!(matches!(
        read_books(&path).unwrap_err(),
        CatalogError::Parse { .. }
    ));
}

#[test]
fn missing_file_is_file_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = read_books(&tmp.path().join("nope.json")).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn directory_path_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_books(tmp.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
