//! File system helpers for pipeline artifacts

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Read a whole file into a String
pub fn read_to_string(path: &Path) -> std::io::Result<String> {
    let mut f = fs::File::open(path)?;
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(s)
}

/// Create the parent directory of `path` if it has one
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Sibling path the contents are staged in before being renamed into place
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write `contents` to `path` so readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path)?;

    let staging = staging_path(path);
    let result = fs::File::create(&staging).and_then(|mut f| {
        f.write_all(contents)?;
        f.sync_all()
    });
    if let Err(e) = result {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    fs::rename(&staging, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "{}");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_atomic(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let path = Path::new("data/processed_player_stats.csv");
        assert_eq!(
            staging_path(path),
            PathBuf::from("data/processed_player_stats.csv.partial")
        );
    }

    #[test]
    fn test_read_missing_file_errors() {
        let dir = tempdir().unwrap();
        let err = read_to_string(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("output.json")).is_ok());
    }
}
