//! Blocking directory helpers used by the profile service

use std::fs;
use std::io;
use std::path::Path;

/// Recursively copy the contents of `src` into `dest`.
///
/// `dest` must already exist. Files already present in `dest` are overwritten.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dest_path)?;
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
        }
    }
    Ok(())
}

/// Remove every entry inside `dir`, keeping `dir` itself.
///
/// Returns the number of top-level entries removed.
pub fn clear_dir(dir: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_preserves_tree() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("Default/Cache")).unwrap();
        fs::write(src.path().join("Local State"), "{}").unwrap();
        fs::write(src.path().join("Default/Cache/data_0"), "abc").unwrap();

        copy_dir_recursive(src.path(), dest.path()).unwrap();

        assert_eq!(fs::read_to_string(dest.path().join("Local State")).unwrap(), "{}");
        assert_eq!(
            fs::read_to_string(dest.path().join("Default/Cache/data_0")).unwrap(),
            "abc"
        );
    }

    #[test]
    fn clear_keeps_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("User Data/Default")).unwrap();
        fs::write(dir.path().join("chrome.log"), "x").unwrap();

        let removed = clear_dir(dir.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(dir.path().exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
