use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::error::{Error, Result};
use crate::font::is_font_file;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Font files directly inside `dir`, sorted by path
pub fn list_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.to_path_buf()));
    }

    let mut fonts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_font_file(&path) {
            fonts.push(path);
        } else {
            debug!("Ignoring non-font entry: {}", path.display());
        }
    }
    fonts.sort();
    Ok(fonts)
}

/// Recursively copy the contents of `src_dir` into `dest_dir`
pub fn copy_directory(src_dir: &Path, dest_dir: &Path) -> Result<()> {
    ensure_directory_exists(dest_dir)?;

    for entry in fs::read_dir(src_dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(file_name);

        if path.is_dir() {
            copy_directory(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_tree() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("system/fonts")).unwrap();
        fs::write(src.path().join("module.prop"), "id=template").unwrap();
        fs::write(src.path().join("system/fonts/.keep"), "").unwrap();

        let target = dest.path().join("outs");
        copy_directory(src.path(), &target).unwrap();

        assert_eq!(
            fs::read_to_string(target.join("module.prop")).unwrap(),
            "id=template"
        );
        assert!(target.join("system/fonts/.keep").is_file());
    }

    #[test]
    fn lists_fonts_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.ttf", "a.otf", "notes.md"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let fonts = list_font_files(dir.path()).unwrap();
        assert_eq!(fonts, [dir.path().join("a.otf"), dir.path().join("b.ttf")]);
    }

    #[test]
    fn listing_a_file_is_invalid() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("fonts.zip");
        fs::write(&file, b"PK").unwrap();
        assert!(matches!(list_font_files(&file), Err(Error::InvalidPath(_))));
    }
}
