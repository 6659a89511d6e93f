use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&self.path(base), &self.render())
    }
}

fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        tracing::trace!(path = %path.display(), "unchanged");
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "written");
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        let result = write_file(&path, "hello").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.ts");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        write_file(&path, "first").unwrap();
        let result = write_file(&path, "second").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        write_file(&path, "same").unwrap();
        let result = write_file(&path, "same").unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_generated_file_joins_base() {
        struct Stub;
        impl GeneratedFile for Stub {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("src").join("Stub.ts")
            }
            fn render(&self) -> String {
                "export interface Stub {}\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        Stub.write(temp.path()).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("src/Stub.ts")).unwrap(),
            "export interface Stub {}\n"
        );
    }
}
