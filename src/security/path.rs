use crate::writer::WriteError;
use std::path::{Component, Path, PathBuf};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Check a target path captured from a delimiter line.
    ///
    /// Delimiter lines come from pasted text, so the path is untrusted:
    /// absolute paths and `..` traversal are rejected to keep every write
    /// inside the output directory. `.` components are dropped. Hidden files
    /// are fine; blobs legitimately name dotfiles like `.gitignore`.
    ///
    /// Returns the normalized relative path.
    pub fn sanitize(raw: &str) -> Result<PathBuf, WriteError> {
        if raw.is_empty() {
            return Err(WriteError::InvalidPath("empty path".to_string()));
        }

        let mut normalized = PathBuf::new();

        for component in Path::new(raw).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(WriteError::InvalidPath(format!(
                        "absolute path not allowed: {}",
                        raw
                    )));
                }
                Component::ParentDir => {
                    return Err(WriteError::InvalidPath(format!(
                        "parent directory traversal not allowed: {}",
                        raw
                    )));
                }
                Component::CurDir => continue,
                Component::Normal(part) => normalized.push(part),
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(WriteError::InvalidPath(format!(
                "no usable components: {}",
                raw
            )));
        }

        Ok(normalized)
    }
}
