mod error;


pub use error::SourceError;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Where the input blob came from, for status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(String),
    Clipboard,
}

/// Resolve the input blob for one run
///
/// With a source file the file's full text is read as UTF-8. Without one the
/// system clipboard is read instead, with CRLF line endings normalized to LF.
/// A blob that is empty or all-whitespace terminates the run before any
/// segmentation happens.
pub fn resolve_input(source_file: Option<&Path>) -> Result<(String, InputSource), SourceError> {
    let (blob, origin) = match source_file {
        Some(path) => {
            let text = read_source_file(path)?;
            (text, InputSource::File(path.display().to_string()))
        }
        None => (read_clipboard()?, InputSource::Clipboard),
    };

    if blob.trim().is_empty() {
        return Err(SourceError::EmptyInput);
    }

    Ok((blob, origin))
}

fn read_source_file(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
        _ => SourceError::Io(format!("could not read {}: {}", path.display(), e)),
    })
}

fn read_clipboard() -> Result<String, SourceError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| SourceError::ClipboardUnavailable(e.to_string()))?;

    let text = clipboard
        .get_text()
        .map_err(|e| SourceError::ClipboardUnavailable(e.to_string()))?;

    Ok(normalize_line_endings(&text))
}

/// Convert CRLF to LF; clipboard text on Windows carries CRLF
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
