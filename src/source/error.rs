use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source file not found: {0}")]
    NotFound(String),

    #[error("Failed to read input: {0}")]
    Io(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("No content found (clipboard is empty or source file is blank)")]
    EmptyInput,
}
