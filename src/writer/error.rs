use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Invalid target path: {0}")]
    InvalidPath(String),

    #[error("Write failed: {0}")]
    Io(String),
}
