// Public API exports
pub mod security;
pub mod segmenter;
pub mod source;
pub mod writer;

// Re-export main types for convenience
pub use security::PathSanitizer;

pub use segmenter::{DEFAULT_MARKER, Segment, Segmenter, split_blob};

pub use source::{InputSource, SourceError, resolve_input};

pub use writer::{WriteError, WriteOutcome, write_segments};
