mod splitter;

#[cfg(test)]
mod tests;

pub use splitter::{Segment, Segmenter, split_blob};

/// Default comment prefix for delimiter lines (`/// path/to/file.ext`)
pub const DEFAULT_MARKER: &str = "///";
