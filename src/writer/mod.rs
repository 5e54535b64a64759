mod error;


pub use error::WriteError;

use crate::security::PathSanitizer;
use crate::segmenter::Segment;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one segment write, in batch order
#[derive(Debug)]
pub struct WriteOutcome {
    /// Target path as captured from the delimiter line
    pub path: String,
    /// On success, the resolved path the file was written to
    pub result: Result<PathBuf, WriteError>,
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Materialize every segment under `out_dir`, in order
///
/// Failures are isolated: a segment that cannot be written is recorded in its
/// outcome and the remaining segments are still attempted. There is no batch
/// atomicity; earlier files stay on disk when a later one fails.
pub fn write_segments(segments: &[Segment], out_dir: &Path) -> Vec<WriteOutcome> {
    segments
        .iter()
        .map(|segment| WriteOutcome {
            path: segment.path.clone(),
            result: write_segment(segment, out_dir),
        })
        .collect()
}

/// Write a single segment: sanitize, create parent dirs, write content + "\n"
fn write_segment(segment: &Segment, out_dir: &Path) -> Result<PathBuf, WriteError> {
    let relative = PathSanitizer::sanitize(&segment.path)?;
    let target = out_dir.join(relative);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WriteError::Io(format!("could not create {}: {}", parent.display(), e))
        })?;
    }

    // Truncating write: existing files are overwritten, not appended to
    let mut data = String::with_capacity(segment.content.len() + 1);
    data.push_str(&segment.content);
    data.push('\n');

    fs::write(&target, data)
        .map_err(|e| WriteError::Io(format!("could not write {}: {}", target.display(), e)))?;

    Ok(target)
}
