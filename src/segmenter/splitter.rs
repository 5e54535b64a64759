use regex::Regex;

/// One extracted file block: a relative target path and the text to write there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Target path captured from the delimiter line, trimmed
    pub path: String,
    /// File body between this delimiter and the next, trimmed
    pub content: String,
}

/// Splits a blob of concatenated file contents on delimiter lines
///
/// A delimiter line starts with a fixed comment prefix followed by the target
/// path for the block below it, e.g. `/// src/main.rs`. The prefix is
/// configurable because both `///` and `//` styles exist in the wild.
pub struct Segmenter {
    pattern: Regex,
}

impl Segmenter {
    /// Create a segmenter for the given marker prefix
    pub fn new(marker: &str) -> Self {
        // The marker is escaped, so any prefix string yields a valid pattern.
        let pattern = Regex::new(&format!(r"(?m)^{}[ \t]*(.+)$", regex::escape(marker)))
            .expect("escaped marker forms a valid pattern");

        Self { pattern }
    }

    /// Split a blob into segments, in document order
    ///
    /// Content for match `i` spans from the end of its delimiter line to the
    /// start of match `i + 1`, or to the end of the blob for the last match.
    /// Text before the first delimiter is preamble and is discarded. Segments
    /// whose path or content trim to empty are dropped.
    pub fn split(&self, blob: &str) -> Vec<Segment> {
        let matches: Vec<_> = self.pattern.captures_iter(blob).collect();
        let mut segments = Vec::with_capacity(matches.len());

        for (i, caps) in matches.iter().enumerate() {
            let path = match caps.get(1) {
                Some(m) => m.as_str().trim(),
                None => continue,
            };

            let body_start = caps.get(0).map(|m| m.end()).unwrap_or(blob.len());
            let body_end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(blob.len());
            let content = blob[body_start..body_end].trim();

            if path.is_empty() || content.is_empty() {
                continue;
            }

            segments.push(Segment {
                path: path.to_string(),
                content: content.to_string(),
            });
        }

        segments
    }
}

/// One-shot convenience wrapper around [`Segmenter`]
pub fn split_blob(blob: &str, marker: &str) -> Vec<Segment> {
    Segmenter::new(marker).split(blob)
}
