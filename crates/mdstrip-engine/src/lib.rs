pub mod document;
pub mod io;
pub mod options;
pub mod stripping;

// Re-export key types for easier usage
pub use document::Document;
pub use io::*;
pub use options::StripOptions;
pub use stripping::{BlockSegmenter, FenceMarker, FenceState, OutputBuffer, strip_line};

/// Strip Markdown formatting from a whole document.
///
/// Lines inside fenced code blocks are kept verbatim, every other line goes
/// through [`strip_line`]. Runs of blank lines collapse to a single blank line
/// and the result is trimmed. Never fails: syntax that doesn't match a rule
/// passes through untouched.
pub fn strip(document: &str, options: &StripOptions) -> String {
    let document = Document::new(document);
    BlockSegmenter::new(options).segment(&document).finish()
}
