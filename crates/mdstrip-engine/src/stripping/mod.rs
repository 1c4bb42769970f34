//! Line-oriented Markdown stripping.
//!
//! [`BlockSegmenter`] tracks fenced code blocks across lines and hands every
//! other line to [`strip_line`], which runs the ordered substitutions from
//! [`rules`]. [`OutputBuffer`] assembles the surviving lines.

pub mod fence;
pub mod line;
pub mod output;
pub mod rules;
pub mod segment;

pub use fence::{FenceMarker, FenceState, LineRole};
pub use line::strip_line;
pub use output::OutputBuffer;
pub use rules::{RULES, Replacement, Rule};
pub use segment::BlockSegmenter;
