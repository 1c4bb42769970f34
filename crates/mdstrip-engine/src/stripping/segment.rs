use crate::document::Document;
use crate::options::StripOptions;

use super::fence::{FenceState, LineRole};
use super::line::strip_line;
use super::output::OutputBuffer;
use super::rules::is_horizontal_rule;

/// Walks a document line by line, keeping fenced code verbatim and sending
/// everything else through [`strip_line`].
///
/// Fence state starts at [`FenceState::Outside`] on every call to
/// [`segment`](Self::segment), so nothing carries over between documents.
#[derive(Debug, Clone, Copy)]
pub struct BlockSegmenter<'o> {
    options: &'o StripOptions,
}

impl<'o> BlockSegmenter<'o> {
    pub fn new(options: &'o StripOptions) -> Self {
        Self { options }
    }

    pub fn segment(&self, document: &Document<'_>) -> OutputBuffer {
        let mut out = OutputBuffer::with_capacity(document.lines().len());
        let mut state = FenceState::Outside;

        for &line in document.lines() {
            let (role, next) = state.advance(line);
            state = next;

            match role {
                LineRole::Open | LineRole::Close => {
                    if self.options.keep_code {
                        out.push(line);
                    }
                }
                LineRole::Code => out.push(line),
                LineRole::Text => {
                    if let Some(stripped) = self.strip_text_line(line) {
                        out.push(stripped);
                    }
                }
            }
        }

        out
    }

    /// A horizontal rule becomes a blank separator. Other lines that strip
    /// down to nothing are dropped, unless they were blank to begin with.
    fn strip_text_line(&self, line: &str) -> Option<String> {
        if is_horizontal_rule(line) {
            return Some(String::new());
        }

        let stripped = strip_line(line, self.options);
        if stripped.is_empty() && !line.is_empty() {
            None
        } else {
            Some(stripped)
        }
    }
}
