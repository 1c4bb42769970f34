use regex::Regex;
use std::sync::OnceLock;

/// Lines produced by the segmenter, assembled into the final text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines, squeezes every run of blank lines down to one and
    /// trims the whole result.
    pub fn finish(self) -> String {
        static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
        let blank_run =
            BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

        let joined = self.lines.join("\n");
        blank_run.replace_all(&joined, "\n\n").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(lines: &[&str]) -> OutputBuffer {
        let mut out = OutputBuffer::new();
        for line in lines {
            out.push(*line);
        }
        out
    }

    #[test]
    fn joins_with_newlines() {
        assert_eq!(buffer(&["a", "b", "c"]).finish(), "a\nb\nc");
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(buffer(&["a", "", "", "", "b"]).finish(), "a\n\nb");
        assert_eq!(buffer(&["a", "", "b"]).finish(), "a\n\nb");
    }

    #[test]
    fn trims_leading_and_trailing_blank_lines() {
        assert_eq!(buffer(&["", "", "  a", "b  ", "", ""]).finish(), "a\nb");
    }

    #[test]
    fn empty_buffer_is_empty_string() {
        assert_eq!(OutputBuffer::new().finish(), "");
    }
}
