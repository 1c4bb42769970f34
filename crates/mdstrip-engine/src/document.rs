/// A single input document, viewed as its ordered lines.
///
/// Lines are split on `'\n'` only. A `'\r'` from CRLF input stays on the line;
/// stripped lines are trimmed anyway and code bodies are kept byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

impl<'a> From<&'a str> for Document<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}
