use serde::{Deserialize, Serialize};

/// Feature flags controlling what survives stripping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Keep link targets: `[text](url)` becomes `text (url)` instead of `text`.
    pub keep_links: bool,
    /// Keep code fence delimiter lines. Code bodies are always kept verbatim.
    pub keep_code: bool,
}

impl StripOptions {
    pub fn with_keep_links(mut self, keep_links: bool) -> Self {
        self.keep_links = keep_links;
        self
    }

    pub fn with_keep_code(mut self, keep_code: bool) -> Self {
        self.keep_code = keep_code;
        self
    }
}
