/// The three-character marker that opened a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceMarker {
    Backticks,
    Tildes,
}

impl FenceMarker {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker at the start of a line, ignoring surrounding
    /// whitespace. Anything after the marker (an info string, extra fence
    /// characters) is ignored.
    pub fn detect(line: &str) -> Option<Self> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(Self::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(Self::Tildes)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backticks => Self::BACKTICKS,
            Self::Tildes => Self::TILDES,
        }
    }
}

/// Where the segmenter is relative to fenced code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceState {
    #[default]
    Outside,
    Inside(FenceMarker),
}

/// What a single line means given the current [`FenceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Opening fence delimiter.
    Open,
    /// Closing fence delimiter matching the opener.
    Close,
    /// Body line of a fenced block, including mismatched fence lines.
    Code,
    /// Ordinary Markdown outside any fence.
    Text,
}

impl FenceState {
    /// Classifies `line` and returns the state for the next line.
    ///
    /// Only the marker that opened a block can close it, so a `~~~` line
    /// inside a backtick block is plain code content.
    pub fn advance(self, line: &str) -> (LineRole, FenceState) {
        match (self, FenceMarker::detect(line)) {
            (FenceState::Outside, Some(marker)) => (LineRole::Open, FenceState::Inside(marker)),
            (FenceState::Outside, None) => (LineRole::Text, FenceState::Outside),
            (FenceState::Inside(open), Some(found)) if open == found => {
                (LineRole::Close, FenceState::Outside)
            }
            (inside @ FenceState::Inside(_), _) => (LineRole::Code, inside),
        }
    }

    pub fn is_inside(self) -> bool {
        matches!(self, FenceState::Inside(_))
    }
}
