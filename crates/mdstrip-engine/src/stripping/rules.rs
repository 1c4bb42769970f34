use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::options::StripOptions;

/// How a rule rewrites each match. Templates use `regex` expansion syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    Template(&'static str),
    /// Picks a template depending on [`StripOptions::keep_links`].
    Link {
        kept: &'static str,
        dropped: &'static str,
    },
}

impl Replacement {
    fn template(self, options: &StripOptions) -> &'static str {
        match self {
            Replacement::Template(t) => t,
            Replacement::Link { kept, dropped } => {
                if options.keep_links {
                    kept
                } else {
                    dropped
                }
            }
        }
    }
}

/// One substitution in the line pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: Replacement,
}

const REMOVE: Replacement = Replacement::Template("");
const INNER: Replacement = Replacement::Template("${1}");

/// Line rules in application order. Each rule sees the output of the one
/// before it: bold must run before italic, and images before links.
pub const RULES: &[Rule] = &[
    Rule {
        name: "header",
        pattern: r"^#{1,6}\s+",
        replacement: REMOVE,
    },
    Rule {
        name: "blockquote",
        pattern: r"^>\s*",
        replacement: REMOVE,
    },
    Rule {
        name: "bullet",
        pattern: r"^\s*[-*+]\s+",
        replacement: REMOVE,
    },
    Rule {
        name: "ordinal",
        pattern: r"^\s*\d+\.\s+",
        replacement: REMOVE,
    },
    Rule {
        name: "bold_asterisk",
        pattern: r"\*\*([^*]+)\*\*",
        replacement: INNER,
    },
    Rule {
        name: "bold_underscore",
        pattern: r"__([^_]+)__",
        replacement: INNER,
    },
    Rule {
        name: "italic_asterisk",
        pattern: r"\*([^*]+)\*",
        replacement: INNER,
    },
    Rule {
        name: "italic_underscore",
        pattern: r"_([^_]+)_",
        replacement: INNER,
    },
    Rule {
        name: "strikethrough",
        pattern: r"~~([^~]+)~~",
        replacement: INNER,
    },
    Rule {
        name: "inline_code",
        pattern: r"`([^`]+)`",
        replacement: INNER,
    },
    Rule {
        name: "image",
        pattern: r"!\[([^\]]*)\]\([^)]+\)",
        replacement: INNER,
    },
    Rule {
        name: "link",
        pattern: r"\[([^\]]+)\]\(([^)]+)\)",
        replacement: Replacement::Link {
            kept: "${1} (${2})",
            dropped: "${1}",
        },
    },
    Rule {
        name: "reference_link",
        pattern: r"\[([^\]]+)\]\[[^\]]*\]",
        replacement: INNER,
    },
    Rule {
        name: "reference_definition",
        pattern: r"^\[[^\]]+\]:\s*.*$",
        replacement: REMOVE,
    },
    Rule {
        name: "html_tag",
        pattern: r"<[^>]+>",
        replacement: REMOVE,
    },
    Rule {
        name: "escape",
        pattern: r"\\([\\`*_{}\[\]()#+\-.!])",
        replacement: INNER,
    },
];

const HORIZONTAL_RULE: &str = r"^\s*[-*_]{3,}\s*$";

/// A [`Rule`] with its pattern compiled.
#[derive(Debug)]
pub struct CompiledRule {
    rule: &'static Rule,
    regex: Regex,
}

impl CompiledRule {
    pub fn name(&self) -> &'static str {
        self.rule.name
    }

    /// Rewrites every match in `line`. Returns `None` when nothing matched so
    /// the caller can keep its existing buffer.
    pub fn apply(&self, line: &str, options: &StripOptions) -> Option<String> {
        match self
            .regex
            .replace_all(line, self.rule.replacement.template(options))
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        }
    }
}

/// The compiled pipeline, built once per process.
pub fn compiled_rules() -> &'static [CompiledRule] {
    static COMPILED: OnceLock<Vec<CompiledRule>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| CompiledRule {
                rule,
                regex: Regex::new(rule.pattern).expect("Invalid strip rule regex"),
            })
            .collect()
    })
}

/// A line made only of 3+ `-`, `*` or `_` characters (mixing allowed),
/// optionally surrounded by whitespace.
pub fn is_horizontal_rule(line: &str) -> bool {
    static HR_REGEX: OnceLock<Regex> = OnceLock::new();
    HR_REGEX
        .get_or_init(|| Regex::new(HORIZONTAL_RULE).expect("Invalid horizontal rule regex"))
        .is_match(line)
}
