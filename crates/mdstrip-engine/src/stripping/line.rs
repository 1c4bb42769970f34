use crate::options::StripOptions;

use super::rules::{compiled_rules, is_horizontal_rule};

/// Removes Markdown syntax from one line outside a code block.
///
/// Horizontal rules and reference definitions come back empty. Everything
/// else runs through the rule table in order and is trimmed.
pub fn strip_line(line: &str, options: &StripOptions) -> String {
    if is_horizontal_rule(line) {
        return String::new();
    }

    compiled_rules()
        .iter()
        .fold(line.to_string(), |acc, rule| {
            rule.apply(&acc, options).unwrap_or(acc)
        })
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("Just plain text", "Just plain text")]
    #[case("   padded   ", "padded")]
    #[case("# Header with **bold** and *italic*", "Header with bold and italic")]
    #[case("> - quoted list item", "quoted list item")]
    #[case("1. **Step one**: run `make`", "Step one: run make")]
    #[case("***", "")]
    #[case("[ref]: https://example.com \"Title\"", "")]
    #[case("~~old~~ new <em>shiny</em>", "old new shiny")]
    #[case("[![badge](badge.svg)](https://ci)", "badge")]
    #[case("trailing carriage return\r", "trailing carriage return")]
    fn strips_lines(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_line(input, &StripOptions::default()), expected);
    }

    #[test]
    fn keeps_link_targets_when_asked() {
        let options = StripOptions::default().with_keep_links(true);
        assert_eq!(
            strip_line("- see [the guide](https://x.dev/guide)", &options),
            "see the guide (https://x.dev/guide)"
        );
    }

    #[test]
    fn image_is_not_mistaken_for_link() {
        let options = StripOptions::default().with_keep_links(true);
        assert_eq!(strip_line("![diagram](arch.png)", &options), "diagram");
    }

    #[test]
    fn nested_blockquote_strips_one_level() {
        assert_eq!(
            strip_line(">> deeper", &StripOptions::default()),
            "> deeper"
        );
    }

    #[test]
    fn unmatched_markers_pass_through() {
        assert_eq!(
            strip_line("2 * 3 = 6 and a_b", &StripOptions::default()),
            "2 * 3 = 6 and a_b"
        );
    }

    #[test]
    fn escaped_markers_survive_literally() {
        assert_eq!(
            strip_line(r"Escape \* asterisk \# hash", &StripOptions::default()),
            "Escape * asterisk # hash"
        );
    }
}
