//! pinolint comment directives.
//!
//! Suppression directives recognized in source comments:
//! - `pinolint-disable-next-line [rule...]` - suppress the following line
//! - `pinolint-disable-line [rule...]` - suppress the comment's own line
//!
//! A directive may name the rules it applies to; with no names it applies
//! to every rule. A directive naming only unknown rules is a no-op.

use std::collections::HashSet;

use swc_common::SourceMap;

use crate::core::parsers::js::ExtractedComments;

/// The one suppressible rule id.
const ARGS_POSITION_RULE: &str = "correct-args-position";

/// A parsed pinolint comment directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    DisableNextLine,
    DisableLine,
}

impl Directive {
    /// Parse a directive from comment text (swc has already stripped the
    /// `//` and `/* */` markers).
    ///
    /// Returns `None` when the comment is not a pinolint directive, or when
    /// it names only rules this tool does not implement.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Longer prefix first: "pinolint-disable-next-line" also starts
        // with "pinolint-disable-line"'s sibling prefix.
        if let Some(rest) = strip_directive_prefix(text, "pinolint-disable-next-line") {
            return applies_to_args_position(rest).then_some(Self::DisableNextLine);
        }
        if let Some(rest) = strip_directive_prefix(text, "pinolint-disable-line") {
            return applies_to_args_position(rest).then_some(Self::DisableLine);
        }

        None
    }
}

/// Try to match a directive prefix, requiring whitespace or end after it.
fn strip_directive_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Whether the rule list after a directive covers the args-position rule.
/// An empty list means "all rules".
fn applies_to_args_position(rest: &str) -> bool {
    let rules: Vec<&str> = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    rules.is_empty() || rules.contains(&ARGS_POSITION_RULE)
}

/// Lines on which the args-position rule is suppressed.
#[derive(Debug, Clone, Default)]
pub struct Suppressions {
    pub disabled_lines: HashSet<usize>,
}

impl Suppressions {
    pub fn is_suppressed(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
    }
}

/// Collects suppression directives from a file's extracted comments.
pub struct CommentCollector;

impl CommentCollector {
    pub fn collect(comments: &ExtractedComments, source_map: &SourceMap) -> Suppressions {
        let mut suppressions = Suppressions::default();

        for comment in comments.all() {
            let Some(directive) = Directive::parse(&comment.text) else {
                continue;
            };

            let line = source_map.lookup_char_pos(comment.span.lo).line;
            match directive {
                Directive::DisableNextLine => {
                    suppressions.disabled_lines.insert(line + 1);
                }
                Directive::DisableLine => {
                    suppressions.disabled_lines.insert(line);
                }
            }
        }

        suppressions
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::parsers::js::parse_source;

    #[test]
    fn test_parse_disable_next_line() {
        assert_eq!(
            Directive::parse("pinolint-disable-next-line"),
            Some(Directive::DisableNextLine)
        );
        assert_eq!(
            Directive::parse("  pinolint-disable-next-line  "),
            Some(Directive::DisableNextLine)
        );
    }

    #[test]
    fn test_parse_disable_line() {
        assert_eq!(
            Directive::parse("pinolint-disable-line"),
            Some(Directive::DisableLine)
        );
    }

    #[test]
    fn test_parse_with_rule_name() {
        assert_eq!(
            Directive::parse("pinolint-disable-next-line correct-args-position"),
            Some(Directive::DisableNextLine)
        );
    }

    #[test]
    fn test_parse_unknown_rule_name_is_noop() {
        assert_eq!(
            Directive::parse("pinolint-disable-next-line some-other-rule"),
            None
        );
    }

    #[test]
    fn test_parse_non_directive() {
        assert_eq!(Directive::parse("just a comment"), None);
        assert_eq!(Directive::parse("pinolint-disable-next-liner"), None);
        assert_eq!(Directive::parse(""), None);
    }

    fn suppressions_for(code: &str) -> Suppressions {
        let source_map = Arc::new(swc_common::SourceMap::default());
        let parsed = parse_source(code.to_string(), "./test.ts", source_map).unwrap();
        CommentCollector::collect(&parsed.comments, &parsed.source_map)
    }

    #[test]
    fn test_collect_next_line_suppression() {
        let suppressions = suppressions_for(
            "// pinolint-disable-next-line\nlogger.info('msg', data);\nlogger.info('msg', data);\n",
        );
        assert!(suppressions.is_suppressed(2));
        assert!(!suppressions.is_suppressed(3));
    }

    #[test]
    fn test_collect_same_line_suppression() {
        let suppressions =
            suppressions_for("logger.info('msg', data); // pinolint-disable-line\n");
        assert!(suppressions.is_suppressed(1));
        assert!(!suppressions.is_suppressed(2));
    }

    #[test]
    fn test_collect_block_comment_directive() {
        let suppressions =
            suppressions_for("/* pinolint-disable-next-line */\nlogger.info('msg', data);\n");
        assert!(suppressions.is_suppressed(2));
    }

    #[test]
    fn test_collect_no_directives() {
        let suppressions = suppressions_for("// regular comment\nlogger.info('msg', data);\n");
        assert!(suppressions.disabled_lines.is_empty());
    }
}
