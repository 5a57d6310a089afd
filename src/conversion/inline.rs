/*!
 * Inline markup rewriting for plain body lines.
 *
 * Rules run as a cascade: each one sees the text produced by the previous
 * rule, so the order of `INLINE_RULES` is part of the output format.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A single pattern/replacement pair of the inline cascade
#[derive(Debug)]
pub struct InlineRule {
    /// Short rule name used in debug logging and tests
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl InlineRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Apply this rule alone to every non-overlapping match in `line`
    pub fn apply(&self, line: &str) -> String {
        self.pattern.replace_all(line, self.replacement).into_owned()
    }
}

/// Inline rules in application order
pub static INLINE_RULES: Lazy<Vec<InlineRule>> = Lazy::new(|| {
    vec![
        // Emphasis spans must be non-empty, otherwise `//` in URLs turns into `**`
        InlineRule::new("bold", r"\*(.+?)\*", "**${1}**"),
        InlineRule::new("italic", r"/(.+?)/", "*${1}*"),
        InlineRule::new("underline", r"_(.+?)_", "<u>${1}</u>"),
        InlineRule::new("strikethrough", r"~(.+?)~", "~~${1}~~"),
        InlineRule::new("link", r"\[\[(.*?)\]\[(.*?)\]\]", "[${2}](${1})"),
        InlineRule::new("table", r"\|", " | "),
        InlineRule::new("checkbox_open", r"\[\s\]", "- [ ]"),
        InlineRule::new("checkbox_done", r"\[X\]", "- [x]"),
    ]
});

/// Run the full inline cascade over one body line
pub fn rewrite_inline(line: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(line.to_string(), |text, rule| rule.apply(&text))
}

/// Look up a rule by name
pub fn rule(name: &str) -> Option<&'static InlineRule> {
    INLINE_RULES.iter().find(|r| r.name == name)
}
