//! Frontmatter block assembled from `#+` metadata lines.

/// Opening and closing line of the frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Marker that introduces a metadata line
pub const METADATA_MARKER: &str = "#+";

/// Literal prefix removed from property lines before splitting
pub const PROPERTY_PREFIX: &str = "PROPERTY: ";

/// Metadata lines collected from one document, in encounter order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    lines: Vec<String>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw metadata line, marker included
    pub fn push(&mut self, raw_line: &str) {
        self.lines.push(raw_line.to_string());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Split one raw metadata line into its key and value.
    ///
    /// A line without whitespace yields an empty value.
    pub fn split_entry(raw_line: &str) -> (String, String) {
        let line = raw_line.replace(PROPERTY_PREFIX, "");
        let mut tokens = line.split_whitespace();

        let first = tokens.next().unwrap_or_default();
        let key = first.strip_prefix(METADATA_MARKER).unwrap_or(first).to_string();
        let value = tokens.collect::<Vec<_>>().join(" ");

        (key, value)
    }

    /// Render the delimited header block
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(FRONTMATTER_DELIMITER);
        out.push('\n');

        for raw in &self.lines {
            let (key, value) = Self::split_entry(raw);
            out.push_str(&key);
            out.push(' ');
            out.push_str(&value);
            out.push('\n');
        }

        out.push_str(FRONTMATTER_DELIMITER);
        out.push('\n');
        out
    }
}
