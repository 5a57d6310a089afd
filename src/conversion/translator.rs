/*!
 * Line translator: a single pass over the document lines.
 *
 * Each line is dispatched against an ordered rule list; the first rule that
 * matches decides what is emitted. The block mode carried between lines
 * changes only on explicit begin/end marker lines.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

use crate::conversion::frontmatter::{Frontmatter, METADATA_MARKER};
use crate::conversion::images::ImageRegistry;
use crate::conversion::inline::rewrite_inline;
use crate::errors::ConversionError;
use crate::file_utils::AssetSink;

const HEADING_MARKER: char = '*';
const SRC_BEGIN_MARKERS: [&str; 2] = ["#+BEGIN_SRC", "#+begin_src"];
const SRC_END_MARKERS: [&str; 2] = ["#+END_SRC", "#+end_src"];
const RESULTS_MARKER: &str = "#+RESULTS:";
const RESULT_CONTINUATION: char = ':';
const CODE_QUOTE: &str = "> ";
const FENCE: &str = "```";
const RESULT_FENCE_LANGUAGE: &str = "bash";

// @const: Double-bracket span treated as an image reference
static IMAGE_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\]]+)\]\]").unwrap()
});

/// Block mode carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    #[default]
    Plain,
    Code,
    Result,
}

/// Per-document parameters used when relocating images
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    pub year: &'a str,
    pub slug: &'a str,
    pub source_root: &'a Path,
}

/// Stateful translator for one document
pub struct LineTranslator<'a> {
    mode: BlockMode,
    heading_offset: usize,
    line_number: usize,
    body: String,
    frontmatter: Frontmatter,
    context: DocumentContext<'a>,
    registry: &'a mut ImageRegistry,
    sink: &'a mut dyn AssetSink,
}

impl<'a> LineTranslator<'a> {
    pub fn new(
        context: DocumentContext<'a>,
        registry: &'a mut ImageRegistry,
        sink: &'a mut dyn AssetSink,
    ) -> Self {
        Self {
            mode: BlockMode::Plain,
            heading_offset: 0,
            line_number: 0,
            body: String::new(),
            frontmatter: Frontmatter::new(),
            context,
            registry,
            sink,
        }
    }

    /// Extra heading depth added to every converted heading
    pub fn with_heading_offset(mut self, offset: usize) -> Self {
        self.heading_offset = offset;
        self
    }

    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the translator, returning the collected metadata and the body
    pub fn finish(self) -> (Frontmatter, String) {
        (self.frontmatter, self.body)
    }

    fn emit(&mut self, text: &str) {
        self.body.push_str(text);
        self.body.push('\n');
    }

    /// Translate one input line, appending its output to the body
    pub fn translate_line(&mut self, line: &str) -> Result<(), ConversionError> {
        self.line_number += 1;

        if line.starts_with(HEADING_MARKER) {
            let rest = line.trim_start_matches(HEADING_MARKER);
            let level = line.len() - rest.len() + self.heading_offset;
            let heading = format!("{}{}", "#".repeat(level), rest);
            self.emit(&heading);
        } else if SRC_BEGIN_MARKERS.iter().any(|m| line.starts_with(m)) {
            let language = line.split(' ').nth(1).ok_or_else(|| ConversionError::MissingLanguageTag {
                line_number: self.line_number,
                line: line.to_string(),
            })?;
            let fence = format!("{}{}", FENCE, language);
            self.emit(&fence);
            self.mode = BlockMode::Code;
        } else if SRC_END_MARKERS.iter().any(|m| line.starts_with(m)) {
            self.emit(FENCE);
            self.mode = BlockMode::Plain;
        } else if self.mode == BlockMode::Code {
            let quoted = format!("{}{}", CODE_QUOTE, line);
            self.emit(&quoted);
        } else if line.starts_with(RESULTS_MARKER) {
            let fence = format!("{}{}", FENCE, RESULT_FENCE_LANGUAGE);
            self.emit(&fence);
            self.mode = BlockMode::Result;
        } else if self.mode == BlockMode::Result {
            if line.starts_with(RESULT_CONTINUATION) {
                let value: String = line.chars().skip(2).collect();
                self.emit(&value);
            } else {
                // the closing line itself is dropped
                self.emit(FENCE);
                self.mode = BlockMode::Plain;
            }
        } else if line.starts_with(METADATA_MARKER) {
            self.frontmatter.push(line);
        } else if IMAGE_SPAN_REGEX.is_match(line) {
            let replaced = self.replace_images(line)?;
            self.emit(&replaced);
        } else {
            let rewritten = rewrite_inline(line);
            self.emit(&rewritten);
        }

        Ok(())
    }

    fn replace_images(&mut self, line: &str) -> Result<String, ConversionError> {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;

        for caps in IMAGE_SPAN_REGEX.captures_iter(line) {
            let span = caps.get(0).map_or(0..0, |m| m.range());
            let markup = self.register_image(&caps)?;
            out.push_str(&line[last..span.start]);
            out.push_str(&markup);
            last = span.end;
        }
        out.push_str(&line[last..]);

        Ok(out)
    }

    fn register_image(&mut self, caps: &Captures<'_>) -> Result<String, ConversionError> {
        let reference = caps.get(1).map_or("", |m| m.as_str());
        debug!("Line {}: image reference {:?}", self.line_number, reference);
        self.registry.register(
            reference,
            self.context.year,
            self.context.slug,
            self.context.source_root,
            &mut *self.sink,
        )
    }
}
