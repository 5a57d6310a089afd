/*!
 * Document conversion: one org document in, one MDX document out.
 */

use log::debug;
use std::path::{Path, PathBuf};

use crate::conversion::images::ImageRegistry;
use crate::conversion::translator::{DocumentContext, LineTranslator};
use crate::errors::ConversionError;
use crate::file_utils::AssetSink;

/// Default directory image references are resolved against
pub const DEFAULT_SOURCE_ROOT: &str = "org";

/// Converts documents against a shared image registry
pub struct DocumentConverter<'r, S: AssetSink> {
    registry: &'r mut ImageRegistry,
    sink: S,
    source_root: PathBuf,
    heading_offset: usize,
}

impl<'r, S: AssetSink> DocumentConverter<'r, S> {
    pub fn new(registry: &'r mut ImageRegistry, sink: S) -> Self {
        Self {
            registry,
            sink,
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            heading_offset: 0,
        }
    }

    pub fn with_source_root<P: AsRef<Path>>(mut self, source_root: P) -> Self {
        self.source_root = source_root.as_ref().to_path_buf();
        self
    }

    pub fn with_heading_offset(mut self, heading_offset: usize) -> Self {
        self.heading_offset = heading_offset;
        self
    }

    pub fn registry(&self) -> &ImageRegistry {
        &*self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Convert one document.
    ///
    /// Output is the frontmatter block, then the imports of every image the
    /// registry holds, then the translated body.
    pub fn convert(&mut self, document: &str, year: &str, slug: &str) -> Result<String, ConversionError> {
        let context = DocumentContext {
            year,
            slug,
            source_root: &self.source_root,
        };

        let mut translator = LineTranslator::new(context, &mut *self.registry, &mut self.sink)
            .with_heading_offset(self.heading_offset);

        for line in document.split('\n') {
            translator.translate_line(line)?;
        }

        let (frontmatter, body) = translator.finish();
        debug!(
            "Converted {}/{}: {} metadata line(s), {} image(s) registered in run",
            year,
            slug,
            frontmatter.len(),
            self.registry.len()
        );

        let mut output = frontmatter.render();
        output.push_str(&self.registry.flush_imports());
        output.push_str(&body);
        Ok(output)
    }
}

/// Convert a single document with an explicit registry and sink
pub fn convert(
    document: &str,
    year: &str,
    slug: &str,
    source_root: &Path,
    registry: &mut ImageRegistry,
    sink: &mut dyn AssetSink,
) -> Result<String, ConversionError> {
    let mut converter = DocumentConverter::new(registry, sink).with_source_root(source_root);
    converter.convert(document, year, slug)
}
