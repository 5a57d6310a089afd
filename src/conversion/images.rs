/*!
 * Image asset registry.
 *
 * A registry lives for a whole batch run. Identifiers are allocated from the
 * registry size, so they keep counting across documents, and every
 * document's import block lists all images registered so far.
 */

use log::debug;
use std::path::{Path, PathBuf};

use crate::errors::ConversionError;
use crate::file_utils::AssetSink;

/// Default root under which relocated images are placed
pub const DEFAULT_ASSET_PREFIX: &str = "src/images/posts";

/// One relocated image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Generated binding name, `Image<N>`
    pub identifier: String,
    /// Destination path `<prefix>/<year>/<slug>/<file name>`
    pub destination: String,
}

/// Shared, append-only list of relocated images
#[derive(Debug, Clone)]
pub struct ImageRegistry {
    asset_prefix: String,
    records: Vec<ImageRecord>,
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_PREFIX)
    }
}

impl ImageRegistry {
    pub fn new(asset_prefix: impl Into<String>) -> Self {
        Self {
            asset_prefix: asset_prefix.into().trim_end_matches('/').to_string(),
            records: Vec::new(),
        }
    }

    pub fn asset_prefix(&self) -> &str {
        &self.asset_prefix
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Directory the images of one document are copied into
    pub fn asset_dir(&self, year: &str, slug: &str) -> String {
        format!("{}/{}/{}", self.asset_prefix, year, slug)
    }

    /// Register an image reference and return its replacement markup.
    ///
    /// The referenced file is copied through `sink` before this returns.
    pub fn register(
        &mut self,
        reference: &str,
        year: &str,
        slug: &str,
        source_root: &Path,
        sink: &mut dyn AssetSink,
    ) -> Result<String, ConversionError> {
        let source_path: PathBuf = source_root.join(reference);
        let file_name = reference.rsplit('/').next().unwrap_or(reference);

        let asset_dir = self.asset_dir(year, slug);
        let destination = format!("{}/{}", asset_dir, file_name);
        let identifier = format!("Image{}", self.records.len());

        debug!("Image URL: {} {}", destination, identifier);

        self.records.push(ImageRecord {
            identifier: identifier.clone(),
            destination,
        });

        sink.copy_into_dir(&source_path, Path::new(&asset_dir))?;

        Ok(Self::component_markup(&identifier))
    }

    /// Embedded-image component referencing `identifier`
    pub fn component_markup(identifier: &str) -> String {
        format!(
            r#"<BlogImageWithContext src={{{{{}}}}} alt="" width="300" aspectRatio="16/9"/>"#,
            identifier
        )
    }

    /// Import declarations for every registered image, then a blank line
    pub fn flush_imports(&self) -> String {
        let mut imports = String::new();
        for record in &self.records {
            imports.push_str(&format!("import {} from {}\n", record.identifier, record.destination));
        }
        imports.push('\n');
        imports
    }
}
