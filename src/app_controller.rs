use anyhow::{Result, Context};
use log::{info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::conversion::{DocumentConverter, ImageRegistry};
use crate::file_utils::{AssetSink, FileManager, FileSystemSink};
use crate::source_document::SourceDocument;

// @module: Application controller for batch conversion

/// Outcome of one batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// The source directory did not exist and nothing was done
    pub source_missing: bool,

    /// Written output files, in processing order
    pub outputs: Vec<PathBuf>,

    /// Images registered over the whole run
    pub images_registered: usize,
}

impl BatchReport {
    pub fn documents_converted(&self) -> usize {
        self.outputs.len()
    }
}

/// Main application controller for org to MDX conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert every source document, copying images on the local filesystem
    pub fn run(&self) -> Result<BatchReport> {
        let mut registry = ImageRegistry::new(self.config.asset_prefix.clone());
        self.run_with(&mut registry, FileSystemSink)
    }

    /// Convert every source document against an existing registry.
    ///
    /// The first failing document aborts the run; documents already written
    /// stay on disk.
    pub fn run_with<S: AssetSink>(&self, registry: &mut ImageRegistry, sink: S) -> Result<BatchReport> {
        let source_dir = Path::new(&self.config.source_dir);
        let output_dir = Path::new(&self.config.output_dir);

        if !FileManager::dir_exists(source_dir) {
            info!("Org directory does not exist, skipping.");
            return Ok(BatchReport {
                source_missing: true,
                ..BatchReport::default()
            });
        }

        FileManager::ensure_dir(output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

        let mut converter = DocumentConverter::new(registry, sink)
            .with_source_root(source_dir)
            .with_heading_offset(self.config.heading_offset);
        let mut report = BatchReport::default();

        for entry in FileManager::list_entries(source_dir)? {
            let file_name = entry
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            info!("Processing {}", file_name);

            if !FileManager::has_extension(&entry, &self.config.source_extension) {
                debug!("Skipping {:?}: not a .{} file", entry, self.config.source_extension);
                continue;
            }

            let document = SourceDocument::from_path(&entry)?;
            let content = FileManager::read_to_string(&document.path)?;

            let mdx = converter
                .convert(&content, &document.year, &document.slug)
                .with_context(|| format!("Failed to convert {:?}", document.path))?;

            let output_name = document.output_file_name(&self.config.target_extension);
            let output_path = output_dir.join(&output_name);
            FileManager::write_to_file(&output_path, &mdx)?;

            info!("Converted {} to {}", file_name, output_name);
            report.outputs.push(output_path);
        }

        report.images_registered = converter.registry().len();
        info!("Conversion complete. MDX file saved at: {}", self.config.output_dir);

        Ok(report)
    }
}
