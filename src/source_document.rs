use std::path::{Path, PathBuf};

use crate::errors::ConversionError;

// @module: Source document discovery and file name parsing

/// Length of the `YYYY-MM-DD-` prefix that precedes the slug
const DATE_PREFIX_LEN: usize = 11;

// @struct: One source document and the parameters derived from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    // @field: Path of the source file
    pub path: PathBuf,

    // @field: File name without extension
    pub stem: String,

    // @field: Year token, first `-` separated part of the name
    pub year: String,

    // @field: Month token
    pub month: String,

    // @field: Day token
    pub day: String,

    // @field: Slug, the stem after the date prefix
    pub slug: String,
}

impl SourceDocument {
    /// Derive document parameters from a `<year>-<month>-<day>-<slug>.<ext>` file name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| ConversionError::InvalidFileName(path.display().to_string()))?;

        let mut parts = stem.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(month), Some(day)) => (year.to_string(), month.to_string(), day.to_string()),
            _ => return Err(ConversionError::InvalidFileName(stem.clone())),
        };

        let slug: String = stem.chars().skip(DATE_PREFIX_LEN).collect();

        Ok(Self {
            path: path.to_path_buf(),
            stem,
            year,
            month,
            day,
            slug,
        })
    }

    /// Name of the converted file, `<stem>.<extension>`
    pub fn output_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.stem, extension.trim_start_matches('.'))
    }
}
