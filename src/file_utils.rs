use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ConversionError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// List the entries directly inside a directory, sorted by file name.
    ///
    /// Subdirectories are not descended into.
    pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            result.push(entry.into_path());
        }

        Ok(result)
    }

    /// Check whether a path carries exactly the given extension (leading dot optional)
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        let wanted = extension.trim_start_matches('.');
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == wanted)
    }

    /// Read a text file, turning `\r\n` and lone `\r` line endings into `\n`
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;

        Ok(normalize_line_endings(content))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Copy a file from one location to another, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(anyhow::anyhow!("Source file does not exist: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to)
            .with_context(|| format!("Failed to copy {:?} to {:?}", from, to))?;

        Ok(())
    }

    /// Copy a file into a directory, keeping its file name
    pub fn copy_into_dir<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, dest_dir: P2) -> Result<PathBuf> {
        let from = from.as_ref();
        let file_name = from
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Path has no file name: {:?}", from))?;
        let target = dest_dir.as_ref().join(file_name);

        Self::ensure_dir(dest_dir.as_ref())?;
        Self::copy_file(from, &target)?;

        Ok(target)
    }
}

fn normalize_line_endings(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Destination for image assets discovered during conversion.
///
/// Conversion calls this eagerly, once per registered image, before the
/// document output is assembled.
pub trait AssetSink {
    /// Copy `source` into `dest_dir`, creating the directory if needed
    fn copy_into_dir(&mut self, source: &Path, dest_dir: &Path) -> Result<(), ConversionError>;
}

impl<T: AssetSink + ?Sized> AssetSink for &mut T {
    fn copy_into_dir(&mut self, source: &Path, dest_dir: &Path) -> Result<(), ConversionError> {
        (**self).copy_into_dir(source, dest_dir)
    }
}

/// Asset sink that copies files on the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemSink;

impl AssetSink for FileSystemSink {
    fn copy_into_dir(&mut self, source: &Path, dest_dir: &Path) -> Result<(), ConversionError> {
        FileManager::copy_into_dir(source, dest_dir)
            .map(|_| ())
            .map_err(|e| ConversionError::AssetCopy {
                source_path: source.to_path_buf(),
                dest_dir: dest_dir.to_path_buf(),
                message: format!("{:#}", e),
            })
    }
}

/// Asset sink that only records the requested copies
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// `(source, dest_dir)` pairs in request order
    pub copies: Vec<(PathBuf, PathBuf)>,
}

impl AssetSink for RecordingSink {
    fn copy_into_dir(&mut self, source: &Path, dest_dir: &Path) -> Result<(), ConversionError> {
        self.copies.push((source.to_path_buf(), dest_dir.to_path_buf()));
        Ok(())
    }
}
