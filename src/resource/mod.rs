use std::fs;
use std::path::Path;

use crate::TagresError;
use crate::ast::{File, Tag};
use crate::parser;

mod access;
mod conversion;

/// A parsed resource file plus the raw text it came from, kept for error
/// reporting. This is the convenience layer over [`File`] for callers that
/// want typed field access instead of walking the tree.
pub struct Resource {
    file: File,
    raw_content: String,
}

impl Resource {
    /// Read and parse a resource file from disk.
    ///
    /// # Example
    /// ```ignore
    /// let resource = Resource::from_file("scene.tres")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TagresError> {
        let content = fs::read_to_string(&path).map_err(|e| TagresError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str(&content)
    }

    /// Parse a resource document from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, TagresError> {
        let file = parser::parse(content)?;

        Ok(Self {
            file,
            raw_content: content.to_string(),
        })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn tags(&self) -> &[Tag] {
        &self.file.tags
    }

    /// Find a tag by identifier; a repeated identifier resolves to its last
    /// occurrence.
    pub fn tag(&self, identifier: &str) -> Option<&Tag> {
        self.file.tag(identifier)
    }

    pub fn tag_identifiers(&self) -> Vec<String> {
        self.file
            .tags
            .iter()
            .map(|t| t.identifier.clone())
            .collect()
    }

    pub fn has_tag(&self, identifier: &str) -> bool {
        self.file.tag(identifier).is_some()
    }
}

#[cfg(test)]
mod tests;
