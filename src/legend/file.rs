//! Legend files in TOML form
//!
//! A legend file carries the ordered entry list and an optional target
//! count, so the same symbol map can be stamped with different template
//! sets without touching the CSV.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::legend::table::{LegendConfig, LegendEntry, Template};

/// Errors that can occur when loading or parsing legend files
#[derive(Error, Debug)]
pub enum LegendFileError {
    #[error("Failed to read legend file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse legend TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One `[[entry]]` table: a key and the name of its template, if any
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileEntry {
    pub key: String,
    pub template: Option<String>,
}

/// A parsed legend file
#[derive(Debug, Clone)]
pub struct LegendFile {
    /// Optional name for the legend
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Target entry count, when the file asks for a resize
    pub count: Option<usize>,
    /// Entries in file order
    pub entries: Vec<FileEntry>,
}

/// TOML structure for deserializing legend files
#[derive(Deserialize)]
struct TomlLegend {
    count: Option<usize>,
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    entry: Vec<FileEntry>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl LegendFile {
    /// Load a legend from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LegendFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a legend from a TOML string
    pub fn from_str(content: &str) -> Result<Self, LegendFileError> {
        let parsed: TomlLegend = toml::from_str(content)?;

        Ok(LegendFile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            count: parsed.count,
            entries: parsed.entry,
        })
    }

    /// The entry count the file asks for, defaulting to the list length
    pub fn desired_count(&self) -> usize {
        self.count.unwrap_or(self.entries.len())
    }

    /// Convert into a legend config.
    ///
    /// Template names become templates with a unit handle, which is all
    /// a listing host needs.
    pub fn to_config(&self) -> LegendConfig<()> {
        let entries = self
            .entries
            .iter()
            .map(|entry| LegendEntry {
                key: entry.key.clone(),
                template: entry
                    .template
                    .as_ref()
                    .map(|name| Template::new(name.clone(), ())),
            })
            .collect();
        LegendConfig::new(self.desired_count(), entries)
    }
}
