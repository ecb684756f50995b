// ============================================================
// UPLOADED FILES
// ============================================================
// Values handed over by the UI collaborator when files are picked

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{AppError, Result};
use super::table::Table;

/// A file selected by the user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    name: String,
    size_bytes: u64,
    content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in kilobytes, as displayed next to the file name
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Final extension including the dot (`".csv"`), or `""` when absent.
    pub fn extension(&self) -> &str {
        file_extension(&self.name)
    }
}

/// Extension of `name` including the leading dot.
///
/// Dot-files such as `.csv` have no extension, matching how paths are split
/// elsewhere.
pub fn file_extension(name: &str) -> &str {
    let base = name.rsplit(&['/', '\\'][..]).next().unwrap_or(name);
    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx..],
    }
}

/// Replace the final extension of `name` with `new_ext` (which includes the
/// dot). Names without an extension get `new_ext` appended.
pub fn replace_extension(name: &str, new_ext: &str) -> String {
    let ext = file_extension(name);
    format!("{}{}", &name[..name.len() - ext.len()], new_ext)
}

/// Tabular formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    /// Detect the format from a file name. The match is case-sensitive:
    /// `data.CSV` is not accepted.
    pub fn detect(file_name: &str) -> Result<Self> {
        match file_extension(file_name) {
            ".csv" => Ok(SourceFormat::Csv),
            ".xlsx" => Ok(SourceFormat::Xlsx),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "CSV"),
            SourceFormat::Xlsx => write!(f, "Excel"),
        }
    }
}

/// A parsed table together with the metadata of the file it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedTable {
    pub file_name: String,
    pub size_bytes: u64,
    pub format: SourceFormat,
    pub table: Table,
}

impl LoadedTable {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}
