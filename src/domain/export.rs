// ============================================================
// EXPORT TYPES
// ============================================================
// Conversion targets and the downloadable artifacts they produce

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use super::error::AppError;

pub const CSV_MIME_TYPE: &str = "text/csv";
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Format a table can be converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFormat {
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "Excel")]
    Excel,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 2] = [TargetFormat::Csv, TargetFormat::Excel];

    /// Extension given to the exported file, including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Csv => ".csv",
            TargetFormat::Excel => ".xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            TargetFormat::Csv => CSV_MIME_TYPE,
            TargetFormat::Excel => XLSX_MIME_TYPE,
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            TargetFormat::Csv => "CSV",
            TargetFormat::Excel => "Excel",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSV" => Ok(TargetFormat::Csv),
            "Excel" => Ok(TargetFormat::Excel),
            other => Err(AppError::MissingSelection(format!(
                "Unknown conversion type '{}', choose CSV or Excel",
                other
            ))),
        }
    }
}

/// The user's conversion choice for one file. The target may not have been
/// picked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub target_format: Option<TargetFormat>,
}

impl ConversionRequest {
    pub fn to(target: TargetFormat) -> Self {
        Self {
            target_format: Some(target),
        }
    }

    pub fn unselected() -> Self {
        Self::default()
    }
}

impl From<TargetFormat> for ConversionRequest {
    fn from(target: TargetFormat) -> Self {
        Self::to(target)
    }
}

/// Serialized table ready for download. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
    file_name: String,
    mime_type: String,
}

impl ExportArtifact {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reader positioned at the first byte, so one full read yields the
    /// whole artifact.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }
}
