use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors surfaced to the user inline, one file at a time.
///
/// None of these ends a session: the caller reports the error next to the
/// file it belongs to and moves on to the next file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    ParseError(String),
    MissingSelection(String),
    ExportError(String),
    ConfigError(String),
    IoError(String),
}

impl AppError {
    /// `MissingSelection` is shown as a warning, everything else as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::MissingSelection(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(ext) => write!(f, "Unsupported file type : {}", ext),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::MissingSelection(msg) => write!(f, "{}", msg),
            AppError::ExportError(msg) => write!(f, "Export error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_selection_is_warning() {
        assert!(AppError::MissingSelection("pick one".into()).is_warning());
        assert!(!AppError::ParseError("bad".into()).is_warning());
        assert!(!AppError::UnsupportedFormat(".txt".into()).is_warning());
    }

    #[test]
    fn test_display_names_extension() {
        let err = AppError::UnsupportedFormat(".txt".to_string());
        assert_eq!(err.to_string(), "Unsupported file type : .txt");
    }
}
