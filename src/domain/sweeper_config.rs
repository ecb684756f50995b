// ============================================================
// SWEEPER CONFIGURATION
// ============================================================
// Tunables for loading, previewing, charting and exporting tables

use serde::{Deserialize, Serialize};

/// Cell texts read as missing values, the same set dataframe readers use
pub const DEFAULT_MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Encoding labels that mean true ISO-8859-1, where every byte maps to the
/// code point of the same value. `encoding_rs` resolves these to windows-1252.
pub const LATIN1_LABELS: &[&str] = &[
    "cp819",
    "csisolatin1",
    "ibm819",
    "iso-8859-1",
    "iso-ir-100",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "l1",
    "latin-1",
    "latin1",
];

/// Whether `label` names ISO-8859-1, ignoring case and surrounding spaces
pub fn is_latin1_label(label: &str) -> bool {
    let normalized = label.trim().to_ascii_lowercase();
    LATIN1_LABELS.contains(&normalized.as_str())
}

/// Configuration for the data sweeper core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweeperConfig {
    /// Rows shown by `preview_head` when no count is given (default: 5)
    pub preview_rows: usize,

    /// Maximum numeric columns in the chart view (default: 2)
    pub chart_max_columns: usize,

    /// Label of the encoding CSV bytes are decoded with (default: ISO-8859-1).
    /// A single-byte encoding never fails to decode.
    pub csv_input_encoding: String,

    /// Cell texts treated as missing, matched against the whole cell
    pub missing_tokens: Vec<String>,

    /// Worksheet name of exported workbooks (default: Sheet1)
    pub excel_sheet_name: String,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            chart_max_columns: 2,
            csv_input_encoding: "ISO-8859-1".to_string(),
            missing_tokens: DEFAULT_MISSING_TOKENS.iter().map(|s| s.to_string()).collect(),
            excel_sheet_name: "Sheet1".to_string(),
        }
    }
}

impl SweeperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `value` is exactly one of the missing tokens
    pub fn is_missing_token(&self, value: &str) -> bool {
        self.missing_tokens.iter().any(|t| t == value)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.chart_max_columns == 0 {
            return Err("chart_max_columns must be > 0".to_string());
        }
        let label = &self.csv_input_encoding;
        if !is_latin1_label(label) && encoding_rs::Encoding::for_label(label.trim().as_bytes()).is_none() {
            return Err(format!(
                "csv_input_encoding '{}' is not a known encoding label",
                self.csv_input_encoding
            ));
        }
        // Excel limits sheet names to 31 characters and forbids []:*?/\
        let name = &self.excel_sheet_name;
        if name.is_empty() || name.chars().count() > 31 {
            return Err("excel_sheet_name must be 1 to 31 characters".to_string());
        }
        if name.contains(&['[', ']', ':', '*', '?', '/', '\\'][..]) {
            return Err(format!("excel_sheet_name '{}' has forbidden characters", name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SweeperConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_encoding() {
        let config = SweeperConfig {
            csv_input_encoding: "klingon".to_string(),
            ..SweeperConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_sheet_name() {
        let config = SweeperConfig {
            excel_sheet_name: "a/b".to_string(),
            ..SweeperConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_tokens_match_whole_cell() {
        let config = SweeperConfig::default();
        assert!(config.is_missing_token("NA"));
        assert!(config.is_missing_token(""));
        assert!(!config.is_missing_token(" NA "));
        assert!(!config.is_missing_token(" "));
        assert!(!config.is_missing_token("0"));
    }

    #[test]
    fn test_accepts_every_latin1_label() {
        for label in LATIN1_LABELS.iter().chain(&["Latin-1", " ISO-8859-1 "]) {
            let config = SweeperConfig {
                csv_input_encoding: label.to_string(),
                ..SweeperConfig::default()
            };
            assert!(config.validate().is_ok(), "{} should be valid", label);
            assert!(is_latin1_label(label));
        }
        assert!(!is_latin1_label("windows-1252"));
    }
}
