// ============================================================
// TABLE LOADER USE CASE
// ============================================================
// Detect an upload's format and parse it into a table

use std::time::Instant;

use tracing::{info, warn};

use crate::domain::error::Result;
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;
use crate::domain::upload::{LoadedTable, SourceFormat, UploadedFile};
use crate::infrastructure::tabular::{CsvReader, XlsxReader};

pub struct TableLoader {
    config: SweeperConfig,
}

impl TableLoader {
    pub fn new(config: SweeperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SweeperConfig {
        &self.config
    }

    /// Load one uploaded file.
    ///
    /// Fails with `UnsupportedFormat` for anything but `.csv`/`.xlsx` and with
    /// `ParseError` for malformed content. Either way only this file is
    /// affected.
    pub fn load(&self, file: &UploadedFile) -> Result<LoadedTable> {
        let start = Instant::now();

        let format = SourceFormat::detect(file.name()).map_err(|e| {
            warn!(file = file.name(), error = %e, "Skipping file");
            e
        })?;

        let table = self.parse(format, file.content()).map_err(|e| {
            warn!(file = file.name(), %format, error = %e, "Failed to load table");
            e
        })?;

        info!(
            file = file.name(),
            %format,
            size_kb = file.size_kb(),
            rows = table.row_count(),
            columns = table.column_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded table"
        );

        Ok(LoadedTable {
            file_name: file.name().to_string(),
            size_bytes: file.size_bytes(),
            format,
            table,
        })
    }

    fn parse(&self, format: SourceFormat, content: &[u8]) -> Result<Table> {
        match format {
            SourceFormat::Csv => CsvReader::new(&self.config).parse_bytes(content),
            SourceFormat::Xlsx => XlsxReader::new(&self.config).parse_bytes(content),
        }
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(SweeperConfig::default())
    }
}
