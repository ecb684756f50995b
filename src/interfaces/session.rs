//! Per-file session
//!
//! The UI collaborator keeps one `FileSession` per uploaded file and calls
//! these methods in response to user input. Nothing here knows about
//! widgets; each call is one synchronous pass over this file's table.

use crate::application::{
    all_columns, deduplicate, impute_numeric, project_columns, summarize_for_chart, ChartView,
    ImputationReport, TableExporter, TableLoader,
};
use crate::domain::error::Result;
use crate::domain::export::{ConversionRequest, ExportArtifact};
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;
use crate::domain::upload::{LoadedTable, SourceFormat, UploadedFile};

pub struct FileSession {
    config: SweeperConfig,
    loaded: LoadedTable,
    /// Loaded table plus any cleaning applied so far, all columns
    working: Table,
    /// Chosen columns; `None` means all of them
    selection: Option<Vec<String>>,
}

impl FileSession {
    /// Load `file` into a new session.
    pub fn load_table(file: &UploadedFile, config: &SweeperConfig) -> Result<Self> {
        let loaded = TableLoader::new(config.clone()).load(file)?;
        Ok(Self {
            config: config.clone(),
            working: loaded.table.clone(),
            loaded,
            selection: None,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.loaded.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.loaded.size_bytes
    }

    pub fn size_kb(&self) -> f64 {
        self.loaded.size_kb()
    }

    pub fn format(&self) -> SourceFormat {
        self.loaded.format
    }

    /// The table exactly as loaded
    pub fn original(&self) -> &Table {
        &self.loaded.table
    }

    /// Every column of the working table, the default selection
    pub fn column_names(&self) -> Vec<String> {
        all_columns(&self.working)
    }

    /// First `n` rows of the current table
    pub fn preview_head(&self, n: usize) -> Table {
        self.current().head(n)
    }

    /// Preview with the configured row count
    pub fn preview(&self) -> Table {
        self.preview_head(self.config.preview_rows)
    }

    pub fn deduplicate(&mut self) -> usize {
        deduplicate(&mut self.working)
    }

    pub fn impute_numeric(&mut self) -> ImputationReport {
        impute_numeric(&mut self.working)
    }

    /// Choose the columns kept for charting and export, and return the
    /// projected table. Choosing again starts from the full column set.
    pub fn project_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Table {
        self.selection = Some(names.iter().map(|n| n.as_ref().to_string()).collect());
        self.current()
    }

    /// Current table: cleaned, then projected to the selection
    pub fn current(&self) -> Table {
        match &self.selection {
            Some(names) => project_columns(&self.working, names.as_slice()),
            None => self.working.clone(),
        }
    }

    pub fn summarize_for_chart(&self) -> ChartView {
        summarize_for_chart(&self.current(), self.config.chart_max_columns)
    }

    pub fn export(&self, request: ConversionRequest) -> Result<ExportArtifact> {
        TableExporter::new(self.config.clone()).export(&self.current(), self.file_name(), request)
    }
}
