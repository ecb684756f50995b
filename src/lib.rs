pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use app::{bootstrap, init_logging};
pub use application::{
    all_columns, deduplicate, impute_numeric, project_columns, summarize_for_chart, ChartSeries,
    ChartView, ColumnFill, ImputationReport, TableExporter, TableLoader,
};
pub use domain::error::{AppError, Result};
pub use domain::export::{ConversionRequest, ExportArtifact, TargetFormat};
pub use domain::sweeper_config::SweeperConfig;
pub use domain::table::{Cell, Column, ColumnKind, Table};
pub use domain::upload::{LoadedTable, SourceFormat, UploadedFile};
pub use interfaces::{process_uploads, BatchReport, FileChoices, FileOutcome, FileSession};
