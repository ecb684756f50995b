pub mod use_cases;

pub use use_cases::chart_summarizer::{summarize_for_chart, ChartSeries, ChartView};
pub use use_cases::column_projector::{all_columns, project_columns};
pub use use_cases::table_cleaner::{deduplicate, impute_numeric, ColumnFill, ImputationReport};
pub use use_cases::table_exporter::TableExporter;
pub use use_cases::table_loader::TableLoader;
