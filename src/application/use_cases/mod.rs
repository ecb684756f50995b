pub mod chart_summarizer;
pub mod column_projector;
pub mod table_cleaner;
pub mod table_exporter;
pub mod table_loader;
