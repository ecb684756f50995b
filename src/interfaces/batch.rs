//! Sequential processing of a batch of uploads
//!
//! Runs each file through load, cleaning, projection, chart and export
//! according to the choices the collaborator supplies for it. A failing
//! file is recorded and skipped; the rest of the batch continues.

use serde::Serialize;
use tracing::{info, warn};

use super::session::FileSession;
use crate::application::{ChartView, ImputationReport};
use crate::domain::error::AppError;
use crate::domain::export::{ConversionRequest, ExportArtifact};
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;
use crate::domain::upload::UploadedFile;

pub const BATCH_DONE_MESSAGE: &str = "All Files Processed!";

/// User choices for one file. Every step is off by default.
#[derive(Debug, Clone, Default)]
pub struct FileChoices {
    pub deduplicate: bool,
    pub impute_numeric: bool,
    /// Columns to keep; `None` keeps all of them
    pub columns: Option<Vec<String>>,
    pub show_chart: bool,
    /// Set when the user pressed convert, with whatever target they picked
    pub export: Option<ConversionRequest>,
}

/// Everything produced for one successfully loaded file
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedFile {
    pub file_name: String,
    pub size_kb: f64,
    pub preview: Table,
    pub rows_removed: Option<usize>,
    pub imputation: Option<ImputationReport>,
    pub columns: Vec<String>,
    pub chart: Option<ChartView>,
    #[serde(skip)]
    pub artifact: Option<ExportArtifact>,
    /// Export problem shown inline; the file still counts as processed
    pub export_error: Option<AppError>,
}

#[derive(Debug, Clone, Serialize)]
pub enum FileOutcome {
    Processed(Box<ProcessedFile>),
    Skipped { file_name: String, error: AppError },
}

impl FileOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            FileOutcome::Processed(file) => &file.file_name,
            FileOutcome::Skipped { file_name, .. } => file_name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> impl Iterator<Item = &ProcessedFile> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Processed(file) => Some(file.as_ref()),
            FileOutcome::Skipped { .. } => None,
        })
    }

    pub fn processed_count(&self) -> usize {
        self.processed().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    pub fn summary(&self) -> &'static str {
        BATCH_DONE_MESSAGE
    }
}

/// Process `files` one after another.
///
/// `choices` is asked once per loaded file and may look at the session, for
/// example to offer the file's column names.
pub fn process_uploads<F>(
    files: &[UploadedFile],
    config: &SweeperConfig,
    mut choices: F,
) -> BatchReport
where
    F: FnMut(&FileSession) -> FileChoices,
{
    let mut report = BatchReport::default();

    for file in files {
        let mut session = match FileSession::load_table(file, config) {
            Ok(session) => session,
            Err(error) => {
                report.outcomes.push(FileOutcome::Skipped {
                    file_name: file.name().to_string(),
                    error,
                });
                continue;
            }
        };

        let choice = choices(&session);
        let outcome = run_choices(&mut session, choice);
        report.outcomes.push(FileOutcome::Processed(Box::new(outcome)));
    }

    info!(
        processed = report.processed_count(),
        skipped = report.skipped_count(),
        "{}",
        BATCH_DONE_MESSAGE
    );
    report
}

fn run_choices(session: &mut FileSession, choice: FileChoices) -> ProcessedFile {
    let preview = session.preview();

    let rows_removed = choice.deduplicate.then(|| session.deduplicate());
    let imputation = choice.impute_numeric.then(|| session.impute_numeric());

    let columns = match &choice.columns {
        Some(names) => session
            .project_columns(names.as_slice())
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => session.column_names(),
    };

    let chart = choice.show_chart.then(|| session.summarize_for_chart());

    let (artifact, export_error) = match choice.export {
        Some(request) => match session.export(request) {
            Ok(artifact) => (Some(artifact), None),
            Err(error) => {
                warn!(file = session.file_name(), error = %error, "Export aborted");
                (None, Some(error))
            }
        },
        None => (None, None),
    };

    ProcessedFile {
        file_name: session.file_name().to_string(),
        size_kb: session.size_kb(),
        preview,
        rows_removed,
        imputation,
        columns,
        chart,
        artifact,
        export_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::TargetFormat;

    fn uploads() -> Vec<UploadedFile> {
        vec![
            UploadedFile::new("notes.txt", b"hello".to_vec()),
            UploadedFile::new("sales.csv", b"k,v,w\na,1,x\na,1,x\nb,,y\n".to_vec()),
        ]
    }

    #[test]
    fn test_bad_file_does_not_stop_batch() {
        let report = process_uploads(&uploads(), &SweeperConfig::default(), |_| FileChoices::default());

        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.processed_count(), 1);
        assert_eq!(report.outcomes[0].file_name(), "notes.txt");
        assert!(matches!(
            &report.outcomes[0],
            FileOutcome::Skipped { error: AppError::UnsupportedFormat(_), .. }
        ));
        assert_eq!(report.summary(), "All Files Processed!");
    }

    #[test]
    fn test_full_pipeline() {
        let report = process_uploads(&uploads(), &SweeperConfig::default(), |session| {
            assert_eq!(session.column_names(), vec!["k", "v", "w"]);
            FileChoices {
                deduplicate: true,
                impute_numeric: true,
                columns: Some(vec!["v".to_string(), "k".to_string()]),
                show_chart: true,
                export: Some(ConversionRequest::to(TargetFormat::Csv)),
            }
        });

        let file = report.processed().next().unwrap();
        assert_eq!(file.rows_removed, Some(1));
        assert_eq!(file.imputation.as_ref().unwrap().total_cells(), 1);
        assert_eq!(file.columns, vec!["k", "v"]);
        assert_eq!(file.chart.as_ref().unwrap().series.len(), 1);

        let artifact = file.artifact.as_ref().unwrap();
        assert_eq!(artifact.file_name(), "sales.csv");
        assert_eq!(artifact.bytes(), b"k,v\na,1\nb,1\n");
    }

    #[test]
    fn test_missing_selection_keeps_file_processed() {
        let files = vec![UploadedFile::new("a.csv", b"x\n1\n".to_vec())];
        let report = process_uploads(&files, &SweeperConfig::default(), |_| FileChoices {
            export: Some(ConversionRequest::unselected()),
            ..FileChoices::default()
        });

        let file = report.processed().next().unwrap();
        assert!(file.artifact.is_none());
        assert!(file.export_error.as_ref().unwrap().is_warning());
    }
}
