// ============================================================
// TABLE EXPORTER USE CASE
// ============================================================
// Serialize a table into a downloadable CSV or Excel artifact

use tracing::{info, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::export::{ConversionRequest, ExportArtifact, TargetFormat};
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;
use crate::domain::upload::replace_extension;
use crate::infrastructure::tabular::{write_csv, write_xlsx};

pub struct TableExporter {
    config: SweeperConfig,
}

impl TableExporter {
    pub fn new(config: SweeperConfig) -> Self {
        Self { config }
    }

    /// Export `table`, naming the artifact after `source_name` with its
    /// extension swapped for the target's.
    ///
    /// Without a selected target this fails with `MissingSelection` and
    /// produces nothing.
    pub fn export(
        &self,
        table: &Table,
        source_name: &str,
        request: ConversionRequest,
    ) -> Result<ExportArtifact> {
        let target = request.target_format.ok_or_else(|| {
            warn!(file = source_name, "Export requested without a conversion type");
            AppError::MissingSelection(
                "Please select a conversion type before converting.".to_string(),
            )
        })?;

        let bytes = match target {
            TargetFormat::Csv => write_csv(table)?,
            TargetFormat::Excel => write_xlsx(table, &self.config.excel_sheet_name)?,
        };

        let artifact = ExportArtifact::new(
            bytes,
            replace_extension(source_name, target.extension()),
            target.mime_type(),
        );

        info!(
            file = source_name,
            target = %target,
            artifact = artifact.file_name(),
            bytes = artifact.len(),
            "Export ready"
        );
        Ok(artifact)
    }
}

impl Default for TableExporter {
    fn default() -> Self {
        Self::new(SweeperConfig::default())
    }
}
