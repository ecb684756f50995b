// ============================================================
// TABLE CLEANER USE CASE
// ============================================================
// Optional in-place fixes: duplicate rows and numeric gaps

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::table::{CellKey, Table};

/// Fill applied to one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFill {
    pub column: String,
    /// Mean of the column's values before any cell was filled
    pub value: f64,
    pub cells: usize,
}

/// What `impute_numeric` changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImputationReport {
    pub filled: Vec<ColumnFill>,
}

impl ImputationReport {
    pub fn total_cells(&self) -> usize {
        self.filled.iter().map(|f| f.cells).sum()
    }

    pub fn is_noop(&self) -> bool {
        self.filled.is_empty()
    }
}

/// Remove rows equal to an earlier row across all columns. The first
/// occurrence is kept and the order of kept rows is unchanged.
///
/// Returns how many rows were removed.
pub fn deduplicate(table: &mut Table) -> usize {
    if table.column_count() == 0 {
        return 0;
    }

    let keep: Vec<bool> = {
        let mut seen = HashSet::new();
        table
            .rows()
            .map(|row| seen.insert(row.into_iter().map(CellKey::from).collect::<Vec<_>>()))
            .collect()
    };

    let removed = keep.iter().filter(|k| !**k).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }

    info!(removed, remaining = table.row_count(), "Duplicates removed");
    removed
}

/// Replace missing cells in every numeric column with that column's mean.
///
/// Each mean is taken over the values present before the fill starts. A
/// column with no values at all is left as is. Text columns are never touched.
pub fn impute_numeric(table: &mut Table) -> ImputationReport {
    let mut report = ImputationReport::default();

    for column in table.columns_mut().iter_mut().filter(|c| c.is_numeric()) {
        if column.missing_count() == 0 {
            continue;
        }
        let Some(mean) = column.mean() else {
            debug!(column = column.name(), "No values to average, leaving column missing");
            continue;
        };
        let cells = column.fill_missing(mean);
        report.filled.push(ColumnFill {
            column: column.name().to_string(),
            value: mean,
            cells,
        });
    }

    info!(
        columns = report.filled.len(),
        cells = report.total_cells(),
        "Missing values filled"
    );
    report
}
