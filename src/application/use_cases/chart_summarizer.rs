// ============================================================
// CHART SUMMARIZER USE CASE
// ============================================================
// Reduce a table to the few numeric series a simple bar chart shows

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::table::{Cell, Table};

/// One chart series; `None` marks a missing cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub series: Vec<ChartSeries>,
    pub row_count: usize,
}

impl ChartView {
    /// True when the table had no numeric column. The UI shows
    /// "nothing to chart" in that case.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Take the first `max_columns` numeric columns, in table order.
pub fn summarize_for_chart(table: &Table, max_columns: usize) -> ChartView {
    let series: Vec<ChartSeries> = table
        .columns()
        .iter()
        .filter(|c| c.is_numeric())
        .take(max_columns)
        .map(|column| ChartSeries {
            name: column.name().to_string(),
            values: column.cells().iter().map(Cell::as_number).collect(),
        })
        .collect();

    debug!(series = series.len(), rows = table.row_count(), "Chart view built");

    ChartView {
        series,
        row_count: table.row_count(),
    }
}
