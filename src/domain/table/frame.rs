use serde::{Deserialize, Serialize};

use super::{Cell, Column};
use crate::domain::error::{AppError, Result};

/// In-memory table: ordered named columns with a uniform row count.
///
/// The row count is stored explicitly so a table projected down to zero
/// columns still reports how many rows it had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl TryFrom<RawTable> for Table {
    type Error = AppError;

    fn try_from(raw: RawTable) -> Result<Self> {
        Self::with_row_count(raw.columns, raw.row_count)
    }
}

impl Table {
    /// Build a table, checking that every column has the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        Self::with_row_count(columns, row_count)
    }

    /// Build a table with a known row count, which may be non-zero even
    /// when there are no columns.
    pub fn with_row_count(columns: Vec<Column>, row_count: usize) -> Result<Self> {
        if let Some(column) = columns.iter().find(|c| c.len() != row_count) {
            return Err(AppError::ParseError(format!(
                "Column '{}' has {} rows, expected {}",
                column.name(),
                column.len(),
                row_count
            )));
        }
        Ok(Self { columns, row_count })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    /// Cells of row `index`, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells()[index]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.row_count).map(move |i| self.columns.iter().map(|c| &c.cells()[i]).collect())
    }

    /// First `n` rows as a new table
    pub fn head(&self, n: usize) -> Table {
        let rows = n.min(self.row_count);
        Table {
            columns: self.columns.iter().map(|c| c.truncated(rows)).collect(),
            row_count: rows,
        }
    }

    /// Drop every row whose flag is unset. `keep` has one flag per row.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            column.retain_rows(keep);
        }
        self.row_count = keep.iter().filter(|k| **k).count();
    }

    /// Clone the columns accepted by `keep`, preserving order and row count.
    pub(crate) fn select<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Column) -> bool,
    {
        Table {
            columns: self.columns.iter().filter(|c| keep(*c)).cloned().collect(),
            row_count: self.row_count,
        }
    }
}
