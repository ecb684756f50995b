use serde::{Deserialize, Serialize};

use super::Cell;
use crate::domain::error::AppError;

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Every non-missing cell is a number. A column with no values at all is
    /// also numeric.
    Numeric,

    /// At least one value is not a number; all values are kept as text.
    Text,
}

/// A named column of cells sharing one inferred kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumn")]
pub struct Column {
    name: String,
    kind: ColumnKind,
    cells: Vec<Cell>,
}

/// Wire form of a column, checked before it becomes a `Column`
#[derive(Deserialize)]
struct RawColumn {
    name: String,
    kind: ColumnKind,
    cells: Vec<Cell>,
}

impl TryFrom<RawColumn> for Column {
    type Error = AppError;

    fn try_from(raw: RawColumn) -> Result<Self, Self::Error> {
        let stray = match raw.kind {
            ColumnKind::Numeric => raw.cells.iter().position(|c| matches!(c, Cell::Text(_))),
            ColumnKind::Text => raw.cells.iter().position(|c| matches!(c, Cell::Number(_))),
        };
        if let Some(row) = stray {
            return Err(AppError::ParseError(format!(
                "Column '{}' is {:?} but row {} holds {:?}",
                raw.name, raw.kind, row, raw.cells[row]
            )));
        }
        Ok(Self {
            name: raw.name,
            kind: raw.kind,
            cells: raw.cells,
        })
    }
}

impl Column {
    /// Build a text column. Number cells are converted to their text form.
    pub fn text(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        let cells = cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Number(value) => Cell::Text(Cell::Number(value).to_string()),
                other => other,
            })
            .collect();

        Self {
            name: name.into(),
            kind: ColumnKind::Text,
            cells,
        }
    }

    /// Pick the kind from the cells: numeric unless any text is present.
    pub fn infer(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        let name = name.into();
        if cells.iter().any(|c| matches!(c, Cell::Text(_))) {
            Self::text(name, cells)
        } else {
            Self {
                name,
                kind: ColumnKind::Numeric,
                cells,
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Mean of the non-missing numeric values, `None` when there are none.
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .cells
            .iter()
            .filter_map(Cell::as_number)
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Replace every missing cell with `value`, returning how many changed.
    /// Only numeric columns are touched.
    pub(crate) fn fill_missing(&mut self, value: f64) -> usize {
        if !self.is_numeric() {
            return 0;
        }
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_missing()) {
            *cell = Cell::Number(value);
            filled += 1;
        }
        filled
    }

    /// Keep only the cells whose flag in `keep` is set.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.cells.retain(|_| flags.next().copied().unwrap_or(false));
    }

    pub(crate) fn truncated(&self, rows: usize) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            cells: self.cells.iter().take(rows).cloned().collect(),
        }
    }
}
