// ============================================================
// XLSX READER
// ============================================================
// Read the first worksheet of an uploaded workbook into a typed table

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};

use super::inference::{normalize_headers, ColumnBuilder};
use crate::domain::error::{AppError, Result};
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;

pub struct XlsxReader<'c> {
    config: &'c SweeperConfig,
}

impl<'c> XlsxReader<'c> {
    pub fn new(config: &'c SweeperConfig) -> Self {
        Self { config }
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

        self.parse_range(&range)
    }

    /// First row is the header, the rest are data rows
    fn parse_range(&self, range: &Range<Data>) -> Result<Table> {
        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => return Table::new(Vec::new()),
        };

        let names = normalize_headers(header_row.iter().map(header_text));
        let mut builders: Vec<ColumnBuilder> = names
            .iter()
            .map(|name| ColumnBuilder::new(name.as_str(), self.config))
            .collect();

        let mut row_count = 0;
        for row in rows {
            for (builder, cell) in builders.iter_mut().zip(row.iter()) {
                match cell {
                    Data::Empty | Data::Error(_) => builder.push_missing(),
                    Data::Float(value) => builder.push_number(*value),
                    Data::Int(value) => builder.push_number(*value as f64),
                    Data::String(value) => builder.push_text(value),
                    other => builder.push_literal(other.to_string()),
                }
            }
            row_count += 1;
        }

        let columns = builders.into_iter().map(ColumnBuilder::finish).collect();
        Table::with_row_count(columns, row_count)
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{Cell, ColumnKind};
    use rust_xlsxwriter::Workbook;

    fn workbook_bytes() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "name").unwrap();
        sheet.write_string(0, 1, "score").unwrap();
        sheet.write_string(1, 0, "ann").unwrap();
        sheet.write_number(1, 1, 3.5).unwrap();
        sheet.write_string(2, 0, "bob").unwrap();
        sheet.write_string(2, 1, "NA").unwrap();
        sheet.write_string(3, 0, "cy").unwrap();
        sheet.write_number(3, 1, 1.0).unwrap();
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_parse_first_sheet() {
        let config = SweeperConfig::default();
        let table = XlsxReader::new(&config).parse_bytes(&workbook_bytes()).unwrap();

        assert_eq!(table.column_names(), vec!["name", "score"]);
        assert_eq!(table.row_count(), 3);
        let score = table.column("score").unwrap();
        assert_eq!(score.kind(), ColumnKind::Numeric);
        assert_eq!(score.cells(), &[Cell::Number(3.5), Cell::Missing, Cell::Number(1.0)]);
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let config = SweeperConfig::default();
        let result = XlsxReader::new(&config).parse_bytes(b"not a zip archive");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
