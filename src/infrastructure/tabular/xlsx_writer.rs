// ============================================================
// XLSX WRITER
// ============================================================
// Serialize a table as a single-sheet workbook with a bold header row

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, Table};

fn to_export(err: XlsxError) -> AppError {
    AppError::ExportError(format!("Failed to write Excel workbook: {}", err))
}

pub fn write_xlsx(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_export)?;

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = ColNum::try_from(col_idx)
            .map_err(|_| AppError::ExportError(format!("Too many columns: {}", col_idx + 1)))?;

        worksheet
            .write_string_with_format(0, col, column.name(), &header_format)
            .map_err(to_export)?;

        for (row_idx, cell) in column.cells().iter().enumerate() {
            let row = RowNum::try_from(row_idx + 1)
                .map_err(|_| AppError::ExportError(format!("Too many rows: {}", row_idx + 1)))?;

            match cell {
                // A worksheet <v> element cannot hold inf or NaN
                Cell::Number(value) if !value.is_finite() => {
                    worksheet.write_string(row, col, cell.to_string()).map_err(to_export)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row, col, *value).map_err(to_export)?;
                }
                Cell::Text(value) => {
                    worksheet.write_string(row, col, value).map_err(to_export)?;
                }
                Cell::Missing => {}
            }
        }
    }

    workbook.save_to_buffer().map_err(to_export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sweeper_config::SweeperConfig;
    use crate::domain::table::Column;
    use crate::infrastructure::tabular::XlsxReader;

    #[test]
    fn test_written_workbook_reads_back() {
        let table = Table::new(vec![
            Column::infer("k", vec![Cell::Text("a".into()), Cell::Text("b".into())]),
            Column::infer("v", vec![Cell::Number(1.0), Cell::Missing]),
        ])
        .unwrap();

        let bytes = write_xlsx(&table, "Sheet1").unwrap();
        assert!(bytes.starts_with(b"PK"));

        let config = SweeperConfig::default();
        let reloaded = XlsxReader::new(&config).parse_bytes(&bytes).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_non_finite_numbers_written_as_text() {
        use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
        use std::io::Cursor;

        let table = Table::new(vec![Column::infer(
            "v",
            vec![
                Cell::Number(f64::INFINITY),
                Cell::Number(f64::NEG_INFINITY),
                Cell::Number(1.0),
            ],
        )])
        .unwrap();

        let bytes = write_xlsx(&table, "Sheet1").unwrap();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.clone())).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("inf".into())));
        assert_eq!(range.get_value((2, 0)), Some(&Data::String("-inf".into())));
        assert_eq!(range.get_value((3, 0)), Some(&Data::Float(1.0)));

        let config = SweeperConfig::default();
        let reloaded = XlsxReader::new(&config).parse_bytes(&bytes).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_invalid_sheet_name() {
        let table = Table::new(Vec::new()).unwrap();
        assert!(matches!(
            write_xlsx(&table, "bad/name"),
            Err(AppError::ExportError(_))
        ));
    }
}
