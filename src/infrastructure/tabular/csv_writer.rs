// ============================================================
// CSV WRITER
// ============================================================
// Serialize a table as UTF-8 CSV: header row, no index column

use csv::WriterBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

pub fn write_csv(table: &Table) -> Result<Vec<u8>> {
    if table.column_count() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .from_writer(Vec::new());

    let to_export = |e: csv::Error| AppError::ExportError(format!("Failed to write CSV: {}", e));

    writer.write_record(table.column_names()).map_err(to_export)?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(to_export)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::ExportError(format!("Failed to flush CSV buffer: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{Cell, Column};

    #[test]
    fn test_write_with_quoting_and_missing() {
        let table = Table::new(vec![
            Column::infer("name", vec![Cell::Text("Smith, J".into()), Cell::Text("Lee".into())]),
            Column::infer("v", vec![Cell::Number(15.0), Cell::Missing]),
        ])
        .unwrap();

        let bytes = write_csv(&table).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "name,v\n\"Smith, J\",15\nLee,\n"
        );
    }

    #[test]
    fn test_non_ascii_is_utf8() {
        let table = Table::new(vec![Column::infer("city", vec![Cell::Text("M\u{fc}nchen".into())])]).unwrap();
        let bytes = write_csv(&table).unwrap();
        assert_eq!(bytes, "city\nM\u{fc}nchen\n".as_bytes());
    }
}
