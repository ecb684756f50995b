// ============================================================
// CSV READER
// ============================================================
// Parse uploaded CSV bytes into a typed table

use csv::{ReaderBuilder, Trim};

use super::decoding::decode_text;
use super::inference::{normalize_headers, ColumnBuilder};
use crate::domain::error::{AppError, Result};
use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::Table;

/// CSV reader with a fixed input encoding
pub struct CsvReader<'c> {
    /// Delimiter character (default: comma)
    delimiter: u8,

    config: &'c SweeperConfig,
}

impl<'c> CsvReader<'c> {
    pub fn new(config: &'c SweeperConfig) -> Self {
        Self {
            delimiter: b',',
            config,
        }
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Decode with the configured encoding, then parse
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let content = decode_text(bytes, &self.config.csv_input_encoding)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        if headers.is_empty() {
            return Err(AppError::ParseError(
                "No columns to parse from file".to_string(),
            ));
        }

        let names = normalize_headers(headers.iter());
        let mut builders: Vec<ColumnBuilder> = names
            .iter()
            .map(|name| ColumnBuilder::new(name.as_str(), self.config))
            .collect();

        let mut row_count = 0;
        for result in reader.records() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", row_count + 1, e))
            })?;

            if record.len() > builders.len() {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(AppError::ParseError(format!(
                    "Error tokenizing data. Expected {} fields in line {}, saw {}",
                    builders.len(),
                    line,
                    record.len()
                )));
            }

            // Short records are padded with missing cells
            for (idx, builder) in builders.iter_mut().enumerate() {
                match record.get(idx) {
                    Some(value) => builder.push_text(value),
                    None => builder.push_missing(),
                }
            }
            row_count += 1;
        }

        let columns = builders.into_iter().map(ColumnBuilder::finish).collect();
        Table::with_row_count(columns, row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{Cell, ColumnKind};

    #[test]
    fn test_parse_simple_csv() {
        let config = SweeperConfig::default();
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = CsvReader::new(&config).parse_content(content).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["name", "age", "city"]);
        assert_eq!(table.column("age").unwrap().kind(), ColumnKind::Numeric);
        assert_eq!(table.column("name").unwrap().cells()[0], Cell::Text("Alice".into()));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let config = SweeperConfig::default();
        let table = CsvReader::new(&config)
            .parse_content("a,b\n1\n2,3\n")
            .unwrap();
        assert_eq!(table.column("b").unwrap().cells(), &[Cell::Missing, Cell::Number(3.0)]);
    }

    #[test]
    fn test_whitespace_cells_stay_text() {
        let config = SweeperConfig::default();
        let table = CsvReader::new(&config)
            .parse_content("t,n\n ,1\nx, 2.5 \n NA ,NA\n")
            .unwrap();

        let t = table.column("t").unwrap();
        assert_eq!(t.kind(), ColumnKind::Text);
        assert_eq!(
            t.cells(),
            &[Cell::Text(" ".into()), Cell::Text("x".into()), Cell::Text(" NA ".into())]
        );
        assert_eq!(
            table.column("n").unwrap().cells(),
            &[Cell::Number(1.0), Cell::Number(2.5), Cell::Missing]
        );
    }

    #[test]
    fn test_long_rows_fail() {
        let config = SweeperConfig::default();
        let result = CsvReader::new(&config).parse_content("a,b\n1,2,3\n");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_empty_input_fails() {
        let config = SweeperConfig::default();
        let result = CsvReader::new(&config).parse_bytes(b"");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_header_only() {
        let config = SweeperConfig::default();
        let table = CsvReader::new(&config).parse_content("k,v\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_latin1_bytes() {
        let config = SweeperConfig::default();
        let bytes = b"city,pop\nM\xfcnchen,1.5\n";
        let table = CsvReader::new(&config).parse_bytes(bytes).unwrap();
        assert_eq!(
            table.column("city").unwrap().cells()[0],
            Cell::Text("M\u{fc}nchen".into())
        );
    }

    #[test]
    fn test_semicolon_delimiter() {
        let config = SweeperConfig::default();
        let table = CsvReader::new(&config)
            .with_delimiter(b';')
            .parse_content("a;b\n1;2\n")
            .unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }
}
