// ============================================================
// TABULAR INFRASTRUCTURE LAYER
// ============================================================
// CSV and XLSX codecs, text decoding, and column type inference

mod csv_reader;
mod csv_writer;
mod decoding;
mod inference;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::CsvReader;
pub use csv_writer::write_csv;
pub use decoding::decode_text;
pub use inference::{normalize_headers, ColumnBuilder};
pub use xlsx_reader::XlsxReader;
pub use xlsx_writer::write_xlsx;
