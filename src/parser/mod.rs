pub mod csv_rows;

pub use csv_rows::{CsvRowParser, RowParser};
