pub mod csv;

pub use self::csv::{read_runways, CsvError};
