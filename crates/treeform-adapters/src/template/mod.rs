//! Template table adapters.

mod csv;

pub use csv::CsvTemplateLoader;
