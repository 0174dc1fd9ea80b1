pub mod csv_export;
pub mod formatter;

pub use csv_export::export_csv;
pub use formatter::{format_full_report, format_missing_report};
