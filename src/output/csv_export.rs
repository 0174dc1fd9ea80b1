use std::io::Write;
use std::path::Path;

use crate::constants::{CSV_URL_COLUMN, MISSING_LABEL, PRESENT_LABEL, REQUIRED_HEADERS};
use crate::error::{Error, Result};
use crate::http::UrlReport;

/// Write reports as CSV, one row per URL in the given order
pub fn write_csv<W: Write>(writer: W, reports: &[UrlReport]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(std::iter::once(CSV_URL_COLUMN).chain(REQUIRED_HEADERS))?;

    for report in reports {
        let cells = REQUIRED_HEADERS.into_iter().map(|header| {
            if report.presence.is_present(header) {
                PRESENT_LABEL
            } else {
                MISSING_LABEL
            }
        });
        wtr.write_record(std::iter::once(report.url.as_str()).chain(cells))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write reports to it
pub fn export_csv(path: &Path, reports: &[UrlReport]) -> Result<()> {
    let to_error = |source: csv::Error| Error::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| to_error(e.into()))?;
    write_csv(file, reports).map_err(to_error)
}
