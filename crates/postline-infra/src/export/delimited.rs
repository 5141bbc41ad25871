//! Comma-separated variant. Fields containing delimiters, quotes, or
//! newlines are quoted, with embedded quotes doubled.

use super::{ExportError, ExportRow, HEADERS};

pub(super) fn serialize(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .map_err(|err| ExportError::Csv(err.to_string()))?;

    for row in rows {
        writer
            .write_record([
                row.date_time.as_str(),
                row.platform.as_str(),
                row.caption.as_str(),
                row.status.as_str(),
            ])
            .map_err(|err| ExportError::Csv(err.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.to_string()))
}
