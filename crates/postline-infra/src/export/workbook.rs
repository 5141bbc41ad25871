//! Workbook variant, written with `rust_xlsxwriter`.

use rust_xlsxwriter::{Workbook, XlsxError};

use super::{COLUMN_WIDTHS, ExportError, ExportRow, HEADERS, SHEET_NAME};

pub(super) fn serialize(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    build(rows).map_err(|err| ExportError::Workbook(err.to_string()))
}

fn build(rows: &[ExportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_string(r, 0, &row.date_time)?;
        worksheet.write_string(r, 1, &row.platform)?;
        worksheet.write_string(r, 2, &row.caption)?;
        worksheet.write_string(r, 3, &row.status)?;
    }

    workbook.save_to_buffer()
}
