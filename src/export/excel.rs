//! Excel export

use super::{ACTIVITY_SEPARATOR, EXPORT_HEADERS};
use crate::error::Result;
use descritivo_common::RecordTable;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Funções";

pub fn write_xlsx(table: &RecordTable, output: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in table.all().iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, record.name())?;
        worksheet.write_string(row, 1, record.code())?;
        worksheet.write_string(row, 2, record.activities().join(ACTIVITY_SEPARATOR))?;
    }

    worksheet.set_column_width(0, 36)?;
    worksheet.set_column_width(1, 12)?;
    worksheet.set_column_width(2, 80)?;

    workbook.save(output)?;
    Ok(())
}
