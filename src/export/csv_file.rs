//! CSV export

use super::{ACTIVITY_SEPARATOR, EXPORT_HEADERS};
use crate::error::Result;
use descritivo_common::RecordTable;
use std::io::Write;
use std::path::Path;

pub fn write_csv(table: &RecordTable, output: &Path) -> Result<()> {
    let file = std::fs::File::create(output)?;
    write_csv_to(table, file)
}

pub fn write_csv_to<W: Write>(table: &RecordTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(EXPORT_HEADERS)?;

    for record in table.all() {
        let activities = record.activities().join(ACTIVITY_SEPARATOR);
        writer.write_record([record.name(), record.code(), activities.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
