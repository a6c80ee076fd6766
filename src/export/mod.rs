//! Base export ("download" of the current base)

pub mod csv_file;
pub mod excel;

use crate::error::{LookupAppError, Result};
use descritivo_common::RecordTable;
use std::path::Path;

/// Default output file name
pub const DEFAULT_EXPORT_NAME: &str = "base_descritivo_funcoes.csv";

/// Header row written by every exporter
pub const EXPORT_HEADERS: [&str; 3] = ["Função", "CBO", "Atividades"];

/// Separator used to join activities into one cell
pub const ACTIVITY_SEPARATOR: &str = "; ";

/// Write `table` to `output`, picking the format from the extension
pub fn export_table(table: &RecordTable, output: &Path) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => csv_file::write_csv(table, output),
        "xlsx" => excel::write_xlsx(table, output),
        _ => Err(LookupAppError::UnsupportedFormat(output.display().to_string())),
    }
}
