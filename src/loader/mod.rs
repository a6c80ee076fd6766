//! Base loading
//!
//! Reads a job-function base from CSV or a spreadsheet and turns it into a
//! [`RecordTable`]. Columns are located by header name (see [`columns`]).

pub mod cache;
pub mod columns;

use crate::error::{LookupAppError, Result};
use cache::{fingerprint, CachedTable, TableCache};
use calamine::{open_workbook_auto_from_rs, Reader};
use columns::ColumnMap;
use descritivo_common::{Record, RecordTable};
use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xls" | "xlsx" | "xlsm" | "ods" => Ok(SourceFormat::Spreadsheet),
            _ => Err(LookupAppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a base file
pub fn load_table(path: &Path) -> Result<RecordTable> {
    let bytes = read_source(path)?;
    parse_bytes(path, &bytes)
}

/// Load a base file, reusing the parsed records when its contents are unchanged
pub fn load_table_cached(path: &Path, cache_dir: &Path) -> Result<RecordTable> {
    let bytes = read_source(path)?;
    let key = fingerprint(&bytes);
    let mut cache = TableCache::load(cache_dir);

    if let Some(hit) = cache.get(&key) {
        debug!(path = %path.display(), fingerprint = %key, "base obtida do cache");
        return Ok(RecordTable::new(hit.records.clone()));
    }

    let table = parse_bytes(path, &bytes)?;
    let source = std::fs::canonicalize(path)?;
    cache.insert(
        key,
        CachedTable {
            source: source.display().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            file_size: bytes.len() as u64,
            records: table.all().to_vec(),
        },
    );

    if let Err(e) = cache.save(cache_dir) {
        warn!(error = %e, "não foi possível salvar o cache");
    }

    Ok(table)
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(LookupAppError::FileNotFound(path.display().to_string()));
    }
    SourceFormat::from_path(path)?;

    Ok(std::fs::read(path)?)
}

/// Parse the contents of a base file; `path` only selects the format
pub fn parse_bytes(path: &Path, bytes: &[u8]) -> Result<RecordTable> {
    let records = match SourceFormat::from_path(path)? {
        SourceFormat::Csv => read_csv(&decode_text(bytes))?,
        SourceFormat::Spreadsheet => read_spreadsheet(bytes)?,
    };

    info!(path = %path.display(), rows = records.len(), "base carregada");
    Ok(RecordTable::new(records))
}

/// Decode CSV bytes: UTF-8 (BOM optional), otherwise Windows-1252
///
/// Excel in pt-BR saves "CSV" as Windows-1252.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            warn!("arquivo não está em UTF-8, lido como Windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}

/// Parse CSV text
///
/// The delimiter is `;` when the header line has more semicolons than
/// commas, otherwise `,`.
pub fn read_csv(content: &str) -> Result<Vec<Record>> {
    let content = content.trim_start_matches('\u{feff}');
    let header_line = content.lines().next().unwrap_or_default();
    let delimiter = if header_line.matches(';').count() > header_line.matches(',').count() {
        b';'
    } else {
        b','
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        rows.push(row.iter().map(str::to_string).collect());
    }

    records_from_rows(&headers, rows)
}

/// Read the first worksheet of an XLS/XLSX/ODS file
pub fn read_spreadsheet(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LookupAppError::Spreadsheet("a planilha não tem abas".into()))??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();

    records_from_rows(&headers, rows)
}

/// Build records from a header row and data rows
///
/// Fully blank rows are dropped silently; rows without a function name are
/// skipped with a warning.
pub fn records_from_rows<I>(headers: &[String], rows: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let columns = ColumnMap::detect(headers)?;
    let mut records = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or_default();

        let name = cell(columns.name);
        if name.trim().is_empty() {
            // +2: 1-based and the header line
            warn!(line = index + 2, "linha sem nome de função ignorada");
            continue;
        }

        records.push(Record::new(
            name,
            cell(columns.code).trim(),
            split_activities(cell(columns.activities)),
        )?);
    }

    Ok(records)
}

/// Split a raw activities cell into items
///
/// Items are separated by `;` when present, otherwise by line breaks.
pub fn split_activities(raw: &str) -> Vec<String> {
    let text = raw.replace('\r', "\n");
    let separator = if text.contains(';') { ';' } else { '\n' };

    text.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
