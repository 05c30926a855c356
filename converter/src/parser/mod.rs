//! Reads the downloaded schedule export into [`SourceRow`]s.
//!
//! The export is decoded first (UTF-8 when the bytes allow it, charset
//! detection otherwise), then read as a header-keyed delimited table.
//! No schedule-specific logic here beyond the column names.

use encoding_rs::Encoding;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::SourceRow;

/// Columns consumed from the export, in the order they are reported.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    "Course Code",
    "Day",
    "Slot",
    "Section",
    "Building/Room",
    "Staff Name",
    "Teaching Method",
    "Course Name",
];

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows in file order
    pub rows: Vec<SourceRow>,
    /// Detected encoding
    pub encoding: String,
    /// Column headers as found in the file
    pub headers: Vec<String>,
}

impl ParseResult {
    /// Consumed columns that the header row does not provide.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !self.headers.iter().any(|h| h == col))
            .collect()
    }
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without BOM) is taken as is; anything else is
/// handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if std::str::from_utf8(body).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A byte-order mark takes precedence over `encoding` and is stripped.
/// Unknown labels fall back to UTF-8. Malformed input is an error rather
/// than silently replaced.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let codec = Encoding::for_label(encoding.as_bytes()).unwrap_or(encoding_rs::UTF_8);
    let (text, used, had_errors) = codec.decode(bytes);

    if had_errors {
        return Err(CsvError::Encoding(format!(
            "invalid {} byte sequence",
            used.name()
        )));
    }

    Ok(text.into_owned())
}

/// Position of each consumed column in the header row.
///
/// When a header repeats a column name, the last occurrence wins.
#[derive(Debug, Clone)]
struct ColumnIndex([Option<usize>; 8]);

impl ColumnIndex {
    fn new(headers: &[String]) -> Self {
        Self(EXPECTED_COLUMNS.map(|name| headers.iter().rposition(|h| h == name)))
    }

    fn cell<'r>(&self, record: &'r csv::StringRecord, column: usize) -> &'r str {
        self.0[column].and_then(|idx| record.get(idx)).unwrap_or("")
    }

    /// Absent columns and cells cut short on a ragged row read as empty strings.
    fn row(&self, record: &csv::StringRecord) -> SourceRow {
        SourceRow {
            course_code: self.cell(record, 0).to_string(),
            day: self.cell(record, 1).to_string(),
            slot: self.cell(record, 2).to_string(),
            section: self.cell(record, 3).to_string(),
            room: self.cell(record, 4).to_string(),
            staff: self.cell(record, 5).to_string(),
            teaching_method: self.cell(record, 6).to_string(),
            course_name: self.cell(record, 7).to_string(),
        }
    }
}

/// Parse a header-keyed table from a reader.
///
/// Returns the header row and the data rows. Blank lines are skipped and
/// ragged rows are accepted; absent cells read as empty strings.
pub fn parse_rows<R: Read>(reader: R, delimiter: u8) -> CsvResult<(Vec<String>, Vec<SourceRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = ColumnIndex::new(&headers);

    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(columns.row(&result?));
    }

    Ok((headers, rows))
}

/// Parse export bytes with encoding detection and an explicit delimiter.
pub fn parse_bytes(bytes: &[u8], delimiter: u8) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let (headers, rows) = parse_rows(content.as_bytes(), delimiter)?;

    Ok(ParseResult {
        rows,
        encoding,
        headers,
    })
}

/// Parse an export file. The file is read in one go and closed before parsing.
pub fn parse_file<P: AsRef<Path>>(path: P, delimiter: u8) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, delimiter)
}
