// src/table.rs
//
// Typed CSV I/O for the pipeline files. Files are written with a UTF-8 BOM
// (spreadsheet tools need it to detect Turkish characters); readers accept
// either form.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::file::{require_input, write_atomic};
use crate::model::Columns;

pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse CSV text (header row first) into typed rows.
pub fn parse_rows<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let body = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(body);

    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        rows.push(rec?);
    }
    Ok(rows)
}

/// Read a pipeline file. Missing files are reported as `MissingInput`.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    require_input(path)?;
    let bytes = fs::read(path)?;
    let rows = parse_rows(&bytes)?;
    logd!("Table: read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// BOM + header + rows. With rows the serializer emits the header; an empty
/// slice still gets the row type's column names.
pub fn to_csv_bytes<T: Serialize + Columns>(rows: &[T]) -> Result<Vec<u8>> {
    let mut buf = BOM.to_vec();
    {
        let mut w = csv::Writer::from_writer(&mut buf);
        if rows.is_empty() {
            w.write_record(T::COLUMNS)?;
        }
        for row in rows {
            w.serialize(row)?;
        }
        w.flush()?;
    }
    Ok(buf)
}

/// Serialize everything in memory first, then swap the file into place.
pub fn write_rows<T: Serialize + Columns>(path: &Path, rows: &[T]) -> Result<()> {
    let bytes = to_csv_bytes(rows)?;
    write_atomic(path, &bytes)?;
    logd!("Table: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
