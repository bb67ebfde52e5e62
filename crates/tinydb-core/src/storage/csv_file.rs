//! CSV snapshot format for persisted tables.
//!
//! A snapshot is a header row with the schema field names followed by one row
//! per record in insertion order. Files are always rewritten whole, so a
//! reader treats the file as a complete snapshot, never a log.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TinyDbError};
use crate::fs::{rename_with_fallback, sibling_temp_path};
use crate::storage::traits::push_unique;
use crate::storage::types::{Record, Schema};

/// Read a snapshot.
///
/// A missing or zero-length file yields an empty sequence.
///
/// # Errors
///
/// Returns `TinyDbError::Persistence` if the file cannot be read, the header
/// does not match `schema`, a row is malformed, or an `id` repeats.
pub fn read_snapshot(path: &Path, schema: &Schema) -> Result<Vec<Record>> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => return Ok(Vec::new()),
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(TinyDbError::Persistence(format!(
                "Cannot read {}: {}",
                path.display(),
                err
            )))
        }
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| corrupt(path, e))?;

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| corrupt(path, e))?
        .iter()
        .map(String::from)
        .collect();
    if header.as_slice() != schema.fields() {
        return Err(TinyDbError::Persistence(format!(
            "{}: header {:?} does not match schema {:?}",
            path.display(),
            header,
            schema.fields()
        )));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| corrupt(path, e))?;
        let record = Record::from_pairs(schema.fields().iter().cloned().zip(row.iter()));
        push_unique(&mut records, record).map_err(|e| corrupt(path, e))?;
    }
    Ok(records)
}

/// Write a full snapshot, replacing `path` once the new content is on disk.
///
/// The scratch file is removed if the snapshot cannot be completed.
///
/// # Errors
///
/// Returns `TinyDbError::Persistence` if writing or renaming fails.
pub fn write_snapshot(path: &Path, schema: &Schema, records: &[Record]) -> Result<()> {
    let temp = sibling_temp_path(path);
    if let Err(err) = write_temp(&temp, schema, records) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    rename_with_fallback(&temp, path)?;
    Ok(())
}

fn write_temp(temp: &Path, schema: &Schema, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(temp)?;
    writer.write_record(schema.fields())?;
    for record in records {
        writer.write_record(
            schema
                .fields()
                .iter()
                .map(|field| record.get(field).unwrap_or("")),
        )?;
    }
    let file = writer
        .into_inner()
        .map_err(|e| TinyDbError::Persistence(e.error().to_string()))?;
    file.sync_all()?;
    Ok(())
}

fn corrupt(path: &Path, err: impl std::fmt::Display) -> TinyDbError {
    TinyDbError::Persistence(format!("{} is corrupt: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TableKind;
    use tempfile::tempdir;

    fn department_schema() -> Schema {
        TableKind::Department.schema().unwrap()
    }

    #[test]
    fn test_missing_and_empty_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("department_table.csv");
        assert!(read_snapshot(&path, &department_schema()).unwrap().is_empty());

        fs::write(&path, "").unwrap();
        assert!(read_snapshot(&path, &department_schema()).unwrap().is_empty());
    }

    #[test]
    fn test_write_quotes_embedded_delimiters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("department_table.csv");
        let records = vec![Record::from_pairs([
            ("id", "1"),
            ("department_name", "R&D, Labs"),
        ])];

        write_snapshot(&path, &department_schema(), &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "id,department_name\n1,\"R&D, Labs\"\n");
        assert_eq!(read_snapshot(&path, &department_schema()).unwrap(), records);
    }

    #[test]
    fn test_failed_write_leaves_no_scratch_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the table path makes the final rename fail.
        let path = dir.path().join("department_table.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();
        let records = vec![Record::from_pairs([("id", "1"), ("department_name", "QA")])];

        let err = write_snapshot(&path, &department_schema(), &records).unwrap_err();
        assert!(matches!(err, TinyDbError::Persistence(_)));
        assert!(!sibling_temp_path(&path).exists());
    }

    #[test]
    fn test_header_mismatch_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("department_table.csv");
        fs::write(&path, "id,name,age\n1,Alice,30\n").unwrap();

        let err = read_snapshot(&path, &department_schema()).unwrap_err();
        assert!(matches!(err, TinyDbError::Persistence(_)));
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("department_table.csv");
        fs::write(&path, "id,department_name\n1,Security,extra\n").unwrap();

        let err = read_snapshot(&path, &department_schema()).unwrap_err();
        assert!(matches!(err, TinyDbError::Persistence(_)));
    }

    #[test]
    fn test_duplicate_ids_on_disk_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("department_table.csv");
        fs::write(&path, "id,department_name\n1,Security\n1,QA\n").unwrap();

        let err = read_snapshot(&path, &department_schema()).unwrap_err();
        assert!(matches!(err, TinyDbError::Persistence(_)));
    }
}
