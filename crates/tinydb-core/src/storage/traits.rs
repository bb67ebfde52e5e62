//! Table trait definition.
//!
//! The `Table` trait is the one capability interface shared by every table
//! variant. Persisted variants (`FileTable`) and in-memory staging tables
//! (`TemporaryTable`) both implement it, so the store can hold them behind a
//! single trait object.

use std::fmt;
use std::path::Path;

use super::types::{Record, Schema, Selection, ID_FIELD};
use crate::error::{Result, TinyDbError};

/// The closed set of table variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Employee,
    Department,
    Bonus,
    Temporary,
}

impl TableKind {
    /// Fixed schema for persisted variants, `None` for `Temporary`.
    pub fn schema(self) -> Option<Schema> {
        let fields: &[&str] = match self {
            TableKind::Employee => &["id", "name", "age", "salary", "department_id"],
            TableKind::Department => &["id", "department_name"],
            TableKind::Bonus => &["id", "employee_id", "date", "amount"],
            TableKind::Temporary => return None,
        };
        Some(Schema::fixed(fields))
    }

    /// Default persistence file name, `None` for `Temporary`.
    pub fn default_file_name(self) -> Option<&'static str> {
        match self {
            TableKind::Employee => Some("employee_table.csv"),
            TableKind::Department => Some("department_table.csv"),
            TableKind::Bonus => Some("bonus_table.csv"),
            TableKind::Temporary => None,
        }
    }

    /// Whether this variant accepts the given selection shape.
    pub fn supports(self, selection: &Selection) -> bool {
        matches!(
            (self, selection),
            (TableKind::Employee, Selection::IdRange { .. })
                | (TableKind::Department, Selection::FieldEquals { .. })
                | (TableKind::Bonus, Selection::EmployeeId(_))
                | (TableKind::Temporary, Selection::IdRange { .. })
                | (TableKind::Temporary, Selection::FieldEquals { .. })
        )
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Employee => "employee",
            TableKind::Department => "department",
            TableKind::Bonus => "bonus",
            TableKind::Temporary => "temporary",
        };
        f.write_str(name)
    }
}

/// Capability interface for every table variant.
///
/// Implementations must ensure:
/// - `id` values are unique within `records()`
/// - `records()` preserves insertion order
/// - persisted variants rewrite their whole file after each successful insert
pub trait Table: fmt::Debug {
    fn kind(&self) -> TableKind;

    /// Current schema. A temporary table has none until its first insert.
    fn schema(&self) -> Option<&Schema>;

    /// All records in insertion order.
    fn records(&self) -> &[Record];

    /// File the table persists to, `None` for in-memory tables.
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Parse a whitespace-separated line and append it.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::DuplicateKey` if the `id` already exists (the
    /// table is left unchanged), `TinyDbError::InvalidInput` for a blank
    /// line, or `TinyDbError::Persistence` if the rewrite fails.
    fn insert(&mut self, raw: &str) -> Result<()>;

    /// Predicate scan returning copies of the matching records.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::UnsupportedSelection` if the variant does not
    /// accept this selection shape.
    fn select(&self, selection: &Selection) -> Result<Vec<Record>> {
        if !self.kind().supports(selection) {
            return Err(TinyDbError::UnsupportedSelection {
                table: self.kind().to_string(),
                selection: selection.shape(),
            });
        }
        if let Selection::FieldEquals { field, .. } = selection {
            match self.schema() {
                Some(schema) if !schema.contains(field) => {
                    return Err(TinyDbError::UnknownField {
                        table: self.kind().to_string(),
                        field: field.clone(),
                    });
                }
                None => return Ok(Vec::new()),
                _ => {}
            }
        }
        let mut matched = Vec::new();
        for record in self.records() {
            if selection.matches(record)? {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }

    /// First record whose `id` equals `id`.
    fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records().iter().find(|record| record.id() == Some(id))
    }

    /// Replace in-memory records with the persisted snapshot.
    fn load(&mut self) -> Result<()>;

    /// Write the full in-memory sequence to the persistence location.
    fn save(&self) -> Result<()>;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Append `record` unless its `id` is already taken.
pub(crate) fn push_unique(records: &mut Vec<Record>, record: Record) -> Result<()> {
    let id = record.get(ID_FIELD).unwrap_or("");
    if records.iter().any(|existing| existing.id() == Some(id)) {
        return Err(TinyDbError::DuplicateKey { id: id.to_string() });
    }
    records.push(record);
    Ok(())
}
