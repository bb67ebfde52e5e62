//! File-backed table variants (employee, department, bonus).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TinyDbError};
use crate::storage::csv_file::{read_snapshot, write_snapshot};
use crate::storage::traits::{push_unique, Table, TableKind};
use crate::storage::types::{Record, Schema};

/// A persisted table with a fixed schema.
///
/// Records are loaded from `path` on construction and the whole file is
/// rewritten after every successful insert. The rewrite is O(n) per insert;
/// that is the accepted cost of never letting memory and disk diverge.
#[derive(Debug)]
pub struct FileTable {
    kind: TableKind,
    schema: Schema,
    path: PathBuf,
    records: Vec<Record>,
}

impl FileTable {
    /// Open a persisted table of `kind` backed by `path`, loading any
    /// existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::InvalidInput` for `TableKind::Temporary`, or
    /// `TinyDbError::Persistence` if an existing file cannot be loaded.
    pub fn open(kind: TableKind, path: impl Into<PathBuf>) -> Result<Self> {
        let schema = kind.schema().ok_or_else(|| {
            TinyDbError::InvalidInput(format!("{} tables are not file-backed", kind))
        })?;
        let mut table = Self {
            kind,
            schema,
            path: path.into(),
            records: Vec::new(),
        };
        table.load()?;
        Ok(table)
    }

    /// Employee table: `id, name, age, salary, department_id`.
    pub fn employees(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(TableKind::Employee, path)
    }

    /// Department table: `id, department_name`.
    pub fn departments(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(TableKind::Department, path)
    }

    /// Bonus table: `id, employee_id, date, amount`.
    pub fn bonuses(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(TableKind::Bonus, path)
    }
}

impl Table for FileTable {
    fn kind(&self) -> TableKind {
        self.kind
    }

    fn schema(&self) -> Option<&Schema> {
        Some(&self.schema)
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn insert(&mut self, raw: &str) -> Result<()> {
        let record = Record::parse(&self.schema, raw)?;
        push_unique(&mut self.records, record)?;
        if let Err(err) = self.save() {
            // Keep memory consistent with the last snapshot that reached disk.
            self.records.pop();
            return Err(err);
        }
        debug!(
            table = %self.kind,
            count = self.records.len(),
            "inserted record"
        );
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        self.records = read_snapshot(&self.path, &self.schema)?;
        debug!(
            table = %self.kind,
            path = %self.path.display(),
            count = self.records.len(),
            "loaded snapshot"
        );
        Ok(())
    }

    fn save(&self) -> Result<()> {
        write_snapshot(&self.path, &self.schema, &self.records)?;
        debug!(
            table = %self.kind,
            path = %self.path.display(),
            count = self.records.len(),
            "wrote snapshot"
        );
        Ok(())
    }
}
