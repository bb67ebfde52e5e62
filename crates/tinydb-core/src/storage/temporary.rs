//! In-memory staging table with an inferred schema.

use crate::error::Result;
use crate::storage::traits::{push_unique, Table, TableKind};
use crate::storage::types::{Record, Schema};

/// Never-persisted table, typically used to stage join output so it can be
/// joined again.
///
/// The schema comes from the first staged record's field names, or is
/// inferred as `id, field1, field2, ...` on the first insert into an empty
/// table.
#[derive(Debug, Default)]
pub struct TemporaryTable {
    schema: Option<Schema>,
    records: Vec<Record>,
}

impl TemporaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an existing record sequence.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::InvalidInput` if the first record has no `id`,
    /// or `TinyDbError::DuplicateKey` if an `id` repeats.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let schema = match records.first() {
            Some(first) => Some(Schema::new(first.field_names())?),
            None => None,
        };
        let mut staged = Vec::with_capacity(records.len());
        for record in records {
            push_unique(&mut staged, record)?;
        }
        Ok(Self {
            schema,
            records: staged,
        })
    }
}

impl Table for TemporaryTable {
    fn kind(&self) -> TableKind {
        TableKind::Temporary
    }

    fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    fn records(&self) -> &[Record] {
        &self.records
    }

    fn insert(&mut self, raw: &str) -> Result<()> {
        let schema = match &self.schema {
            Some(schema) => schema.clone(),
            None => Schema::inferred(raw.split_whitespace().count()),
        };
        let record = Record::parse(&schema, raw)?;
        push_unique(&mut self.records, record)?;
        self.schema = Some(schema);
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        Ok(())
    }

    fn save(&self) -> Result<()> {
        Ok(())
    }
}
