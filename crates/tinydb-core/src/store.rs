//! The table registry and the operations that span tables.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{Result, TinyDbError};
use crate::storage::{AggregateResult, Record, Selection, Table, ID_FIELD};

/// Join attribute used when the caller has no foreign key in mind.
pub const DEFAULT_JOIN_ATTR: &str = ID_FIELD;

/// Registry of named tables.
///
/// The top-level caller owns exactly one `Store` and passes it to whatever
/// needs it; there is no global instance.
#[derive(Debug, Default)]
pub struct Store {
    tables: HashMap<String, Box<dyn Table>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `table`, returning the table it replaced, if any.
    ///
    /// Re-registration is legal, e.g. to rebind a name to another file.
    pub fn register_table<T>(&mut self, name: impl Into<String>, table: T) -> Option<Box<dyn Table>>
    where
        T: Table + 'static,
    {
        let name = name.into();
        let previous = self.tables.insert(name.clone(), Box::new(table));
        if previous.is_some() {
            info!(table = %name, "replaced table binding");
        } else {
            debug!(table = %name, "registered table");
        }
        previous
    }

    /// Look up a registered table.
    ///
    /// # Errors
    ///
    /// Returns `TinyDbError::UnknownTable` if `name` is not registered.
    pub fn table(&self, name: &str) -> Result<&dyn Table> {
        self.tables
            .get(name)
            .map(|table| &**table)
            .ok_or_else(|| TinyDbError::UnknownTable(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut Box<dyn Table>> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| TinyDbError::UnknownTable(name.to_string()))
    }

    /// Registered table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Insert a whitespace-separated line into table `name`.
    pub fn insert(&mut self, name: &str, raw: &str) -> Result<()> {
        self.table_mut(name)?.insert(raw)
    }

    /// Run a selection against table `name`.
    ///
    /// Unlike a silent empty result, an unregistered name is reported as
    /// `TinyDbError::UnknownTable`, matching `insert` and `aggregate`.
    pub fn select(&self, name: &str, selection: &Selection) -> Result<Vec<Record>> {
        self.table(name)?.select(selection)
    }

    /// Nested-loop equi-join of `left.join_attr` against `right.id`.
    ///
    /// Produces one merged record per left record, in left order. A merged
    /// record keeps every left field and adds every right field except `id`.
    ///
    /// # Errors
    ///
    /// - `TinyDbError::UnknownTable` if either name is unregistered
    /// - `TinyDbError::MissingJoinAttribute` if a left record lacks `join_attr`
    ///   or holds no value for it
    /// - `TinyDbError::DanglingReference` if a key has no match on the right
    pub fn join(&self, left: &str, right: &str, join_attr: &str) -> Result<Vec<Record>> {
        let left_table = self.table(left)?;
        let right_table = self.table(right)?;

        let mut joined = Vec::with_capacity(left_table.len());
        for left_record in left_table.records() {
            // A short insert line stores absent trailing fields as empty text.
            let key = left_record
                .get(join_attr)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| TinyDbError::MissingJoinAttribute(join_attr.to_string()))?;
            let right_record =
                right_table
                    .find_by_id(key)
                    .ok_or_else(|| TinyDbError::DanglingReference {
                        attr: join_attr.to_string(),
                        value: key.to_string(),
                    })?;

            let mut merged = left_record.clone();
            for (field, value) in right_record.iter().filter(|(field, _)| *field != ID_FIELD) {
                merged.set(field, value);
            }
            joined.push(merged);
        }
        debug!(
            left = %left,
            right = %right,
            join_attr = %join_attr,
            count = joined.len(),
            "joined tables"
        );
        Ok(joined)
    }

    /// SUM, COUNT, MAX, MIN and AVG of `field` over every record of `name`.
    ///
    /// # Errors
    ///
    /// - `TinyDbError::UnknownTable` if `name` is unregistered
    /// - `TinyDbError::EmptyTable` if the table has no records
    /// - `TinyDbError::NonNumericField` on the first value that is missing or
    ///   does not parse as a number
    pub fn aggregate(&self, name: &str, field: &str) -> Result<AggregateResult> {
        let table = self.table(name)?;
        if table.is_empty() {
            return Err(TinyDbError::EmptyTable(name.to_string()));
        }

        let mut sum = 0.0;
        let mut count = 0usize;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for record in table.records() {
            let raw = record.get(field).unwrap_or("");
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| TinyDbError::non_numeric(field, raw))?;
            sum += value;
            count += 1;
            max = max.max(value);
            min = min.min(value);
        }

        Ok(AggregateResult {
            sum,
            count,
            max,
            min,
            avg: sum / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TemporaryTable;

    fn store_with(rows: &[&str]) -> Store {
        let mut table = TemporaryTable::new();
        for row in rows {
            table.insert(row).unwrap();
        }
        let mut store = Store::new();
        store.register_table("scratch", table);
        store
    }

    #[test]
    fn test_unknown_table_is_signaled_everywhere() {
        let mut store = Store::new();
        assert!(matches!(
            store.insert("ghost", "1 a"),
            Err(TinyDbError::UnknownTable(_))
        ));
        assert!(matches!(
            store.select("ghost", &Selection::id_range(0, 1)),
            Err(TinyDbError::UnknownTable(_))
        ));
        assert!(matches!(
            store.aggregate("ghost", "age"),
            Err(TinyDbError::UnknownTable(_))
        ));
        assert!(matches!(
            store.join("ghost", "ghost", DEFAULT_JOIN_ATTR),
            Err(TinyDbError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_register_replaces_binding() {
        let mut store = store_with(&["1 a"]);
        let previous = store.register_table("scratch", TemporaryTable::new());
        assert_eq!(previous.map(|table| table.len()), Some(1));
        assert!(store.table("scratch").unwrap().is_empty());
        assert_eq!(store.table_names(), vec!["scratch"]);
    }

    #[test]
    fn test_aggregate_single_pass() {
        let store = store_with(&["1 2.5", "2 -1", "3 4"]);
        let result = store.aggregate("scratch", "field1").unwrap();
        assert_eq!(result.count, 3);
        assert_eq!(result.sum, 5.5);
        assert_eq!(result.max, 4.0);
        assert_eq!(result.min, -1.0);
        assert!((result.avg - 5.5 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_missing_field_is_non_numeric() {
        let store = store_with(&["1 2"]);
        let err = store.aggregate("scratch", "field9").unwrap_err();
        assert!(matches!(err, TinyDbError::NonNumericField { .. }));
    }

    #[test]
    fn test_join_right_fields_overwrite_left_but_not_id() {
        let mut store = store_with(&["1 2"]);
        let right = TemporaryTable::from_records(vec![Record::from_pairs([
            ("id", "2"),
            ("field1", "shadowed"),
            ("label", "two"),
        ])])
        .unwrap();
        store.register_table("right", right);

        let joined = store.join("scratch", "right", "field1").unwrap();
        assert_eq!(
            joined,
            vec![Record::from_pairs([
                ("id", "1"),
                ("field1", "shadowed"),
                ("label", "two"),
            ])]
        );
        // The left table itself is untouched.
        assert_eq!(
            store.table("scratch").unwrap().records()[0].get("field1"),
            Some("2")
        );
    }
}
