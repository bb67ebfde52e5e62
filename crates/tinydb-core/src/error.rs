//! Error types for tinydb core operations.
//!
//! Every failure at the store boundary is signaled through [`TinyDbError`].
//! Errors are descriptive at the core level; the CLI layer maps these to
//! exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for tinydb operations.
pub type Result<T> = std::result::Result<T, TinyDbError>;

/// Core error type for tinydb operations.
#[derive(Debug, Error)]
pub enum TinyDbError {
    /// The operation referenced a table name that is not registered
    #[error("Table {0} does not exist.")]
    UnknownTable(String),

    /// Insert targeted an `id` already present in the table
    #[error("Entry with id = {id} already exists.")]
    DuplicateKey { id: String },

    /// The join key is not a field of a left-side record
    #[error("invalid join_attr: {0}")]
    MissingJoinAttribute(String),

    /// The join key value has no matching `id` on the right side
    #[error("{attr} = {value} does not exist.")]
    DanglingReference { attr: String, value: String },

    /// Aggregate over a table with zero records
    #[error("No data in table {0}.")]
    EmptyTable(String),

    /// A value that had to be parsed as a number was not numeric
    #[error("Field must contain numbers: {field} = {value:?}")]
    NonNumericField { field: String, value: String },

    /// Equality selection on a field outside the table schema
    #[error("Unknown field {field} in table {table}")]
    UnknownField { table: String, field: String },

    /// The table variant does not support the requested selection shape
    #[error("Table {table} does not support {selection} selection")]
    UnsupportedSelection {
        table: String,
        selection: &'static str,
    },

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing a persistence location failed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl TinyDbError {
    pub(crate) fn non_numeric(field: &str, value: &str) -> Self {
        TinyDbError::NonNumericField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<std::io::Error> for TinyDbError {
    fn from(err: std::io::Error) -> Self {
        TinyDbError::Persistence(err.to_string())
    }
}

impl From<csv::Error> for TinyDbError {
    fn from(err: csv::Error) -> Self {
        TinyDbError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = TinyDbError::DuplicateKey {
            id: "4".to_string(),
        };
        assert_eq!(err.to_string(), "Entry with id = 4 already exists.");

        let err = TinyDbError::DanglingReference {
            attr: "department_id".to_string(),
            value: "5".to_string(),
        };
        assert_eq!(err.to_string(), "department_id = 5 does not exist.");

        let err = TinyDbError::UnknownTable("non_existent_table".to_string());
        assert_eq!(err.to_string(), "Table non_existent_table does not exist.");
    }

    #[test]
    fn test_io_error_maps_to_persistence() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TinyDbError = io.into();
        assert!(matches!(err, TinyDbError::Persistence(_)));
    }
}
