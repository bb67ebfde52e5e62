//! # tinydb core
//!
//! A minimal embedded record store: a registry of named tables, each backed
//! by a flat CSV file, supporting insert with a uniqueness check, predicate
//! selection, two-table equi-join and single-column numeric aggregation.
//!
//! ## Architecture
//!
//! - **storage**: records, schemas, the `Table` interface and its variants
//! - **store**: the table registry, join and aggregate
//! - **fs**: snapshot file replacement
//!
//! All operations are synchronous and single-threaded. Nothing locks the
//! backing files; one writer per file is assumed.

pub mod error;
pub mod fs;
pub mod storage;
pub mod store;

pub use error::{Result, TinyDbError};
pub use storage::{
    AggregateResult, FileTable, Record, Schema, Selection, Table, TableKind, TemporaryTable,
};
pub use store::{Store, DEFAULT_JOIN_ATTR};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
