//! Table storage: records, schemas, and the table variants.
//!
//! - `types`: `Record`, `Schema`, `Selection`, `AggregateResult`
//! - `traits`: the `Table` capability interface and `TableKind`
//! - `file_table`: CSV-backed employee/department/bonus tables
//! - `temporary`: in-memory staging table with an inferred schema

pub mod csv_file;
pub mod file_table;
pub mod temporary;
pub mod traits;
pub mod types;

pub use file_table::FileTable;
pub use temporary::TemporaryTable;
pub use traits::{Table, TableKind};
pub use types::{AggregateResult, Record, Schema, Selection, ID_FIELD};
