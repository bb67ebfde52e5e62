//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records,
//! aggregates and the table list as text tables or JSON.

mod json;
mod text;

// Re-export public API
pub use json::print_json;
pub use text::{print_aggregate, print_records, print_tables, TableSummary};
