//! Record-level commands: insert and select.

mod insert;
mod select;

pub use insert::handle_insert;
pub use select::handle_select;
