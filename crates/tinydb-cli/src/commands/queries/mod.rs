//! Cross-record commands: join and aggregate.

mod aggregate;
mod join;

pub use aggregate::handle_aggregate;
pub use join::handle_join;
