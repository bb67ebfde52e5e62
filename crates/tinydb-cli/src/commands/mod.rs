//! Command handlers, one per subcommand.

mod misc;
mod queries;
mod records;

pub use misc::{handle_completions, handle_tables};
pub use queries::{handle_aggregate, handle_join};
pub use records::{handle_insert, handle_select};
