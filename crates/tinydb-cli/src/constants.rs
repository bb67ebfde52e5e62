//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unknown table or dangling join reference.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, selection, or non-numeric data.
    pub const INVALID_INPUT: i32 = 4;

    /// Insert conflicts with an existing id.
    pub const CONFLICT: i32 = 5;

    /// A table file could not be read or written.
    pub const STORAGE: i32 = 6;
}

/// Registry names for the persisted tables.
pub mod table_names {
    pub const EMPLOYEES: &str = "employees";
    pub const DEPARTMENTS: &str = "departments";
    pub const BONUSES: &str = "bonuses";
}
