use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tinydb_core::{DEFAULT_JOIN_ATTR, VERSION};

/// tinydb - a tiny CSV-backed record store
#[derive(Parser)]
#[command(name = "tinydb")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the table files
    #[arg(short, long, global = true, env = "TINYDB_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "TINYDB_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `insert` command
#[derive(Args)]
pub struct InsertArgs {
    /// Table to insert into
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Field values in schema order (e.g. 1 Alice 30 70000 1)
    #[arg(value_name = "VALUES", required = true, num_args = 1..)]
    pub values: Vec<String>,
}

/// Arguments for the `select` command
#[derive(Args)]
pub struct SelectArgs {
    /// Table to select from
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// First id of an inclusive id range
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Last id of an inclusive id range
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Field to match exactly
    #[arg(long, requires = "value")]
    pub field: Option<String>,

    /// Value the field must equal
    #[arg(long, requires = "field")]
    pub value: Option<String>,

    /// Employee id to match (bonus table)
    #[arg(long)]
    pub employee_id: Option<i64>,
}

/// Arguments for the `join` command
#[derive(Args)]
pub struct JoinArgs {
    /// Left table (drives output order)
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Right table (matched by id)
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// Left-side field holding the right-side id
    #[arg(long, default_value = DEFAULT_JOIN_ATTR)]
    pub on: String,
}

/// Arguments for the `aggregate` command
#[derive(Args)]
pub struct AggregateArgs {
    /// Table to aggregate
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Numeric field
    #[arg(value_name = "FIELD")]
    pub field: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert one record from whitespace-separated values
    Insert(InsertArgs),

    /// Select records by id range, field value, or employee id
    Select(SelectArgs),

    /// Equi-join two tables
    Join(JoinArgs),

    /// SUM, COUNT, MAX, MIN and AVG of a numeric field
    Aggregate(AggregateArgs),

    /// List registered tables
    Tables,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
