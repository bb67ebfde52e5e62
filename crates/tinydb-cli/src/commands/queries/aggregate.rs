use tinydb_core::Store;

use crate::cli::{AggregateArgs, Cli};
use crate::output::{print_aggregate, print_json};

pub fn handle_aggregate(cli: &Cli, store: &Store, args: &AggregateArgs) -> anyhow::Result<()> {
    let result = store.aggregate(&args.table, &args.field)?;

    if cli.json {
        print_json(&result)
    } else {
        print_aggregate(&result);
        Ok(())
    }
}
