use tinydb_core::Store;

use crate::cli::{Cli, JoinArgs};
use crate::output::{print_json, print_records};

pub fn handle_join(cli: &Cli, store: &Store, args: &JoinArgs) -> anyhow::Result<()> {
    let joined = store.join(&args.left, &args.right, &args.on)?;

    if cli.json {
        print_json(&joined)
    } else {
        print_records(&joined, cli.quiet);
        Ok(())
    }
}
