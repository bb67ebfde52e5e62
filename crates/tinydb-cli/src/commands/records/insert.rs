use tinydb_core::{Store, Table};

use crate::cli::{Cli, InsertArgs};

pub fn handle_insert(cli: &Cli, store: &mut Store, args: &InsertArgs) -> anyhow::Result<()> {
    let line = args.values.join(" ");
    store.insert(&args.table, &line)?;

    if !cli.quiet {
        let count = store.table(&args.table)?.len();
        println!("Inserted into {} ({} records)", args.table, count);
    }
    Ok(())
}
