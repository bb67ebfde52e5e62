use clap::CommandFactory;
use clap_complete::generate;
use tinydb_core::{Store, Table};

use crate::cli::Cli;
use crate::output::{print_json, print_tables, TableSummary};

pub fn handle_tables(cli: &Cli, store: &Store) -> anyhow::Result<()> {
    let mut summaries = Vec::new();
    for name in store.table_names() {
        let table = store.table(name)?;
        summaries.push(TableSummary {
            name: name.to_string(),
            kind: table.kind().to_string(),
            fields: table
                .schema()
                .map(|schema| schema.fields().to_vec())
                .unwrap_or_default(),
            records: table.len(),
            file: table
                .location()
                .map(|path| path.display().to_string()),
        });
    }

    if cli.json {
        print_json(&summaries)
    } else {
        print_tables(&summaries);
        Ok(())
    }
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tinydb", &mut std::io::stdout());
    Ok(())
}
