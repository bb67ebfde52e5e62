use tinydb_core::{Selection, Store, TinyDbError};

use crate::cli::{Cli, SelectArgs};
use crate::output::{print_json, print_records};

pub fn handle_select(cli: &Cli, store: &Store, args: &SelectArgs) -> anyhow::Result<()> {
    let selection = selection_from_args(args)?;
    let records = store.select(&args.table, &selection)?;

    if cli.json {
        print_json(&records)
    } else {
        print_records(&records, cli.quiet);
        Ok(())
    }
}

/// Exactly one of the three selection forms must be given.
fn selection_from_args(args: &SelectArgs) -> Result<Selection, TinyDbError> {
    match (args.from, args.to, &args.field, &args.value, args.employee_id) {
        (Some(start), Some(end), None, None, None) => Ok(Selection::id_range(start, end)),
        (None, None, Some(field), Some(value), None) => {
            Ok(Selection::field_equals(field.as_str(), value.as_str()))
        }
        (None, None, None, None, Some(employee_id)) => Ok(Selection::employee_id(employee_id)),
        _ => Err(TinyDbError::InvalidInput(
            "Use exactly one of --from/--to, --field/--value, or --employee-id".to_string(),
        )),
    }
}
