//! Text and table output formatting.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};
use serde::Serialize;
use tinydb_core::{AggregateResult, Record};

/// One row of the `tables` listing.
#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub kind: String,
    pub fields: Vec<String>,
    pub records: usize,
    pub file: Option<String>,
}

fn new_table() -> ComfyTable {
    let mut table = ComfyTable::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render records as a table, columns taken from the first record.
pub fn render_records(records: &[Record]) -> Option<String> {
    let first = records.first()?;
    let columns: Vec<&str> = first.field_names().collect();

    let mut table = new_table();
    table.set_header(columns.clone());
    for record in records {
        let row: Vec<&str> = columns
            .iter()
            .map(|column| record.get(column).unwrap_or(""))
            .collect();
        table.add_row(row);
    }
    Some(table.to_string())
}

pub fn print_records(records: &[Record], quiet: bool) {
    match render_records(records) {
        Some(rendered) => println!("{}", rendered),
        None if !quiet => println!("No records."),
        None => {}
    }
}

pub fn print_aggregate(result: &AggregateResult) {
    let mut table = new_table();
    table.set_header(vec!["SUM", "COUNT", "MAX", "MIN", "AVG"]);
    table.add_row(vec![
        result.sum.to_string(),
        result.count.to_string(),
        result.max.to_string(),
        result.min.to_string(),
        result.avg.to_string(),
    ]);
    println!("{}", table);
}

pub fn print_tables(summaries: &[TableSummary]) {
    let mut table = new_table();
    table.set_header(vec!["Table", "Kind", "Fields", "Records", "File"]);
    for summary in summaries {
        table.add_row(vec![
            summary.name.clone(),
            summary.kind.clone(),
            summary.fields.join(", "),
            summary.records.to_string(),
            summary.file.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_records_lists_every_value() {
        let records = vec![
            Record::from_pairs([("id", "1"), ("department_name", "Security")]),
            Record::from_pairs([("id", "2"), ("department_name", "Engineering")]),
        ];
        let rendered = render_records(&records).unwrap();
        assert!(rendered.contains("department_name"));
        assert!(rendered.contains("Security"));
        assert!(rendered.contains("Engineering"));
    }

    #[test]
    fn test_render_records_empty() {
        assert!(render_records(&[]).is_none());
    }
}
