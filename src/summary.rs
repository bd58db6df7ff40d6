use crate::types::FolderRecord;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Table};

/// Terminal recap of what went into the CSV. Presentation only.
pub fn print_summary(records: &[FolderRecord]) {
    println!("\n{}", "=== Folder Sizes ===".cyan());

    if records.is_empty() {
        println!("No subdirectories found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Folder", "Size"]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(human_bytes::human_bytes(record.size_bytes as f64)),
        ]);
    }

    let total: u64 = records.iter().map(|r| r.size_bytes).sum();
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(human_bytes::human_bytes(total as f64)).add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
}
