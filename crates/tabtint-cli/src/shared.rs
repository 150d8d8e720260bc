//! Output helpers shared by the subcommands.

use tabtint::TableMatrix;

use crate::cli::OutputFormat;

pub fn write_tables(tables: &[TableMatrix], format: &OutputFormat) -> Result<(), i32> {
    match format {
        OutputFormat::Text => {
            write_grid(tables);
            Ok(())
        }
        OutputFormat::Json => write_json(tables),
    }
}

fn write_grid(tables: &[TableMatrix]) {
    if tables.is_empty() {
        println!("No tables found.");
        return;
    }

    for table in tables {
        println!("--- {} ---", table.title);

        // Compute column widths for aligned output
        let col_count = table.col_count();
        let mut col_widths = vec![1usize; col_count];
        for row in &table.rows {
            for (ci, text) in row.iter().enumerate() {
                col_widths[ci] = col_widths[ci].max(text.len());
            }
        }

        for row in &table.rows {
            let cells_formatted: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(ci, text)| format!("{:<width$}", text, width = col_widths[ci]))
                .collect();
            println!("| {} |", cells_formatted.join(" | "));
        }

        for (ri, fill_row) in table.fills.iter().enumerate() {
            for (ci, fill) in fill_row.iter().enumerate() {
                if let Some(color) = fill {
                    println!("  highlight r{ri}c{ci}: {color}");
                }
            }
        }

        println!();
    }
}

fn write_json(tables: &[TableMatrix]) -> Result<(), i32> {
    let json = serde_json::to_string_pretty(tables).map_err(|e| {
        eprintln!("Error: failed to serialize tables: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
