use std::fs;
use std::path::Path;

use tabtint::{PageContent, TableMatrix, map_highlights};

use crate::cli::OutputFormat;
use crate::shared::write_tables;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let text = fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;
    let page: PageContent = serde_json::from_str(&text).map_err(|e| {
        eprintln!("Error: invalid page dump: {e}");
        1
    })?;

    let mut tables = Vec::new();
    for (table_idx, table) in page.tables.iter().enumerate() {
        if table.data.is_empty() {
            continue;
        }
        let fills = map_highlights(table, &page);
        tables.push(TableMatrix::new(
            format!("page-1-table-{}", table_idx + 1),
            table.data.clone(),
            fills,
        ));
    }

    write_tables(&tables, format)
}
