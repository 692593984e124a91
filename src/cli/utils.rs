use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::models::Entry;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output any serializable value as pretty JSON
pub fn output_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output entries as a table or a JSON array
pub fn output_entries(output_format: OutputFormat, entries: &[Entry]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => output_json(&entries),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No late entries recorded");
            } else {
                print!("{}", render_entry_table(entries));
            }
            Ok(())
        }
    }
}

const ENTRY_HEADERS: [&str; 9] = [
    "TIME", "NAME", "ROLL NO", "DEPT", "YEAR", "CLASS", "TRANSPORT", "REASON", "RECORDED BY",
];

fn entry_cells(entry: &Entry) -> [&str; 9] {
    [
        &entry.time,
        &entry.name,
        &entry.roll_no,
        &entry.dept,
        &entry.year,
        &entry.class_name,
        &entry.transport,
        &entry.reason,
        &entry.recorded_by,
    ]
}

/// Render entries as a left-aligned, space-padded table
pub fn render_entry_table(entries: &[Entry]) -> String {
    let mut widths = ENTRY_HEADERS.map(|h| h.chars().count());
    for entry in entries {
        for (width, cell) in widths.iter_mut().zip(entry_cells(entry)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &ENTRY_HEADERS, &widths);
    for entry in entries {
        push_row(&mut out, &entry_cells(entry), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 9], widths: &[usize; 9]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
