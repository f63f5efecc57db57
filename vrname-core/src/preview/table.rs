use crate::planner::{colliding_targets, RenamePlanEntry};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render the plan as a two-column table with a collision note column
pub fn render_table(entries: &[RenamePlanEntry], use_color: bool) -> String {
    let mut table = Table::new();

    // Only wrap to the terminal width when there is a terminal to fit
    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Original").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Original", "New name", "Note"]);
    }

    let collisions = colliding_targets(entries);

    for entry in entries {
        let original = entry.original_filename();
        let note = if collisions.contains(&entry.target_filename.as_str()) {
            "collision"
        } else {
            ""
        };

        if use_color {
            table.add_row(vec![
                Cell::new(&original),
                Cell::new(format!("→ {}", entry.target_filename)).fg(Color::Magenta),
                Cell::new(note).fg(Color::Red),
            ]);
        } else {
            table.add_row(vec![
                original,
                format!("→ {}", entry.target_filename),
                note.to_string(),
            ]);
        }
    }

    let totals = format!("{} files", entries.len());
    let collision_total = format!("{} collisions", collisions.len());
    if use_color {
        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(totals).fg(Color::White),
            Cell::new(collision_total).fg(Color::Yellow),
        ]);
    } else {
        table.add_row(vec!["TOTAL".to_string(), totals, collision_total]);
    }

    table.to_string()
}
