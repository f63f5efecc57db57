use crate::catalog::NamingConvention;
use crate::planner::{colliding_targets, RenamePlanEntry};
use std::fmt::Write;

/// Render the plan as plain `original -> new` lines
pub fn render_summary(entries: &[RenamePlanEntry], convention: &NamingConvention) -> String {
    let mut output = String::new();

    writeln!(output, "[PREVIEW]").unwrap();
    writeln!(
        output,
        "Convention: {} ({}) for {}",
        convention.label, convention.suffix, convention.player
    )
    .unwrap();
    writeln!(output, "Files: {}", entries.len()).unwrap();

    if !entries.is_empty() {
        writeln!(output).unwrap();
        for entry in entries {
            writeln!(
                output,
                "{} -> {}",
                entry.original_filename(),
                entry.target_filename
            )
            .unwrap();
        }
    }

    let collisions = colliding_targets(entries);
    if !collisions.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[COLLISIONS]").unwrap();
        for name in collisions {
            writeln!(output, "{} (last file wins)", name).unwrap();
        }
    }

    output
}
