mod summary;
mod table;

pub use summary::render_summary;
pub use table::render_table;

use crate::catalog::NamingConvention;
use crate::planner::RenamePlanEntry;
use serde_json::json;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    Json,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stdout().is_terminal())
}

/// Render the (original, new) pairs of a plan in the requested format
pub fn render_preview(
    entries: &[RenamePlanEntry],
    convention: &NamingConvention,
    format: Preview,
    use_color: Option<bool>,
) -> String {
    match format {
        Preview::Table => render_table(entries, should_use_color(use_color)),
        Preview::Summary => render_summary(entries, convention),
        Preview::Json => render_json(entries, convention),
        Preview::None => String::new(),
    }
}

fn render_json(entries: &[RenamePlanEntry], convention: &NamingConvention) -> String {
    let preview: Vec<_> = entries
        .iter()
        .map(|e| json!({ "original": e.original_filename(), "new": e.target_filename }))
        .collect();
    serde_json::to_string(&json!({
        "convention": convention,
        "preview": preview,
    }))
    .unwrap_or_default()
}
