//! High-level operations that correspond to CLI commands
//!
//! These tie configuration, the catalog, the input scan, selection, planning
//! and export together, separated from argument parsing and printing.

pub mod catalog;
pub mod export;
pub mod preview;

pub use catalog::{conventions_operation, load_catalog, players_operation};
pub use export::export_operation;
pub use preview::{plan_request, preview_operation, Planned, PlanRequest};

use anyhow::Result;
use std::path::{Path, PathBuf};

fn resolve_working_dir(working_dir: Option<&Path>) -> Result<PathBuf> {
    match working_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
