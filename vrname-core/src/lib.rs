#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod selection;
pub mod source;

pub use catalog::{declarations, Catalog, NamingConvention, Player, UNIVERSAL_PLAYER};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{export, EntryOutcome, EntryStatus, ExportResult};
pub use operations::{
    conventions_operation, export_operation, players_operation, preview_operation, PlanRequest,
};
pub use output::{
    ConventionsResult, OutputFormat, OutputFormatter, PlayersResult, PreviewResult, VersionResult,
};
pub use planner::{colliding_targets, preview, target_filename, RenamePlanEntry};
pub use preview::{render_preview, Preview};
pub use selection::select;
pub use source::{scan_input_dir, SourceFile, SUPPORTED_EXTENSION};
