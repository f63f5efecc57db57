pub mod args;
pub mod types;

pub use args::{Cli, Commands, PlanArgs};
pub use types::{OutputFormat, PreviewArg};
