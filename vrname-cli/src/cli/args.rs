use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Tag VR video filenames so players detect their projection automatically
#[derive(Parser, Debug)]
#[command(name = "vrname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Config file to use instead of .vrname/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which files to rename and which suffix to give them
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Player whose conventions to use (defaults from config)
    #[arg(short, long)]
    pub player: Option<String>,

    /// Convention label or suffix within the player, e.g. "180 LR" or _180_LR
    #[arg(short, long, conflicts_with = "suffix")]
    pub convention: Option<String>,

    /// Append this suffix instead of a catalog convention
    #[arg(long)]
    pub suffix: Option<String>,

    /// File name inside the input directory to include (repeatable)
    #[arg(short, long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Glob over file names to include (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub select: Vec<String>,

    /// Directory holding the source videos
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the players in the catalog
    Players {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// List the naming conventions of one player
    Conventions {
        /// Player id, e.g. playa_vr
        player: String,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show the new file names without copying anything
    Preview {
        #[command(flatten)]
        plan: PlanArgs,

        /// Preview output format (defaults from config if not specified)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Copy the selected files to the output directory under their new names
    Export {
        #[command(flatten)]
        plan: PlanArgs,

        /// Directory the renamed copies are written to
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Preview output format shown before confirmation
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes", env = "VRNAME_YES")]
        yes: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary
        #[arg(long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

impl From<PlanArgs> for vrname_core::PlanRequest {
    fn from(args: PlanArgs) -> Self {
        Self {
            player: args.player,
            convention: args.convention,
            suffix: args.suffix,
            files: args.files,
            select: args.select,
            input_dir: args.input_dir,
        }
    }
}
