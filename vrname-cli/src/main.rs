use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use vrname_core::{Config, Error, OutputFormatter, VersionResult};

mod cli;
mod conventions;
mod export;
mod players;
mod preview;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    };
    let use_color = if cli.no_color {
        false
    } else {
        config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal())
    };

    let result = match cli.command {
        Commands::Players { output } => players::handle_players(&config, output),

        Commands::Conventions { player, output } => {
            conventions::handle_conventions(&player, &config, output)
        },

        Commands::Preview {
            plan,
            preview,
            output,
        } => preview::handle_preview(plan.into(), &config, preview, output, use_color),

        Commands::Export {
            plan,
            output_dir,
            preview,
            yes,
            output,
            quiet,
        } => export::handle_export(
            plan.into(),
            output_dir,
            &config,
            preview,
            yes,
            output,
            quiet,
            use_color,
        ),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load(&std::env::current_dir()?).context("Failed to load .vrname/config.toml"),
    }
}

/// 1 = export finished with failed entries, 2 = invalid input, 3 = anything else
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::ExportIncomplete { .. }) => 1,
        Some(e) if e.is_invalid_input() => 2,
        _ => 3,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "vrname".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
