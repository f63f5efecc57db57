use anyhow::{anyhow, Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use vrname_core::{
    export_operation, preview_operation, Config, Error, OutputFormatter, PlanRequest,
};

use crate::cli::PreviewArg;
use crate::preview::resolve_preview;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_export(
    request: PlanRequest,
    output_dir: Option<PathBuf>,
    config: &Config,
    preview: Option<PreviewArg>,
    yes: bool,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    if !yes {
        if !io::stdin().is_terminal() {
            return Err(anyhow!(
                "Cannot prompt for confirmation in non-interactive mode. Use --yes to export."
            ));
        }

        let format = resolve_preview(preview, config, output);
        let (planned, preview_content) =
            preview_operation(&request, config, format, Some(use_color), None)?;
        if let Some(content) = preview_content {
            eprintln!("{}", content.trim_end());
        }
        if planned.preview.is_empty() {
            eprintln!("Nothing to export.");
            return Ok(());
        }
        if !get_user_confirmation(planned.preview.len())? {
            eprintln!("Export cancelled.");
            return Ok(());
        }
    }

    let result = export_operation(&request, output_dir, config, None)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary_with_color(use_color));
            }
        },
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(Error::ExportIncomplete {
            failed: result.failed_count,
            total: result.copied_count + result.failed_count,
        }
        .into())
    }
}

fn get_user_confirmation(count: usize) -> Result<bool> {
    eprint!("Export {} files? [y/N]: ", count);
    io::stderr().flush().context("Failed to flush stderr")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}
