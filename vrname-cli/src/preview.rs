use anyhow::Result;
use std::str::FromStr;
use vrname_core::{preview_operation, Config, OutputFormatter, PlanRequest, Preview};

use crate::cli::PreviewArg;
use crate::OutputFormat;

/// Preview format from the flag, else from config, never for JSON output
pub fn resolve_preview(
    preview: Option<PreviewArg>,
    config: &Config,
    output: OutputFormat,
) -> Option<Preview> {
    if output == OutputFormat::Json {
        return None;
    }
    Some(preview.map_or_else(
        || Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Table),
        Into::into,
    ))
}

pub fn handle_preview(
    request: PlanRequest,
    config: &Config,
    preview: Option<PreviewArg>,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let format = resolve_preview(preview, config, output);
    let (result, preview_content) =
        preview_operation(&request, config, format, Some(use_color), None)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if let Some(content) = preview_content {
                println!("{}", content.trim_end());
            }
            print!("{}", result.format_summary());
        },
    }
    Ok(())
}
