use anyhow::Result;
use vrname_core::{conventions_operation, Config, OutputFormatter};

use crate::OutputFormat;

pub fn handle_conventions(player: &str, config: &Config, output: OutputFormat) -> Result<()> {
    let result = conventions_operation(player, config, None)?;
    println!("{}", result.format(output.into()).trim_end());
    Ok(())
}
