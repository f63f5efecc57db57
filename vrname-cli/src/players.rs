use anyhow::Result;
use vrname_core::{players_operation, Config, OutputFormatter};

use crate::OutputFormat;

pub fn handle_players(config: &Config, output: OutputFormat) -> Result<()> {
    let result = players_operation(config, None)?;
    println!("{}", result.format(output.into()).trim_end());
    Ok(())
}
