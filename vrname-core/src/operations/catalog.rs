use super::resolve_working_dir;
use crate::catalog::{declarations, Catalog};
use crate::output::{ConventionsResult, PlayerItem, PlayersResult};
use crate::Config;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

/// The catalog named by the config: a declaration file when one is set,
/// otherwise the built-in table.
pub fn load_catalog(config: &Config, working_dir: &Path) -> Result<Cow<'static, Catalog>> {
    match &config.catalog.conventions_file {
        Some(file) => {
            let path = Config::resolve(working_dir, file);
            let catalog = declarations::load(&path)
                .with_context(|| format!("Failed to load conventions from {}", path.display()))?;
            log::debug!("Loaded {} players from {}", catalog.players().len(), path.display());
            Ok(Cow::Owned(catalog))
        },
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}

pub fn players_operation(config: &Config, working_dir: Option<&Path>) -> Result<PlayersResult> {
    let working_dir = resolve_working_dir(working_dir)?;
    let catalog = load_catalog(config, &working_dir)?;

    let players = catalog
        .players()
        .iter()
        .map(|p| PlayerItem {
            id: p.id.clone(),
            name: p.name.clone(),
            conventions: p.conventions.len(),
        })
        .collect();

    Ok(PlayersResult { players })
}

pub fn conventions_operation(
    player: &str,
    config: &Config,
    working_dir: Option<&Path>,
) -> Result<ConventionsResult> {
    let working_dir = resolve_working_dir(working_dir)?;
    let catalog = load_catalog(config, &working_dir)?;
    let entry = catalog.player(player)?;

    Ok(ConventionsResult {
        player: entry.id.clone(),
        name: entry.name.clone(),
        conventions: entry.conventions.clone(),
    })
}
