use super::{load_catalog, resolve_working_dir};
use crate::catalog::NamingConvention;
use crate::output::{PreviewPair, PreviewResult};
use crate::planner::{colliding_targets, preview, RenamePlanEntry};
use crate::preview::{render_preview, Preview};
use crate::selection::select;
use crate::source::{scan_input_dir, SourceFile};
use crate::{Config, Error};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// What the caller asked to rename and how.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Player id; falls back to `defaults.player`
    pub player: Option<String>,
    /// Convention label or suffix within the player
    pub convention: Option<String>,
    /// Ad-hoc suffix used instead of a catalog convention
    pub suffix: Option<String>,
    /// File names inside the input directory
    pub files: Vec<String>,
    /// Glob patterns over file names
    pub select: Vec<String>,
    /// Overrides `defaults.input_dir`
    pub input_dir: Option<PathBuf>,
}

/// Everything computed for one request, shared by preview and export.
#[derive(Debug)]
pub struct Planned {
    pub convention: NamingConvention,
    pub input_dir: PathBuf,
    pub sources: Vec<SourceFile>,
    pub selected: BTreeSet<PathBuf>,
    pub entries: Vec<RenamePlanEntry>,
}

impl Planned {
    /// Sources that were listed but not part of the selection
    pub fn unselected(&self) -> impl Iterator<Item = &SourceFile> {
        self.sources
            .iter()
            .filter(|s| !self.selected.contains(s.id()))
    }
}

fn resolve_convention(
    request: &PlanRequest,
    config: &Config,
    working_dir: &Path,
) -> Result<NamingConvention> {
    if let Some(suffix) = &request.suffix {
        return Ok(NamingConvention::custom(suffix.clone())?);
    }

    let player = request
        .player
        .as_deref()
        .or(config.defaults.player.as_deref())
        .ok_or(Error::MissingArgument("player (use --player or set defaults.player)"))?;
    let key = request
        .convention
        .as_deref()
        .ok_or(Error::MissingArgument("convention (use --convention or --suffix)"))?;

    let catalog = load_catalog(config, working_dir)?;
    Ok(catalog.find_convention(player, key)?.clone())
}

/// Scan the input directory, resolve the convention and selection, and
/// compute the rename plan. The source list is re-read on every call.
pub fn plan_request(request: &PlanRequest, config: &Config, working_dir: &Path) -> Result<Planned> {
    let convention = resolve_convention(request, config, working_dir)?;

    let input_dir = Config::resolve(
        working_dir,
        request
            .input_dir
            .as_deref()
            .unwrap_or(config.defaults.input_dir.as_path()),
    );
    let sources = scan_input_dir(&input_dir)
        .with_context(|| format!("Failed to scan {}", input_dir.display()))?;

    let selected = select(&sources, &request.files, &request.select)?;
    let entries = preview(&sources, &convention, &selected)?;

    Ok(Planned {
        convention,
        input_dir,
        sources,
        selected,
        entries,
    })
}

/// Preview operation - returns structured data plus the rendered preview
pub fn preview_operation(
    request: &PlanRequest,
    config: &Config,
    preview_format: Option<Preview>,
    use_color: Option<bool>,
    working_dir: Option<&Path>,
) -> Result<(PreviewResult, Option<String>)> {
    let working_dir = resolve_working_dir(working_dir)?;
    let planned = plan_request(request, config, &working_dir)?;

    let preview_content = preview_format
        .filter(|format| *format != Preview::None)
        .map(|format| render_preview(&planned.entries, &planned.convention, format, use_color));

    let result = PreviewResult {
        collisions: colliding_targets(&planned.entries)
            .into_iter()
            .map(str::to_string)
            .collect(),
        preview: planned
            .entries
            .iter()
            .map(|e| PreviewPair {
                source: e.source.path.clone(),
                original: e.original_filename(),
                new: e.target_filename.clone(),
            })
            .collect(),
        scanned: planned.sources.len(),
        input_dir: planned.input_dir,
        convention: planned.convention,
    };

    Ok((result, preview_content))
}
