use super::{plan_request, resolve_working_dir, PlanRequest};
use crate::export::{export, ExportResult};
use crate::{Config, Error};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Export operation - plans the request again from the current directory
/// contents and copies the selected files under their new names.
///
/// Unselected sources are reported as skipped. Exporting into the input
/// directory itself is refused, since a copy could replace a source that has
/// not been read yet.
pub fn export_operation(
    request: &PlanRequest,
    output_dir: Option<PathBuf>,
    config: &Config,
    working_dir: Option<&Path>,
) -> Result<ExportResult> {
    let working_dir = resolve_working_dir(working_dir)?;
    let planned = plan_request(request, config, &working_dir)?;

    let destination_root = Config::resolve(
        &working_dir,
        output_dir.as_deref().unwrap_or(config.defaults.output_dir.as_path()),
    );
    if same_dir(&planned.input_dir, &destination_root) {
        return Err(Error::OutputIsInput(destination_root).into());
    }

    let mut result = export(&planned.entries, &destination_root);
    result.record_skipped(planned.unselected());
    Ok(result)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
