use crate::catalog::NamingConvention;
use crate::error::{Error, Result};
use crate::source::SourceFile;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// One selected source paired with the file name it will be exported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlanEntry {
    pub source: SourceFile,
    pub target_filename: String,
}

impl RenamePlanEntry {
    pub fn original_filename(&self) -> String {
        self.source.file_name()
    }
}

/// `stem + suffix + extension`, extension casing untouched.
///
/// The suffix is appended even when the stem already ends with it.
pub fn target_filename(source: &SourceFile, suffix: &str) -> String {
    format!("{}{}{}", source.stem, suffix, source.extension)
}

/// Compute the rename plan for the selected sources.
///
/// Entries follow the order of `sources`. Every selected id must name one of
/// the sources and every selected source must carry the supported extension;
/// otherwise the call fails without producing any entry. Two sources that
/// map to the same target both stay in the plan.
pub fn preview(
    sources: &[SourceFile],
    convention: &NamingConvention,
    selected: &BTreeSet<PathBuf>,
) -> Result<Vec<RenamePlanEntry>> {
    if convention.suffix.is_empty() {
        return Err(Error::EmptySuffix);
    }

    if let Some(unknown) = selected
        .iter()
        .find(|id| !sources.iter().any(|s| s.id() == id.as_path()))
    {
        return Err(Error::UnknownSelection(unknown.clone()));
    }

    let mut entries = Vec::new();
    for source in sources.iter().filter(|s| selected.contains(s.id())) {
        if !source.is_supported() {
            return Err(Error::InvalidExtension {
                path: source.path.clone(),
                extension: source.extension.clone(),
            });
        }

        let target_filename = target_filename(source, &convention.suffix);
        log::debug!("{} -> {}", source.path.display(), target_filename);
        entries.push(RenamePlanEntry {
            source: source.clone(),
            target_filename,
        });
    }

    Ok(entries)
}

/// Target names produced by more than one entry, in first-seen order.
pub fn colliding_targets(entries: &[RenamePlanEntry]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.target_filename.as_str()).or_insert(0) += 1;
    }

    let mut collisions = Vec::new();
    for entry in entries {
        let name = entry.target_filename.as_str();
        if counts[name] > 1 && !collisions.contains(&name) {
            collisions.push(name);
        }
    }
    collisions
}
