use crate::error::Error;
use crate::planner::{colliding_targets, RenamePlanEntry};
use crate::source::SourceFile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EntryStatus {
    Copied { destination: PathBuf, bytes: u64 },
    Skipped,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub source: PathBuf,
    pub original_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_filename: Option<String>,
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// Per-entry outcomes of an export plus the aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    pub destination_root: PathBuf,
    pub outcomes: Vec<EntryOutcome>,
    pub copied_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
    /// Target names written by more than one entry. The last entry in plan
    /// order is the one left on disk.
    pub collisions: Vec<String>,
}

impl ExportResult {
    fn push(&mut self, outcome: EntryOutcome) {
        match outcome.status {
            EntryStatus::Copied { .. } => self.copied_count += 1,
            EntryStatus::Skipped => self.skipped_count += 1,
            EntryStatus::Failed { .. } => self.failed_count += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Record sources that were listed but not selected.
    pub fn record_skipped<'a>(&mut self, sources: impl IntoIterator<Item = &'a SourceFile>) {
        for source in sources {
            self.push(EntryOutcome {
                source: source.path.clone(),
                original_filename: source.file_name(),
                target_filename: None,
                status: EntryStatus::Skipped,
            });
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed_count == 0
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Copy every entry to `destination_root/target_filename`.
///
/// Entries are processed one after another in plan order. A failing entry is
/// recorded and the batch carries on. When several entries share a target
/// name each copy overwrites the previous one, so the last entry wins.
pub fn export(entries: &[RenamePlanEntry], destination_root: &Path) -> ExportResult {
    let mut result = ExportResult {
        destination_root: destination_root.to_path_buf(),
        collisions: colliding_targets(entries)
            .into_iter()
            .map(str::to_string)
            .collect(),
        ..ExportResult::default()
    };

    if let Err(e) = fs::create_dir_all(destination_root) {
        let reason = format!(
            "failed to create output directory {}: {}",
            destination_root.display(),
            e
        );
        log::warn!("{}", reason);
        for entry in entries {
            result.push(failed(entry, reason.clone()));
        }
        return result;
    }

    let mut written: HashSet<&str> = HashSet::new();
    for entry in entries {
        if !is_plain_file_name(&entry.target_filename) {
            let reason = format!(
                "target '{}' is not a plain file name inside {}",
                entry.target_filename,
                destination_root.display()
            );
            log::warn!("{}", reason);
            result.push(failed(entry, reason));
            continue;
        }

        let destination = destination_root.join(&entry.target_filename);
        if !written.insert(entry.target_filename.as_str()) {
            log::warn!(
                "{} overwrites an earlier copy at {}",
                entry.source.path.display(),
                destination.display()
            );
        }

        match copy_entry(&entry.source.path, &destination) {
            Ok(bytes) => {
                log::debug!(
                    "Copied {} -> {} ({} bytes)",
                    entry.source.path.display(),
                    destination.display(),
                    bytes
                );
                result.push(EntryOutcome {
                    source: entry.source.path.clone(),
                    original_filename: entry.original_filename(),
                    target_filename: Some(entry.target_filename.clone()),
                    status: EntryStatus::Copied { destination, bytes },
                });
            },
            Err(e) => {
                log::warn!("{}", e);
                result.push(failed(entry, e.to_string()));
            },
        }
    }

    log::info!(
        "Export finished: {} copied, {} failed",
        result.copied_count,
        result.failed_count
    );
    result
}

fn failed(entry: &RenamePlanEntry, reason: String) -> EntryOutcome {
    EntryOutcome {
        source: entry.source.path.clone(),
        original_filename: entry.original_filename(),
        target_filename: Some(entry.target_filename.clone()),
        status: EntryStatus::Failed { reason },
    }
}

/// Exactly one normal path component, so joining it stays under the root.
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(&['/', '\\', '\0'][..]) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Byte-for-byte copy; an existing file at `to` is replaced.
fn copy_entry(from: &Path, to: &Path) -> Result<u64, Error> {
    if !from.is_file() {
        return Err(Error::CopyFailure {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "source file not found"),
        });
    }

    fs::copy(from, to).map_err(|source| Error::CopyFailure {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
