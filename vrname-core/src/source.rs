use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The one container extension the planner accepts (compared case-insensitively).
pub const SUPPORTED_EXTENSION: &str = ".mp4";

/// A candidate video file. Its path doubles as its selection identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub stem: String,
    /// Extension including the leading dot, exactly as it appears on disk.
    pub extension: String,
}

impl SourceFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(Error::InvalidFileName(path));
        };
        let (stem, extension) = split_extension(file_name);
        let (stem, extension) = (stem.to_string(), extension.to_string());
        Ok(Self {
            path,
            stem,
            extension,
        })
    }

    pub fn id(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    pub fn is_supported(&self) -> bool {
        self.extension.eq_ignore_ascii_case(SUPPORTED_EXTENSION)
    }
}

/// Split a file name into stem and extension (with its dot). Leading dots
/// belong to the stem, so `.mp4` has no extension.
fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(pos) => file_name.split_at(leading + pos),
        None => (file_name, ""),
    }
}

/// List the supported video files directly inside `dir`, sorted by name.
///
/// The directory is created when missing so a fresh setup starts with an
/// empty list rather than an error.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<SourceFile>> {
    fs::create_dir_all(dir)?;

    let mut sources = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| Error::InputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        // Symlinks count when they point at a regular file
        if !entry.path().is_file() {
            continue;
        }

        match SourceFile::from_path(entry.path()) {
            Ok(source) if source.is_supported() => sources.push(source),
            Ok(_) => {},
            Err(e) => log::warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    log::debug!("Found {} video files in {}", sources.len(), dir.display());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_splits_stem_and_extension() {
        let source = SourceFile::from_path("raw/Test_1_2k_test_low_mp4.mp4").unwrap();
        assert_eq!(source.stem, "Test_1_2k_test_low_mp4");
        assert_eq!(source.extension, ".mp4");
        assert_eq!(source.file_name(), "Test_1_2k_test_low_mp4.mp4");
        assert!(source.is_supported());
    }

    #[test]
    fn test_extension_case_preserved() {
        let source = SourceFile::from_path("CLIP.MP4").unwrap();
        assert_eq!(source.stem, "CLIP");
        assert_eq!(source.extension, ".MP4");
        assert!(source.is_supported());
    }

    #[test]
    fn test_split_extension_edge_cases() {
        assert_eq!(split_extension("a.b.mp4"), ("a.b", ".mp4"));
        assert_eq!(split_extension(".mp4"), (".mp4", ""));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension("..hidden.mp4"), ("..hidden", ".mp4"));
    }

    #[test]
    fn test_unsupported_extension() {
        let source = SourceFile::from_path("movie.mkv").unwrap();
        assert!(!source.is_supported());
        assert!(!SourceFile::from_path("movie").unwrap().is_supported());
    }

    #[test]
    fn test_scan_input_dir_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        for name in ["b.mp4", "a.MP4", "notes.txt", "c.mkv"] {
            fs::write(temp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(temp.path().join("nested.mp4")).unwrap();

        let sources = scan_input_dir(temp.path()).unwrap();
        let names: Vec<String> = sources.iter().map(SourceFile::file_name).collect();
        assert_eq!(names, vec!["a.MP4", "b.mp4"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_file_symlinks() {
        let temp = TempDir::new().unwrap();
        let raw = temp.path().join("raw");
        fs::create_dir_all(&raw).unwrap();
        let target = temp.path().join("library.mp4");
        fs::write(&target, b"x").unwrap();
        std::os::unix::fs::symlink(&target, raw.join("linked.mp4")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.mp4"), raw.join("broken.mp4")).unwrap();

        let sources = scan_input_dir(&raw).unwrap();
        let names: Vec<String> = sources.iter().map(SourceFile::file_name).collect();
        assert_eq!(names, vec!["linked.mp4"]);
    }

    #[test]
    fn test_scan_creates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let raw = temp.path().join("raw");
        let sources = scan_input_dir(&raw).unwrap();
        assert!(sources.is_empty());
        assert!(raw.is_dir());
    }
}
