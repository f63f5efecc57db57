use crate::error::{Error, Result};
use crate::source::SourceFile;
use globset::{Glob, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Build the set of selected source ids.
///
/// `names` are matched against source file names; a name matching nothing is
/// kept as given so the planner reports it as an unknown selection. `patterns`
/// are globs over file names. With neither, every source is selected.
pub fn select(
    sources: &[SourceFile],
    names: &[String],
    patterns: &[String],
) -> Result<BTreeSet<PathBuf>> {
    if names.is_empty() && patterns.is_empty() {
        return Ok(sources.iter().map(|s| s.path.clone()).collect());
    }

    let mut selected = BTreeSet::new();

    for name in names {
        let mut matched = false;
        for source in sources.iter().filter(|s| s.file_name() == *name) {
            selected.insert(source.path.clone());
            matched = true;
        }
        if !matched {
            selected.insert(PathBuf::from(name));
        }
    }

    if !patterns.is_empty() {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| Error::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| Error::InvalidGlob {
            pattern: patterns.join(","),
            source,
        })?;

        for source in sources {
            if set.is_match(source.file_name()) {
                selected.insert(source.path.clone());
            }
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<SourceFile> {
        ["raw/alpha_2k.mp4", "raw/beta_4k.mp4", "raw/gamma_2k.mp4"]
            .into_iter()
            .map(|p| SourceFile::from_path(p).unwrap())
            .collect()
    }

    #[test]
    fn test_select_all_by_default() {
        let selected = select(&sources(), &[], &[]).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_by_name() {
        let selected = select(&sources(), &["beta_4k.mp4".to_string()], &[]).unwrap();
        assert_eq!(
            selected.into_iter().collect::<Vec<_>>(),
            vec![PathBuf::from("raw/beta_4k.mp4")]
        );
    }

    #[test]
    fn test_unmatched_name_is_kept() {
        let selected = select(&sources(), &["nope.mp4".to_string()], &[]).unwrap();
        assert!(selected.contains(&PathBuf::from("nope.mp4")));
    }

    #[test]
    fn test_select_by_glob() {
        let selected = select(&sources(), &[], &["*_2k.mp4".to_string()]).unwrap();
        assert_eq!(
            selected.into_iter().collect::<Vec<_>>(),
            vec![
                PathBuf::from("raw/alpha_2k.mp4"),
                PathBuf::from("raw/gamma_2k.mp4")
            ]
        );
    }

    #[test]
    fn test_invalid_glob() {
        let err = select(&sources(), &[], &["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InvalidGlob { .. }));
    }
}
