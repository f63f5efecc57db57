use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vrname_core::{export, preview, Catalog, EntryStatus, NamingConvention, SourceFile};

fn write_source(dir: &Path, name: &str, content: &[u8]) -> SourceFile {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    SourceFile::from_path(path).unwrap()
}

fn select_all(sources: &[SourceFile]) -> BTreeSet<PathBuf> {
    sources.iter().map(|s| s.path.clone()).collect()
}

fn playa_180_lr() -> NamingConvention {
    Catalog::builtin()
        .find_convention("playa_vr", "_180_LR")
        .unwrap()
        .clone()
}

#[test]
fn test_export_end_to_end() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw");
    let out = temp.path().join("fixed_metadata");
    let content = b"\x00\x00\x00\x18ftypmp42 not really a video";
    let sources = vec![write_source(&raw, "Test_1_2k_test_low_mp4.mp4", content)];

    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();
    assert_eq!(entries[0].target_filename, "Test_1_2k_test_low_mp4_180_LR.mp4");

    let result = export(&entries, &out);
    assert_eq!(result.copied_count, 1);
    assert_eq!(result.failed_count, 0);
    assert!(result.collisions.is_empty());

    let copied = out.join("Test_1_2k_test_low_mp4_180_LR.mp4");
    assert_eq!(fs::read(&copied).unwrap(), content);
    // The source stays where it was
    assert_eq!(fs::read(&sources[0].path).unwrap(), content);
    assert_eq!(
        result.outcomes[0].status,
        EntryStatus::Copied {
            destination: copied,
            bytes: content.len() as u64,
        }
    );
}

#[test]
fn test_export_continues_after_missing_source() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw");
    let out = temp.path().join("out");

    let sources = vec![
        write_source(&raw, "one.mp4", b"one"),
        write_source(&raw, "two.mp4", b"two"),
        write_source(&raw, "three.mp4", b"three"),
    ];
    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();

    // The middle file disappears between preview and export
    fs::remove_file(&sources[1].path).unwrap();

    let result = export(&entries, &out);
    assert_eq!(result.copied_count, 2);
    assert_eq!(result.failed_count, 1);
    assert_eq!(result.skipped_count, 0);
    assert!(!result.is_success());

    assert_eq!(fs::read(out.join("one_180_LR.mp4")).unwrap(), b"one");
    assert_eq!(fs::read(out.join("three_180_LR.mp4")).unwrap(), b"three");
    assert!(!out.join("two_180_LR.mp4").exists());

    match &result.outcomes[1].status {
        EntryStatus::Failed { reason } => assert!(reason.contains("two.mp4"), "{}", reason),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_export_collision_last_entry_wins() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    let sources = vec![
        write_source(&temp.path().join("first"), "A.mp4", b"first"),
        write_source(&temp.path().join("second"), "A.mp4", b"second"),
    ];
    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].target_filename, "A_180_LR.mp4");
    assert_eq!(entries[1].target_filename, "A_180_LR.mp4");

    let result = export(&entries, &out);
    assert_eq!(result.copied_count, 2);
    assert_eq!(result.failed_count, 0);
    assert_eq!(result.collisions, vec!["A_180_LR.mp4".to_string()]);
    assert_eq!(fs::read(out.join("A_180_LR.mp4")).unwrap(), b"second");

    // Reversing the plan order reverses the survivor
    let reversed: Vec<_> = entries.into_iter().rev().collect();
    export(&reversed, &out);
    assert_eq!(fs::read(out.join("A_180_LR.mp4")).unwrap(), b"first");
}

#[test]
fn test_export_overwrites_existing_destination() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("clip_180_LR.mp4"), b"stale and much longer").unwrap();

    let sources = vec![write_source(&temp.path().join("raw"), "clip.mp4", b"fresh")];
    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();
    let result = export(&entries, &out);

    assert_eq!(result.copied_count, 1);
    assert_eq!(fs::read(out.join("clip_180_LR.mp4")).unwrap(), b"fresh");
}

#[test]
fn test_export_creates_nested_destination() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("a").join("b").join("c");
    let sources = vec![write_source(&temp.path().join("raw"), "x.mp4", b"x")];
    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();

    let result = export(&entries, &out);
    assert_eq!(result.copied_count, 1);
    assert!(out.join("x_180_LR.mp4").is_file());
}

#[test]
fn test_export_unwritable_destination_fails_every_entry() {
    let temp = TempDir::new().unwrap();
    // A regular file where the output directory should be
    let blocker = temp.path().join("out");
    fs::write(&blocker, b"not a directory").unwrap();

    let sources = vec![
        write_source(&temp.path().join("raw"), "a.mp4", b"a"),
        write_source(&temp.path().join("raw"), "b.mp4", b"b"),
    ];
    let entries = preview(&sources, &playa_180_lr(), &select_all(&sources)).unwrap();
    let result = export(&entries, &blocker);

    assert_eq!(result.copied_count, 0);
    assert_eq!(result.failed_count, 2);
    assert!(result
        .outcomes
        .iter()
        .all(|o| matches!(o.status, EntryStatus::Failed { .. })));
}

#[test]
fn test_export_empty_plan() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let result = export(&[], &out);
    assert_eq!(result.total(), 0);
    assert!(result.is_success());
    assert!(out.is_dir());
}
