use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn vrname() -> Command {
    let mut cmd = Command::cargo_bin("vrname").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        temp.child("raw").child(name).write_str(content).unwrap();
    }
    temp
}

#[test]
fn test_help() {
    vrname()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tag VR video filenames so players detect their projection automatically",
        ));
}

#[test]
fn test_version_summary_and_json() {
    vrname()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vrname "));

    let output = vrname()
        .args(["version", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "vrname");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_players_lists_catalog() {
    vrname()
        .arg("players")
        .assert()
        .success()
        .stdout(predicate::str::contains("universal"))
        .stdout(predicate::str::contains("playa_vr"))
        .stdout(predicate::str::contains("skybox_vr"));
}

#[test]
fn test_conventions_for_player() {
    vrname()
        .args(["conventions", "playa_vr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("180 LR"))
        .stdout(predicate::str::contains("_180_LR"));
}

#[test]
fn test_conventions_unknown_player_is_invalid_input() {
    vrname()
        .args(["conventions", "winamp"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("winamp"));
}

#[test]
fn test_preview_summary() {
    let temp = workspace(&[("b.mp4", "b"), ("a.mp4", "a"), ("notes.txt", "n")]);

    vrname()
        .current_dir(temp.path())
        .args([
            "preview",
            "--player",
            "playa_vr",
            "--convention",
            "180 LR",
            "--preview",
            "summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mp4 -> a_180_LR.mp4"))
        .stdout(predicate::str::contains("b.mp4 -> b_180_LR.mp4"))
        .stdout(predicate::str::contains("notes.txt").not());

    // Nothing is written by a preview
    temp.child("fixed_metadata").assert(predicate::path::missing());
}

#[test]
fn test_preview_json_with_selection() {
    let temp = workspace(&[("a.mp4", "a"), ("b.mp4", "b")]);

    let output = vrname()
        .args(["-C"])
        .arg(temp.path())
        .args(["preview", "--suffix", "_MKX200", "--file", "b.mp4", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "preview");
    assert_eq!(json["summary"]["scanned"], 2);
    assert_eq!(json["preview"][0]["original"], "b.mp4");
    assert_eq!(json["preview"][0]["new"], "b_MKX200.mp4");
}

#[test]
fn test_preview_unknown_selection_is_invalid_input() {
    let temp = workspace(&[("a.mp4", "a")]);

    vrname()
        .current_dir(temp.path())
        .args(["preview", "-p", "playa_vr", "-c", "180 LR", "-f", "ghost.mp4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ghost.mp4"));
}

#[test]
fn test_preview_missing_convention_is_invalid_input() {
    let temp = workspace(&[("a.mp4", "a")]);

    vrname()
        .current_dir(temp.path())
        .args(["preview", "-p", "playa_vr"])
        .assert()
        .code(2);
}

#[test]
fn test_export_with_yes_copies_files() {
    let temp = workspace(&[("Test_1_2k_test_low_mp4.mp4", "frames")]);

    vrname()
        .current_dir(temp.path())
        .args(["export", "-p", "playa_vr", "-c", "_180_LR", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1, failed 0, skipped 0"));

    temp.child("fixed_metadata/Test_1_2k_test_low_mp4_180_LR.mp4")
        .assert("frames");
    temp.child("raw/Test_1_2k_test_low_mp4.mp4").assert("frames");
}

#[test]
fn test_export_json_counts() {
    let temp = workspace(&[("a.mp4", "a"), ("b.mp4", "b"), ("c.mp4", "c")]);

    let output = vrname()
        .current_dir(temp.path())
        .args([
            "export",
            "-p",
            "skybox_vr",
            "-c",
            "3D Half SBS",
            "--select",
            "[ab].mp4",
            "--output-dir",
            "out",
            "--output",
            "json",
            "--yes",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["summary"]["copied_count"], 2);
    assert_eq!(json["summary"]["skipped_count"], 1);
    temp.child("out/a_3dh.mp4").assert("a");
    temp.child("out/b_3dh.mp4").assert("b");
    temp.child("out/c_3dh.mp4").assert(predicate::path::missing());
}

#[test]
fn test_export_without_yes_refuses_when_not_interactive() {
    let temp = workspace(&[("a.mp4", "a")]);

    vrname()
        .current_dir(temp.path())
        .args(["export", "-p", "playa_vr", "-c", "180 LR"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    temp.child("fixed_metadata").assert(predicate::path::missing());
}

#[test]
fn test_config_supplies_player_and_output_dir() {
    let temp = workspace(&[("a.mp4", "a")]);
    temp.child(".vrname/config.toml")
        .write_str("[defaults]\nplayer = \"pigasus_vr\"\noutput_dir = \"tagged\"\n")
        .unwrap();

    vrname()
        .current_dir(temp.path())
        .args(["export", "-c", "180 SBS", "--yes", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("tagged/a_180_sbs.mp4").assert("a");
}

#[test]
fn test_export_with_failures_exits_with_one() {
    let temp = workspace(&[("a.mp4", "a"), ("b.mp4", "b")]);
    temp.child("blocked").write_str("a file, not a directory").unwrap();

    let output = vrname()
        .current_dir(temp.path())
        .args([
            "export",
            "-p",
            "playa_vr",
            "-c",
            "180 LR",
            "--output-dir",
            "blocked",
            "--output",
            "json",
            "--yes",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["summary"]["copied_count"], 0);
    assert_eq!(json["summary"]["failed_count"], 2);
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 of 2 files failed"));
}

#[test]
fn test_suffix_with_path_separator_is_invalid_input() {
    let temp = workspace(&[("a.mp4", "a")]);

    vrname()
        .current_dir(temp.path())
        .args(["export", "--suffix", "/../../escaped", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid suffix"));

    temp.child("escaped.mp4").assert(predicate::path::missing());
    temp.child("fixed_metadata").assert(predicate::path::missing());
}

#[test]
fn test_export_into_input_dir_is_invalid_input() {
    let temp = workspace(&[("a.mp4", "a")]);

    vrname()
        .current_dir(temp.path())
        .args(["export", "-p", "playa_vr", "-c", "180 LR", "--output-dir", "raw", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is the input directory"));

    temp.child("raw/a_180_LR.mp4").assert(predicate::path::missing());
}
