//! Integration tests for the CLI surface.
//!
//! These run the binary without a terminal, so interactive commands take
//! their non-interactive fallback paths.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn aihub(hub: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("aihub"));
    cmd.args(["--hub", &hub.to_string_lossy()]);
    cmd
}

fn seed_record(hub: &Path, name: &str, tags: &[&str]) {
    let dir = hub.join("prompts").join("comfyui");
    fs::create_dir_all(&dir).unwrap();
    let payload = serde_json::json!({
        "name": name,
        "positive": "a detailed scene",
        "negative": "lowres",
        "tags": tags,
        "category": "general"
    });
    fs::write(
        dir.join(format!("{name}.json")),
        serde_json::to_string_pretty(&payload).unwrap(),
    )
    .unwrap();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("aihub"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Console for local AI tools"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("aihub"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_empty_library() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aihub(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts in library yet"));
    Ok(())
}

#[test]
fn cli_list_shows_seeded_records() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "sunset", &["warm"]);
    seed_record(temp.path(), "portrait", &["studio"]);

    aihub(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("portrait"))
        .stdout(predicate::str::contains("sunset"));
    Ok(())
}

#[test]
fn cli_list_search_filters_by_tag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "sunset", &["warm"]);
    seed_record(temp.path(), "portrait", &["studio"]);

    aihub(temp.path())
        .args(["list", "--search", "Studio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("portrait"))
        .stdout(predicate::str::contains("sunset").not());
    Ok(())
}

#[test]
fn cli_view_prints_export_layout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "sunset", &["warm"]);

    aihub(temp.path())
        .args(["view", "sunset"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Prompt: sunset"))
        .stdout(predicate::str::contains("Positive Prompt:\na detailed scene"));
    Ok(())
}

#[test]
fn cli_view_missing_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aihub(temp.path())
        .args(["view", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn cli_export_writes_text_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "sunset", &["warm"]);
    let output = temp.path().join("sunset.txt");

    aihub(temp.path())
        .args(["export", "sunset", &output.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let text = fs::read_to_string(&output)?;
    assert!(text.starts_with("Prompt: sunset"));
    Ok(())
}

#[test]
fn cli_import_reports_count_and_collisions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "existing", &["keep"]);

    let payload = serde_json::json!([
        {
            "name": "existing",
            "positive": "overwrite attempt",
            "negative": "",
            "tags": [],
            "category": "general"
        },
        {
            "name": "fresh",
            "positive": "p",
            "negative": "n",
            "tags": [],
            "category": "general"
        }
    ]);
    let file = temp.path().join("batch.json");
    fs::write(&file, payload.to_string())?;

    aihub(temp.path())
        .args(["import", &file.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 record"))
        .stdout(predicate::str::contains("existing"));

    // The collided record is untouched on disk.
    let kept = fs::read_to_string(
        temp.path()
            .join("prompts")
            .join("comfyui")
            .join("existing.json"),
    )?;
    assert!(kept.contains("a detailed scene"));
    Ok(())
}

#[test]
fn cli_import_unparseable_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("garbage.json");
    fs::write(&file, "<<<")?;

    aihub(temp.path())
        .args(["import", &file.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn cli_delete_with_yes_removes_record() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "ephemeral", &[]);

    aihub(temp.path())
        .args(["delete", "ephemeral", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'ephemeral'"));

    assert!(!temp
        .path()
        .join("prompts")
        .join("comfyui")
        .join("ephemeral.json")
        .exists());
    Ok(())
}

#[test]
fn cli_delete_missing_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aihub(temp.path())
        .args(["delete", "ghost", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn cli_delete_without_terminal_requires_yes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "guarded", &[]);

    aihub(temp.path())
        .args(["delete", "guarded"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    Ok(())
}

#[test]
fn cli_add_without_terminal_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aihub(temp.path())
        .arg("add")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("interactive"));
    Ok(())
}

#[test]
fn cli_hub_without_terminal_dumps_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aihub(temp.path())
        .arg("hub")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Tools Hub"))
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("ollama"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("aihub"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("aihub"));
    Ok(())
}

#[test]
fn cli_respects_library_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    seed_record(temp.path(), "comfy-only", &[]);

    // Same hub, different library: the record is not visible.
    aihub(temp.path())
        .args(["--library", "general", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comfy-only").not());
    Ok(())
}
