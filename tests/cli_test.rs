/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::realistic_bookmarks;
use predicates::prelude::*;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bookmark-parser"))
}

#[test]
fn test_cli_stats_command_with_file() {
    let (_dir, path) = realistic_bookmarks();

    cli()
        .arg("--file")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark Statistics"))
        .stdout(predicate::str::contains("Total urls: 9"))
        .stdout(predicate::str::contains("Total folders: 4"))
        .stdout(predicate::str::contains("bookmark_bar (Bookmarks bar): 6 urls, 1 folders, 3 subfolders"));
}

#[test]
fn test_cli_stats_json() {
    let (_dir, path) = realistic_bookmarks();

    let output = cli().arg("stats").arg("--json").arg("--file").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats[0]["section"], "bookmark_bar");
    assert_eq!(stats[0]["urls"], 6);
    assert_eq!(stats[1]["section"], "other");
    assert_eq!(stats[2]["urls"], 1);
}

#[test]
fn test_cli_stats_uses_home_default_path() {
    let temp_home = tempfile::TempDir::new().unwrap();
    let (_dir, fixture) = realistic_bookmarks();

    let chrome_dir = temp_home.path().join(".config/google-chrome/Default");
    std::fs::create_dir_all(&chrome_dir).unwrap();
    std::fs::copy(&fixture, chrome_dir.join("Bookmarks")).unwrap();

    if cfg!(target_os = "linux") {
        cli()
            .env("HOME", temp_home.path())
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total urls: 9"))
            .stdout(predicate::str::contains("Bookmark file: ~/.config/google-chrome/Default/Bookmarks"));
    }
}

#[test]
fn test_cli_show_folder() {
    let (_dir, path) = realistic_bookmarks();

    cli()
        .args(["show", "bookmark_bar/Work", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BookmarkFolder("))
        .stdout(predicate::str::contains("path=\"Bookmarks bar/Work\""))
        .stdout(predicate::str::contains("📂 -> 'Projects'/ (2 urls)"))
        .stdout(predicate::str::contains("🔗 -> (https://mail.example.com/)"));
}

#[test]
fn test_cli_urls_nested_with_browser_tag() {
    let (_dir, path) = realistic_bookmarks();

    cli()
        .args(["--browser", "brave", "urls", "Bookmarks bar/Work", "--nested", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mail\thttps://mail.example.com/"))
        .stdout(predicate::str::contains("Old wiki\thttps://wiki.example.com/old"));
}

#[test]
fn test_cli_folders_nested() {
    let (_dir, path) = realistic_bookmarks();

    cli()
        .args(["folders", "--nested", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarks bar/Work/Projects/Archive"));
}

#[test]
fn test_cli_urls_on_link_fails() {
    let (_dir, path) = realistic_bookmarks();

    cli()
        .args(["urls", "bookmark_bar/Rust", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a link, not a folder"));
}

#[test]
fn test_cli_missing_file() {
    let temp = tempfile::TempDir::new().unwrap();

    cli()
        .arg("--file")
        .arg(temp.path().join("Bookmarks"))
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bookmark file not found"));
}

#[test]
fn test_cli_unknown_browser_without_file() {
    cli()
        .args(["--browser", "netscape", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Browser not supported"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cli().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse Chromium-family browser bookmarks"));
}
