//! CLI tests: run the vergen binary inside scratch git repositories.
//!
//! Each test gets its own tempdir repo. Tests return early when git is not
//! installed.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(repo: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(repo)
        .env("GIT_CEILING_DIRECTORIES", repo.parent().unwrap())
        .env("GIT_AUTHOR_NAME", "vergen")
        .env("GIT_AUTHOR_EMAIL", "vergen@example.com")
        .env("GIT_COMMITTER_NAME", "vergen")
        .env("GIT_COMMITTER_EMAIL", "vergen@example.com")
        .output()
        .expect("failed to run git");
    assert!(out.status.success(), "git {:?} failed: {}", args, all_output(&out));
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

/// Repo with one commit touching `main.go`.
fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    fs::write(dir.join("main.go"), "package main\n").unwrap();
    git(dir, &["add", "main.go"]);
    git(dir, &["commit", "-q", "-m", "initial"]);
}

fn vergen(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vergen"))
        .args(args)
        .current_dir(cwd)
        .env("GIT_CEILING_DIRECTORIES", cwd.parent().unwrap())
        .output()
        .expect("failed to execute vergen binary")
}

fn all_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

// ── Generate ────────────────────────────────────────────────────

#[test]
fn test_cli_generate_tagged_clean() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    git(&repo, &["tag", "v1.2.3"]);
    let hash = git(&repo, &["rev-parse", "HEAD"]);

    let out = vergen(&repo, &["generate"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));

    let written = fs::read_to_string(repo.join("version/version.go")).unwrap();
    assert!(written.starts_with("package version\n"), "{}", written);
    assert!(written.contains("VgVersion   = \"v1.2.3\""), "{}", written);
    assert!(written.contains(&format!("VgHash      = \"{}\"", hash)), "{}", written);
    assert!(written.contains("VgClean     = true"), "{}", written);
}

#[test]
fn test_cli_generate_dirty_and_untagged() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    fs::write(repo.join("main.go"), "package main\n\nfunc main() {}\n").unwrap();

    let out = vergen(&repo, &["generate", "--suffix", "-dirty"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));

    let written = fs::read_to_string(repo.join("version/version.go")).unwrap();
    assert!(written.contains("VgVersion   = \"0.1.0-dirty\""), "{}", written);
    assert!(written.contains("VgClean     = false"), "{}", written);
}

#[test]
fn test_cli_regenerating_committed_file_stays_clean() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);

    let out = vergen(&repo, &["generate"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));
    git(&repo, &["add", "version/version.go"]);
    git(&repo, &["commit", "-q", "-m", "add version"]);
    git(&repo, &["tag", "v2.0.0"]);

    // Only the generated file differs from HEAD after this run.
    let out = vergen(&repo, &["generate"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));
    let out = vergen(&repo, &["generate"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));

    let written = fs::read_to_string(repo.join("version/version.go")).unwrap();
    assert!(written.contains("VgVersion   = \"v2.0.0\""), "{}", written);
    assert!(written.contains("VgClean     = true"), "{}", written);
}

#[test]
fn test_cli_generate_rust_to_custom_path() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    git(&repo, &["tag", "v0.3.0"]);

    let out = vergen(&repo, &["generate", "src/build_info.rs", "--lang", "rust"]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));

    let written = fs::read_to_string(repo.join("src/build_info.rs")).unwrap();
    assert!(written.contains("pub const VG_VERSION: &str = \"v0.3.0\";"), "{}", written);
    assert!(written.contains("pub const VG_CLEAN: bool = true;"), "{}", written);
}

#[test]
fn test_cli_generate_with_repo_flag_and_config_file() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    let work = tmp.path().join("work");
    fs::create_dir(&repo).unwrap();
    fs::create_dir(&work).unwrap();
    init_repo(&repo);
    fs::write(repo.join("main.go"), "package main // edited\n").unwrap();
    fs::write(
        work.join("vergen.toml"),
        "package_name = \"buildinfo\"\nignore_files = [\"main.go\"]\n",
    )
    .unwrap();

    let repo_arg = repo.to_string_lossy().into_owned();
    let out = vergen(&work, &["generate", "--repo", &repo_arg]);
    assert!(out.status.success(), "generate failed: {}", all_output(&out));

    let written = fs::read_to_string(work.join("buildinfo/buildinfo.go")).unwrap();
    assert!(written.starts_with("package buildinfo\n"), "{}", written);
    assert!(written.contains("VgClean     = true"), "{}", written);
}

// ── Failures ────────────────────────────────────────────────────

#[test]
fn test_cli_outside_repository_fails_without_writing() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("plain");
    fs::create_dir(&dir).unwrap();

    let out = vergen(&dir, &["generate"]);
    assert!(!out.status.success());
    assert!(all_output(&out).contains("rev-parse"), "{}", all_output(&out));
    assert!(!dir.join("version").exists());
}

// ── Dry run & info ──────────────────────────────────────────────

#[test]
fn test_cli_dry_run_prints_only() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    git(&repo, &["tag", "v1.0.0"]);

    let out = vergen(&repo, &["generate", "--dry-run", "-q"]);
    assert!(out.status.success(), "dry run failed: {}", all_output(&out));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("VgVersion   = \"v1.0.0\""), "{}", stdout);
    assert!(!repo.join("version").exists());
}

#[test]
fn test_cli_info_json() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    git(&repo, &["tag", "v1.0.0"]);
    let hash = git(&repo, &["rev-parse", "HEAD"]);

    let out = vergen(&repo, &["info", "--json", "-q"]);
    assert!(out.status.success(), "info failed: {}", all_output(&out));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["version"], "v1.0.0");
    assert_eq!(value["commit_hash"], hash.as_str());
    assert_eq!(value["clean"], true);
}
