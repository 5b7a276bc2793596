//! End-to-end tests driving the `here` binary.
//!
//! Every successful run passes `-n` so no clipboard backend is needed.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct TestEnv {
    _dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = std::fs::canonicalize(dir.path()).expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// `here` running inside the temp dir, with an isolated config.
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("here").expect("Failed to find here binary");
        cmd.current_dir(&self.root)
            .arg("--config")
            .arg(self.root.join("no-config.yaml"))
            .env_remove("NO_COLOR")
            .arg("-c");
        cmd
    }

    fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

fn line(path: &Path) -> String {
    format!("{}\n", path.display())
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("here")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--from-where"));
}

#[test]
fn test_short_v_prints_version() {
    Command::cargo_bin("here")
        .unwrap()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_prints_cwd_by_default() {
    let env = TestEnv::new();
    env.command()
        .arg("-n")
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root)));
}

#[test]
fn test_joins_segment_with_cwd() {
    let env = TestEnv::new();
    std::fs::create_dir(env.root.join("subdir")).unwrap();
    env.command()
        .args(["-n", "subdir"])
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root.join("subdir"))));
}

#[test]
fn test_missing_segment_still_resolves() {
    let env = TestEnv::new();
    env.command()
        .args(["-n", "ghost/../later.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root.join("later.txt"))));
}

#[test]
fn test_folder_flag_strips_file_name() {
    let env = TestEnv::new();
    std::fs::write(env.root.join("notes.txt"), "x").unwrap();
    env.command()
        .args(["-n", "-f", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root)));
}

#[test]
fn test_wrap_quote() {
    let env = TestEnv::new();
    env.command()
        .args(["-n", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("\"{}\"\n", env.root.display())));
}

#[test]
fn test_search_without_term_exits_1() {
    let env = TestEnv::new();
    env.command()
        .arg("-w")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot search for ."));
}

#[test]
fn test_search_not_found_exits_2() {
    let env = TestEnv::new();
    let config = env.write_config("search_command: [nonexistent_binary_xyz]\n");
    Command::cargo_bin("here")
        .unwrap()
        .current_dir(&env.root)
        .args(["-c", "--config"])
        .arg(&config)
        .args(["-w", "missingtool"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Could not find missingtool"));
}

#[cfg(unix)]
#[test]
fn test_search_single_candidate() {
    let env = TestEnv::new();
    std::fs::create_dir(env.root.join("bin")).unwrap();
    let tool = env.root.join("bin").join("tool");
    std::fs::write(&tool, "").unwrap();
    // `echo <dir>/bin/<query>` stands in for `which`.
    let config = env.write_config(&format!(
        "search_command: [sh, -c, 'echo {}/bin/$0']\n",
        env.root.display()
    ));

    Command::cargo_bin("here")
        .unwrap()
        .current_dir(&env.root)
        .args(["-c", "-n", "-f", "--config"])
        .arg(&config)
        .args(["-w", "tool"])
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root.join("bin"))));
}

#[test]
fn test_change_directory_on_file_exits_3() {
    let env = TestEnv::new();
    std::fs::write(env.root.join("file.txt"), "x").unwrap();
    env.command()
        .args(["-n", "-d", "file.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_silent_suppresses_errors() {
    let env = TestEnv::new();
    env.command()
        .args(["--silent", "-w"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_names_flag() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "-w"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Caused by flag -w/--from-where"));
}

#[test]
fn test_verbose_narrates_skip() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not copying to clipboard"))
        .stdout(predicate::str::ends_with(line(&env.root)));
}

#[test]
fn test_verbose_and_silent_conflict() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "--silent"])
        .assert()
        .code(64);
}

#[test]
fn test_invalid_config_fails() {
    let env = TestEnv::new();
    let config = env.write_config("search_command: []\n");
    Command::cargo_bin("here")
        .unwrap()
        .current_dir(&env.root)
        .arg("--config")
        .arg(&config)
        .arg("-n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_config_can_disable_copy() {
    let env = TestEnv::new();
    let config = env.write_config("copy: false\n");
    // No -n: the config alone keeps the clipboard out of it.
    Command::cargo_bin("here")
        .unwrap()
        .current_dir(&env.root)
        .args(["-c", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::diff(line(&env.root)));
}
