#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn eggtally_cmd() -> Command {
    let mut cmd = Command::cargo_bin("eggtally").unwrap();
    cmd.env_remove("EGGTALLY_ROOT");
    cmd.env_remove("EGGTALLY_LOG");
    cmd
}

/// Command running inside an initialized ledger
pub fn ledger_cmd(root: &Path) -> Command {
    let mut cmd = eggtally_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_ledger(root: &Path) {
    eggtally_cmd().arg("init").arg(root).assert().success();
}

pub fn add(root: &Path, date: &str, count: &str, note: &str) {
    ledger_cmd(root)
        .args(["add", count, "--date", date, "--note", note])
        .assert()
        .success();
}

pub fn ledger_file(root: &Path) -> std::path::PathBuf {
    root.join(".eggtally").join("eggtally.entries.v1.json")
}
