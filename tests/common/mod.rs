#![allow(dead_code)]

use assert_cmd::Command;
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

pub fn slipbox_cmd() -> Command {
    let mut cmd = Command::cargo_bin("slipbox").unwrap();
    cmd.env_remove("SLIPBOX_ROOT");
    cmd.env_remove("SLIPBOX_DATA");
    cmd.env_remove("PORT");
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Write a document and backdate it by `age_secs`
pub fn write_doc(dir: &Path, name: &str, text: &str, age_secs: u64) {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    let file = File::options().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .unwrap();
}
