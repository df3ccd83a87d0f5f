#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

/// Write `contents` to `name` inside `dir`, returning the path.
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
