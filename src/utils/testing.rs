/// Fake executables for exercising helm and kubectl invocations
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script named `name` into `dir`
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lines appended to a call log by a fake tool, empty if it never ran
pub fn read_log(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
