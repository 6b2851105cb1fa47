//! Test harness for lsr integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use lsr::test_utils::TestDir;

pub fn run_lsr(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_lsr");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run lsr");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Names from bare-mode output, one per line, without the trailing space.
pub fn bare_names(stdout: &str) -> Vec<&str> {
    stdout.lines().map(str::trim_end).collect()
}

/// Lines of the form `<path>:` that introduce a subdirectory listing.
pub fn headers(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.ends_with(':')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
