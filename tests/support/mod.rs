use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Ring 5-4-0-1-2-3-7-6-5 with a chord 5-2
pub const RING: &str = "5,4\n4,0\n0,1\n1,2\n2,3\n3,7\n7,6\n6,5\n5,2\n";

/// Weighted digraph whose distances from 0 are 0 4 3 6 8 14
#[allow(dead_code)]
pub const WEIGHTED: &str = "# sample\nfrom,to,weight\n0,1,4\n0,2,3\n1,2,1\n1,3,2\n2,3,4\n3,4,2\n4,5,6\n";

/// Two equal-cost routes from 0 to 3
#[allow(dead_code)]
pub const DIAMOND: &str = "0,1\n0,2\n1,3\n2,3\n";

/// Get a Command for phoenix, isolated from the user's config and log env
pub fn phoenix() -> Command {
    let mut cmd = cargo_bin_cmd!("phoenix");
    cmd.env("PHOENIX_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG")
        .env_remove("PHOENIX_LOG")
        .env_remove("PHOENIX_LOG_LEVEL");
    cmd
}

/// Write an edge-list file into `dir`
pub fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
