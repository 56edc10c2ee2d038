//! Shared utilities for integration tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use user_agent_router::RouteTable;
use user_agent_router::RouterConfig;

/// Path to the route table shipped with the crate.
#[allow(dead_code)]
pub fn shipped_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/user-agent.toml")
}

/// The built-in user-agent table, compiled.
#[allow(dead_code)]
pub fn user_agent_table() -> RouteTable {
    RouteTable::new(&RouterConfig::user_agent()).expect("built-in table is valid")
}

/// Write `content` to a temporary TOML file kept alive by the returned handle.
#[allow(dead_code)]
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
