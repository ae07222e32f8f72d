//! Test fixture loader for Chronicle golden wire datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load the `wire` section of a fixture as the exact bytes a peer would send.
pub fn load_wire_bytes(relative_path: &str) -> Vec<u8> {
    let value = load_fixture_value(relative_path);
    let wire = value
        .get("wire")
        .unwrap_or_else(|| panic!("Fixture {} has no `wire` section", relative_path));
    serde_json::to_vec(wire)
        .unwrap_or_else(|e| panic!("Failed to re-encode fixture {}: {}", relative_path, e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_clock_files_exist() {
        let files = [
            "golden/clock/full_mixed_identities.json",
            "golden/clock/compact_unique_nodes.json",
            "golden/clock/zero_and_duplicate_entries.json",
            "golden/clock/missing_version.json",
            "golden/clock/missing_replica_id.json",
            "golden/clock/missing_node_nid.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_clock_fixture_parses() {
        let files = list_fixtures("golden/clock");
        assert!(!files.is_empty());
        for path in files {
            let content = std::fs::read_to_string(&path).unwrap();
            let value: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert!(value.get("wire").is_some(), "{} lacks wire", path.display());
        }
    }

    #[test]
    fn wire_bytes_are_valid_json() {
        let bytes = load_wire_bytes("golden/clock/full_mixed_identities.json");
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(parsed.get("entries").is_some());
    }
}
