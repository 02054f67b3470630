//! Shared JSON fixtures for dsviz tests: recorded tree snapshots and
//! backend operation histories, resolved through `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    trees: HashMap<String, String>,
    histories: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let path = fixtures_root().join(rel);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixture at {}", path.display()))
}

/// Names of all tree snapshot fixtures.
pub fn list_trees() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.trees.keys().cloned().collect();
    names.sort();
    names
}

/// Names of all operation history fixtures.
pub fn list_histories() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.histories.keys().cloned().collect();
    names.sort();
    names
}

/// Load a tree snapshot fixture into the caller's node type.
pub fn load_tree<T: DeserializeOwned>(name: &str) -> Result<T> {
    let rel = MANIFEST
        .trees
        .get(name)
        .ok_or_else(|| anyhow!("unknown tree fixture '{name}'"))?;
    load_json(rel)
}

/// Load an operation history fixture into the caller's step type.
pub fn load_history<T: DeserializeOwned>(name: &str) -> Result<T> {
    let rel = MANIFEST
        .histories
        .get(name)
        .ok_or_else(|| anyhow!("unknown history fixture '{name}'"))?;
    load_json(rel)
}
