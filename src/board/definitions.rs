//! Territory-definition dataset loading.
//!
//! The board is built from a JSON mapping of territory short name to its
//! definition: display name, supply-center flag, default owner, and the
//! army/fleet neighbor lists. The standard Diplomacy map ships embedded in
//! the binary; alternative maps can be loaded from a file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The standard Diplomacy map (75 territories, 34 supply centers).
pub const STANDARD_MAP: &str = include_str!("../../data/standard.json");

/// One territory entry in the definition dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TerritoryDef {
    /// Full display name, e.g. "Vienna".
    pub name: String,
    #[serde(default)]
    pub supply_center: bool,
    /// Default owner at game start, as a lowercase nationality name.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub army_moves: Vec<String>,
    #[serde(default)]
    pub fleet_moves: Vec<String>,
}

/// Definitions keyed by short name. A `BTreeMap` keeps the entry order
/// (and therefore territory id assignment) independent of the input file's
/// key order.
pub type Definitions = BTreeMap<String, TerritoryDef>;

/// Errors raised while loading definitions or building the board from them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse territory definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("territory '{territory}' lists unknown neighbor '{neighbor}'")]
    UnknownNeighbor { territory: String, neighbor: String },

    #[error("territory '{territory}' has unknown default owner '{owner}'")]
    UnknownNationality { territory: String, owner: String },
}

/// Loads a definition dataset from a JSON file at the given path.
pub fn load_definitions(path: &Path) -> Result<Definitions, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_definitions(&data)
}

/// Parses a definition dataset from a JSON string.
pub fn parse_definitions(json: &str) -> Result<Definitions, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Returns the embedded standard-map definitions.
pub fn standard_definitions() -> Definitions {
    parse_definitions(STANDARD_MAP).expect("embedded standard map parses")
}
