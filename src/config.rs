use crate::error::HypergraphError;
use serde::{Deserialize, Serialize};
use std::{
    fs::{read_to_string, write},
    path::Path,
};

/// Tuning knobs for a [crate::hypergraph::HyperGraph]. Every field has a default, so a TOML file
/// only needs to name the values it changes:
///
/// ```toml
/// min_retained_members = 1
/// node_capacity = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Smallest member count an edge rewritten by `remove_node` must keep to be reinserted.
    pub min_retained_members: usize,
    /// Preallocated node slots.
    pub node_capacity: usize,
    /// Preallocated edge slots.
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub const DEFAULT_MIN_RETAINED_MEMBERS: usize = 2;

    pub fn from_toml_str(content: &str) -> Result<Self, HypergraphError> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. A missing file yields the default config.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, HypergraphError> {
        let path = path.as_ref();
        tracing::debug!("Attempting to read graph config from: {:?}", path);
        if !path.exists() {
            tracing::debug!("Config file not found, using default graph config.");
            return Ok(GraphConfig::default());
        }
        let content = read_to_string(path)?;
        GraphConfig::from_toml_str(&content)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), HypergraphError> {
        tracing::debug!("Attempting to write graph config to: {:?}", path.as_ref());
        let toml_string = toml::to_string(self)?;
        write(path, toml_string)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), HypergraphError> {
        // zero would let remove_node reinsert memberless edges
        if self.min_retained_members == 0 {
            return Err(HypergraphError::Config(
                "min_retained_members must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            min_retained_members: GraphConfig::DEFAULT_MIN_RETAINED_MEMBERS,
            node_capacity: 0,
            edge_capacity: 0,
        }
    }
}
