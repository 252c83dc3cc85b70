use std::{fmt, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum HypergraphError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Edge Not Found: {0}")]
    EdgeNotFound(String),
    #[error("Invalid hyperedge: {0}")]
    InvalidEdge(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("No hyperedge connects {node} to {neighbor}")]
    NeighborNotFound { node: String, neighbor: String },
    #[error("Node Not Found: {0}")]
    NodeNotFound(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl HypergraphError {
    pub(crate) fn node_not_found<N: fmt::Debug>(node: &N) -> Self {
        HypergraphError::NodeNotFound(format!("{node:?}"))
    }

    pub(crate) fn neighbor_not_found<N: fmt::Debug>(node: &N, neighbor: &N) -> Self {
        HypergraphError::NeighborNotFound {
            node: format!("{node:?}"),
            neighbor: format!("{neighbor:?}"),
        }
    }

    /// True for the "key is absent" family of errors (node, edge, neighbor, item).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HypergraphError::EdgeNotFound(_)
                | HypergraphError::NeighborNotFound { .. }
                | HypergraphError::NodeNotFound(_)
                | HypergraphError::NotFound(_)
        )
    }
}

impl From<toml::de::Error> for HypergraphError {
    fn from(src: toml::de::Error) -> HypergraphError {
        HypergraphError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for HypergraphError {
    fn from(src: toml::ser::Error) -> HypergraphError {
        HypergraphError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<io::Error> for HypergraphError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => HypergraphError::NotFound(format!("{x}")),
            _ => HypergraphError::Io(format!("IOError: {}", x.kind())),
        }
    }
}
