//! # hypergraph-core
//!
//! An in-memory hypergraph: a graph whose edges ("hyperedges") may connect any number of nodes,
//! including a single node.
//!
//! ## Overview
//!
//! A [`hypergraph::HyperGraph`] tracks three things:
//!
//! - **Nodes** and their [`properties::Attributes`]
//! - **Incidence**: for every node, the set of hyperedges it is a member of
//! - **Hyperedges** and their attributes, keyed by [`hyperedge::EdgeId`]
//!
//! ### Key Features
//!
//! - **Ordered and unordered hyperedges**: members given as a set compare as a set, members given
//!   as a sequence compare as a sequence
//! - **Parallel hyperedges**: an optional discriminator keeps several edges over the same members
//!   apart
//! - **Consistent node removal**: removing a node rewrites every edge it belonged to, dropping the
//!   ones that become degenerate
//! - **Live views**: [`hypergraph::NeighborView`] and [`hypergraph::AdjacencyView`] recompute from
//!   the graph on every access
//!
//! ## Quick Start
//!
//! ```rust
//! use hypergraph_core::{hypergraph::HyperGraph, properties::Attributes, HypergraphError};
//! use std::collections::BTreeSet;
//!
//! let mut graph = HyperGraph::new();
//! graph.add_edge([1, 2], Attributes::new())?;
//! // Same nodes, but an unordered edge: a distinct identity
//! graph.add_edge(BTreeSet::from([1, 2]), Attributes::new())?;
//! graph.add_node(0, Attributes::new().with("color", 0)?);
//! graph.add_edge([2, 3], Attributes::new())?;
//!
//! assert_eq!(graph.order(), 4);
//! assert_eq!(graph.size(), 3);
//! assert!(graph.has_edge(BTreeSet::from([2, 1])));
//!
//! assert!(matches!(
//!     graph.remove_edge([4, 3]),
//!     Err(HypergraphError::EdgeNotFound(_))
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Node Removal
//!
//! [`hypergraph::HyperGraph::remove_node`] rewrites each incident edge without the removed node.
//! Rewritten edges keep their kind, discriminator and attributes; edges left with fewer than
//! [`config::GraphConfig::min_retained_members`] members (2 by default) are dropped.
//!
//! ## Concurrency
//!
//! The graph is single-threaded and has no internal locking. Views borrow the graph, so the
//! compiler rejects mutation while a view is in use.
//!
//! ## Module Guide
//!
//! Start with [`hypergraph::HyperGraph`], then see [`hyperedge`] for edge identity rules and
//! [`config`] for tuning.

pub mod config;
pub mod error;
pub mod hyperedge;
pub mod hypergraph;
pub mod properties;
#[cfg(test)]
mod tests;

pub use error::*;
