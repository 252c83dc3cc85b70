//! Hypergraph module: the graph container and its live views.
//!
//! # Module Organization
//!
//! - [`graph`]: the [`HyperGraph`] container, its mutations and queries
//! - [`views`]: [`NeighborView`] and [`AdjacencyView`], borrowed projections over a graph
//!
//! ```rust
//! use hypergraph_core::{hypergraph::HyperGraph, properties::Attributes};
//!
//! let mut graph = HyperGraph::new();
//! graph.add_edge([11, 12, 13, 14], Attributes::new())?;
//! graph.add_edge([14, 15], Attributes::new())?;
//! let mut neighbors = graph.neighbors(&14)?.copied().collect::<Vec<_>>();
//! neighbors.sort();
//! assert_eq!(neighbors, vec![11, 12, 13, 15]);
//! # Ok::<(), hypergraph_core::HypergraphError>(())
//! ```

mod graph;
mod views;


pub use graph::{EdgeInsert, HyperGraph};
pub use views::{AdjacencyView, NeighborView};
