//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use hypergraph_core::{hyperedge::EdgeId, hypergraph::HyperGraph, properties::Node};

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times; subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Assert the graph's node maps, incidence sets and edge map agree with each other, using only
/// the public API.
#[allow(dead_code)]
pub fn assert_consistent<N: Node>(graph: &HyperGraph<N>) {
    assert_eq!(graph.nodes().count(), graph.adjacency().len());
    assert_eq!(graph.nodes().count(), graph.order());
    assert_eq!(graph.edges().count(), graph.size());
    for id in graph.edges() {
        assert!(!id.is_empty(), "empty edge {id} stored");
        for member in id.iter() {
            let incident = graph
                .incident_edges(member)
                .unwrap_or_else(|e| panic!("member of {id} missing: {e}"));
            assert!(incident.contains(id), "{member:?} does not list {id}");
        }
    }
    for node in graph.nodes() {
        for id in graph.incident_edges(node).unwrap() {
            assert!(graph.has_edge(id), "{node:?} lists missing edge {id}");
            assert!(id.contains(node), "{node:?} lists {id} without being a member");
        }
    }
}

/// Neighbors of `node`, sorted, for multiset comparison.
#[allow(dead_code)]
pub fn sorted_neighbors<N: Node>(graph: &HyperGraph<N>, node: &N) -> Vec<N> {
    let mut neighbors = graph.neighbors(node).unwrap().cloned().collect::<Vec<_>>();
    neighbors.sort();
    neighbors
}

/// Edges incident to `node`, cloned out of the graph so it can be mutated afterwards.
#[allow(dead_code)]
pub fn incident_snapshot<N: Node>(graph: &HyperGraph<N>, node: &N) -> Vec<EdgeId<N>> {
    graph
        .incident_edges(node)
        .map(|edges| edges.iter().cloned().collect())
        .unwrap_or_default()
}
