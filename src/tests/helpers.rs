//! Shared test utilities for HyperGraph testing

use crate::{
    hyperedge::EdgeId,
    hypergraph::HyperGraph,
    properties::{Attributes, Node},
};
use std::collections::BTreeSet;

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Attributes holding a single integer entry.
pub fn attrs(key: &str, value: i64) -> Attributes {
    Attributes::new().with(key, value).unwrap()
}

/// The small mixed graph used across tests:
///
/// - node 0 with `color = 0` and no edges
/// - ordered edge (1, 2) and unordered edge {1, 2}
/// - ordered edge (2, 3)
pub fn create_test_graph() -> HyperGraph<i32> {
    init_logging();

    let mut graph = HyperGraph::new();
    graph.add_edge([1, 2], Attributes::new()).unwrap();
    graph
        .add_edge(BTreeSet::from([1, 2]), Attributes::new())
        .unwrap();
    graph.add_node(0, attrs("color", 0));
    graph.add_edge([2, 3], Attributes::new()).unwrap();
    graph
}

/// Check the structural invariants that every public operation has to preserve.
pub fn assert_consistent<N: Node>(graph: &HyperGraph<N>) {
    assert_eq!(
        graph.nodes().count(),
        graph.adjacency().len(),
        "node attribute map and incidence map disagree on the node set"
    );
    for (id, _) in graph.edges_with_attrs() {
        assert!(!id.is_empty(), "empty edge {id} stored");
        for member in id.iter() {
            let incident = graph
                .incident_edges(member)
                .unwrap_or_else(|_| panic!("member {member:?} of {id} is not a node"));
            assert!(incident.contains(id), "{member:?} does not list {id}");
        }
    }
    for node in graph.nodes() {
        for id in graph.incident_edges(node).unwrap() {
            assert!(graph.has_edge(id), "{node:?} lists missing edge {id}");
            assert!(id.contains(node), "{node:?} lists {id} but is not a member");
        }
    }
}

/// Sorted neighbors of `node`, for multiset comparisons.
pub fn sorted_neighbors<N: Node>(graph: &HyperGraph<N>, node: &N) -> Vec<N> {
    let mut neighbors = graph.neighbors(node).unwrap().cloned().collect::<Vec<_>>();
    neighbors.sort();
    neighbors
}

/// Edge identities of `graph` as a set, ignoring insertion order.
pub fn edge_set<N: Node>(graph: &HyperGraph<N>) -> BTreeSet<EdgeId<N>> {
    graph.edges().cloned().collect()
}
