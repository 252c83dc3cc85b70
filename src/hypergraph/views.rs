//! Live, read-only views over a [HyperGraph]'s incidence structure.
//!
//! - [`NeighborView`]: the neighbors of one node, and the edges connecting it to each neighbor
//! - [`AdjacencyView`]: every node mapped to its [`NeighborView`]
//!
//! Views own no state. Each access recomputes from the graph's incidence map, so a view always
//! reflects the graph it borrows. Because views borrow the graph immutably, the graph cannot be
//! mutated while a view (or an iterator produced by one) is alive.

use indexmap::IndexMap;

use crate::{
    error::HypergraphError,
    hyperedge::EdgeId,
    properties::{Attributes, Node},
};

use super::HyperGraph;

/// Neighbors of `node` produced by a single incident edge. A unary edge yields its only member,
/// which is `node` itself.
fn edge_neighbors<'a, N: Node>(edge: &'a EdgeId<N>, node: &'a N) -> impl Iterator<Item = &'a N> + 'a {
    let unary = edge.len() == 1;
    edge.iter().filter(move |member| unary || *member != node)
}

/// A (graph, node) handle over the neighbors of `node`.
pub struct NeighborView<'a, N> {
    graph: &'a HyperGraph<N>,
    node: &'a N,
}

impl<N> Clone for NeighborView<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NeighborView<'_, N> {}

impl<'a, N: Node> NeighborView<'a, N> {
    pub(super) fn new(graph: &'a HyperGraph<N>, node: &'a N) -> Self {
        NeighborView { graph, node }
    }

    pub fn node(&self) -> &'a N {
        self.node
    }

    /// Edges incident to the bound node.
    pub fn incident(&self) -> impl Iterator<Item = &'a EdgeId<N>> + 'a {
        let graph = self.graph;
        graph.node_incidence.get(self.node).into_iter().flatten()
    }

    /// Neighbors with multiplicity, one run per incident edge.
    pub fn iter(&self) -> impl Iterator<Item = &'a N> + 'a {
        let node = self.node;
        self.incident()
            .flat_map(move |edge| edge_neighbors(edge, node))
    }

    /// The edges connecting the bound node to `neighbor`, with their attributes.
    pub fn get(&self, neighbor: &N) -> Result<IndexMap<&'a EdgeId<N>, &'a Attributes>, HypergraphError> {
        let graph = self.graph;
        let edges = self
            .incident()
            .filter(|edge| edge.contains(neighbor))
            .filter_map(|edge| graph.edge_data.get_key_value(edge))
            .collect::<IndexMap<_, _>>();
        if edges.is_empty() {
            return Err(HypergraphError::neighbor_not_found(self.node, neighbor));
        }
        Ok(edges)
    }

    pub fn contains(&self, neighbor: &N) -> bool {
        self.incident().any(|edge| edge.contains(neighbor))
    }

    /// Number of neighbors [NeighborView::iter] yields: 1 per unary edge, plus the count of other
    /// members for every larger edge.
    pub fn len(&self) -> usize {
        self.incident()
            .map(|edge| edge_neighbors(edge, self.node).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, N: Node> IntoIterator for NeighborView<'a, N> {
    type Item = &'a N;
    type IntoIter = Box<dyn Iterator<Item = &'a N> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// A graph-wide handle mapping each node to its [NeighborView].
pub struct AdjacencyView<'a, N> {
    graph: &'a HyperGraph<N>,
}

impl<N> Clone for AdjacencyView<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for AdjacencyView<'_, N> {}

impl<'a, N: Node> AdjacencyView<'a, N> {
    pub(super) fn new(graph: &'a HyperGraph<N>) -> Self {
        AdjacencyView { graph }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.graph.node_incidence.contains_key(node)
    }

    pub fn get(&self, node: &N) -> Result<NeighborView<'a, N>, HypergraphError> {
        self.graph.neighbor_view(node)
    }

    /// `(node, neighbors)` pairs in the graph's node order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a N, NeighborView<'a, N>)> + 'a {
        let graph = self.graph;
        graph
            .node_incidence
            .keys()
            .map(move |node| (node, NeighborView::new(graph, node)))
    }

    pub fn len(&self) -> usize {
        self.graph.node_incidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_incidence.is_empty()
    }
}

impl<'a, N: Node> IntoIterator for AdjacencyView<'a, N> {
    type Item = (&'a N, NeighborView<'a, N>);
    type IntoIter = Box<dyn Iterator<Item = (&'a N, NeighborView<'a, N>)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
