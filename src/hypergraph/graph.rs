//! The [HyperGraph] container: node attributes, per-node incidence sets and edge attributes.

use indexmap::{IndexMap, IndexSet};
use std::fmt;

use crate::{
    config::GraphConfig,
    error::HypergraphError,
    hyperedge::{EdgeId, HyperEdge},
    properties::{Attributes, Node},
};

use super::{AdjacencyView, NeighborView};

/// Outcome of [HyperGraph::add_edge].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeInsert<N> {
    /// The edge did not exist and was registered, along with any missing member nodes.
    Created(EdgeId<N>),
    /// An edge with this identity already existed; its attributes were merged.
    Existing(EdgeId<N>),
}

impl<N> EdgeInsert<N> {
    pub fn is_created(&self) -> bool {
        matches!(self, EdgeInsert::Created(_))
    }

    pub fn id(&self) -> &EdgeId<N> {
        match self {
            EdgeInsert::Created(id) | EdgeInsert::Existing(id) => id,
        }
    }

    pub fn into_id(self) -> EdgeId<N> {
        match self {
            EdgeInsert::Created(id) | EdgeInsert::Existing(id) => id,
        }
    }
}

/// An in-memory hypergraph.
///
/// Three maps make up the graph state and are kept consistent by every public operation:
///
/// - `node_data`: node -> node attributes
/// - `node_incidence`: node -> the set of edges that node is a member of
/// - `edge_data`: edge identity -> edge attributes
///
/// Both node maps always hold the same keys, every member of every stored edge is a node listing
/// that edge as incident, and no stored edge is empty. All maps keep insertion order, so node and
/// edge iteration is deterministic.
///
/// The graph is single-threaded and carries no internal locking. Views and neighbor iterators
/// borrow the graph, so it cannot be mutated while one of them is alive; wrap the graph in a lock
/// if it has to be shared between threads.
pub struct HyperGraph<N> {
    config: GraphConfig,
    pub(super) node_data: IndexMap<N, Attributes>,
    pub(super) node_incidence: IndexMap<N, IndexSet<EdgeId<N>>>,
    pub(super) edge_data: IndexMap<EdgeId<N>, Attributes>,
}

impl<N: Node> Default for HyperGraph<N> {
    fn default() -> Self {
        HyperGraph::from_config(GraphConfig::default())
    }
}

impl<N: Node> HyperGraph<N> {
    pub fn new() -> Self {
        HyperGraph::default()
    }

    /// Build an empty graph with a custom [GraphConfig]. Fails if the config does not validate.
    pub fn with_config(config: GraphConfig) -> Result<Self, HypergraphError> {
        config.validate()?;
        Ok(HyperGraph::from_config(config))
    }

    fn from_config(config: GraphConfig) -> Self {
        HyperGraph {
            node_data: IndexMap::with_capacity(config.node_capacity),
            node_incidence: IndexMap::with_capacity(config.node_capacity),
            edge_data: IndexMap::with_capacity(config.edge_capacity),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // Mutations

    /// Add `node` with `attrs`. Returns `true` if the node was created. If the node already exists
    /// `attrs` are merged into its attributes (overwriting on key collision) and `false` is
    /// returned.
    pub fn add_node(&mut self, node: N, attrs: Attributes) -> bool {
        if let Some(data) = self.node_data.get_mut(&node) {
            data.extend(attrs);
            return false;
        }
        tracing::debug!("Adding node {:?}", node);
        self.node_incidence.insert(node.clone(), IndexSet::new());
        self.node_data.insert(node, attrs);
        true
    }

    /// Add a hyperedge.
    ///
    /// `edge` is either raw members (a `Vec` or array for an ordered edge, a `BTreeSet` or
    /// `HashSet` for an unordered one) or a prebuilt [HyperEdge], whose own attributes are merged
    /// with `attrs` (`attrs` wins on collision).
    ///
    /// If an edge with the same identity exists the attributes are merged into it and
    /// [EdgeInsert::Existing] is returned; nothing else changes. Otherwise the edge is stored,
    /// member nodes that are not in the graph yet are created, and [EdgeInsert::Created] is
    /// returned.
    pub fn add_edge(
        &mut self,
        edge: impl Into<HyperEdge<N>>,
        attrs: Attributes,
    ) -> Result<EdgeInsert<N>, HypergraphError> {
        let (id, mut edge_attrs) = edge.into().into_parts();
        if id.is_empty() {
            return Err(HypergraphError::InvalidEdge(format!(
                "{id} has no member nodes"
            )));
        }
        edge_attrs.extend(attrs);
        Ok(self.insert_edge(id, edge_attrs))
    }

    fn insert_edge(&mut self, id: EdgeId<N>, attrs: Attributes) -> EdgeInsert<N> {
        if let Some(existing) = self.edge_data.get_mut(&id) {
            tracing::trace!("Merging attributes into existing edge {id}");
            existing.extend(attrs);
            return EdgeInsert::Existing(id);
        }
        tracing::debug!("Adding edge {id}");
        for node in id.iter() {
            self.add_node(node.clone(), Attributes::default());
            if let Some(incident) = self.node_incidence.get_mut(node) {
                incident.insert(id.clone());
            }
        }
        self.edge_data.insert(id.clone(), attrs);
        EdgeInsert::Created(id)
    }

    /// Remove a hyperedge, returning its attributes. Raw members resolve to an edge without a
    /// discriminator; pass an [EdgeId] or [HyperEdge] to target a keyed edge.
    pub fn remove_edge(&mut self, edge: impl Into<EdgeId<N>>) -> Result<Attributes, HypergraphError> {
        let id = edge.into();
        let Some(attrs) = self.edge_data.shift_remove(&id) else {
            return Err(HypergraphError::EdgeNotFound(id.to_string()));
        };
        self.detach(&id);
        tracing::debug!("Removed edge {id}");
        Ok(attrs)
    }

    fn detach(&mut self, id: &EdgeId<N>) {
        for node in id.iter() {
            if let Some(incident) = self.node_incidence.get_mut(node) {
                incident.shift_remove(id);
            }
        }
    }

    /// Remove `node`, returning its attributes.
    ///
    /// Every edge incident to `node` is rewritten without it, keeping the edge's kind,
    /// discriminator and attributes. The rewritten edge is reinserted when it still has at least
    /// [GraphConfig::min_retained_members] members (2 by default) and dropped otherwise. A
    /// rewritten edge that collides with an existing edge merges into it, its attributes winning on
    /// key collision.
    pub fn remove_node(&mut self, node: &N) -> Result<Attributes, HypergraphError> {
        let Some(incident) = self.node_incidence.shift_remove(node) else {
            return Err(HypergraphError::node_not_found(node));
        };
        let attrs = self.node_data.shift_remove(node).unwrap_or_default();

        for id in incident {
            let edge_attrs = self.edge_data.shift_remove(&id).unwrap_or_default();
            self.detach(&id);
            let rewritten = id.without(node);
            if rewritten.len() >= self.config.min_retained_members {
                tracing::debug!("Rewriting edge {id} as {rewritten}");
                self.insert_edge(rewritten, edge_attrs);
            } else {
                tracing::trace!(
                    "Dropping edge {id}: {} member(s) left after removing {:?}",
                    rewritten.len(),
                    node
                );
            }
        }

        tracing::debug!("Removed node {:?}", node);
        Ok(attrs)
    }

    pub fn clear(&mut self) {
        self.node_data.clear();
        self.node_incidence.clear();
        self.edge_data.clear();
    }

    // Queries

    pub fn has_edge(&self, edge: impl Into<EdgeId<N>>) -> bool {
        self.edge_data.contains_key(&edge.into())
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.node_data.contains_key(node)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.node_data.keys()
    }

    pub fn nodes_with_attrs(&self) -> impl Iterator<Item = (&N, &Attributes)> + '_ {
        self.node_data.iter()
    }

    /// Edge identities in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeId<N>> + '_ {
        self.edge_data.keys()
    }

    pub fn edges_with_attrs(&self) -> impl Iterator<Item = (&EdgeId<N>, &Attributes)> + '_ {
        self.edge_data.iter()
    }

    /// Edges paired with a projection of their attributes.
    pub fn edges_map<'a, T, F>(&'a self, mut f: F) -> impl Iterator<Item = (&'a EdgeId<N>, T)> + 'a
    where
        T: 'a,
        F: FnMut(&'a Attributes) -> T + 'a,
    {
        self.edge_data.iter().map(move |(id, attrs)| (id, f(attrs)))
    }

    pub fn node_attributes(&self, node: &N) -> Option<&Attributes> {
        self.node_data.get(node)
    }

    pub fn node_attributes_mut(&mut self, node: &N) -> Option<&mut Attributes> {
        self.node_data.get_mut(node)
    }

    pub fn edge_attributes(&self, edge: impl Into<EdgeId<N>>) -> Option<&Attributes> {
        self.edge_data.get(&edge.into())
    }

    pub fn edge_attributes_mut(&mut self, edge: impl Into<EdgeId<N>>) -> Option<&mut Attributes> {
        self.edge_data.get_mut(&edge.into())
    }

    /// The edges `node` is a member of, in the order they were attached to it.
    pub fn incident_edges(&self, node: &N) -> Result<&IndexSet<EdgeId<N>>, HypergraphError> {
        self.node_incidence
            .get(node)
            .ok_or_else(|| HypergraphError::node_not_found(node))
    }

    /// Lazily enumerate the neighbors of `node`.
    ///
    /// For each incident edge: a unary edge yields `node` itself once, any other edge yields each
    /// of its other members. Neighbors are yielded with multiplicity, so a node sharing two edges
    /// with `node` appears twice.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_, HypergraphError> {
        self.neighbor_view(node).map(|view| view.iter())
    }

    /// Indexed access: a live [NeighborView] over `node`.
    pub fn neighbor_view(&self, node: &N) -> Result<NeighborView<'_, N>, HypergraphError> {
        let (node, _) = self
            .node_incidence
            .get_key_value(node)
            .ok_or_else(|| HypergraphError::node_not_found(node))?;
        Ok(NeighborView::new(self, node))
    }

    pub fn adjacency(&self) -> AdjacencyView<'_, N> {
        AdjacencyView::new(self)
    }

    /// Node count.
    pub fn order(&self) -> usize {
        self.node_data.len()
    }

    /// Edge count.
    pub fn size(&self) -> usize {
        self.edge_data.len()
    }

    pub fn len(&self) -> usize {
        self.order()
    }

    pub fn is_empty(&self) -> bool {
        self.node_data.is_empty()
    }

    /// A new graph built by replaying every node and edge of this one through
    /// [HyperGraph::add_node] and [HyperGraph::add_edge]. Shares no storage with `self`.
    pub fn copy(&self) -> Self {
        let mut graph = HyperGraph::from_config(self.config.clone());
        for (node, attrs) in self.nodes_with_attrs() {
            graph.add_node(node.clone(), attrs.clone());
        }
        for (id, attrs) in self.edges_with_attrs() {
            if let Err(e) = graph.add_edge(id.clone(), attrs.clone()) {
                tracing::warn!("Could not copy edge {id}: {e}");
            }
        }
        graph
    }
}

impl<N: Node> Clone for HyperGraph<N> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<N: Node> PartialEq for HyperGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node_data == other.node_data && self.edge_data == other.edge_data
    }
}

impl<'a, N: Node> IntoIterator for &'a HyperGraph<N> {
    type Item = &'a N;
    type IntoIter = indexmap::map::Keys<'a, N, Attributes>;

    fn into_iter(self) -> Self::IntoIter {
        self.node_data.keys()
    }
}

impl<N: Node> fmt::Debug for HyperGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HyperGraph")
            .field("config", &self.config)
            .field("node_data", &self.node_data)
            .field("edge_data", &self.edge_data)
            .finish()
    }
}

impl<N: Node> fmt::Display for HyperGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nodes = self
            .node_data
            .iter()
            .map(|(node, attrs)| format!("{node:?}: {attrs}"))
            .collect::<Vec<String>>()
            .join(", ");
        let edges = self
            .edge_data
            .keys()
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "HyperGraph({{{nodes}}}, {{{edges}}})")
    }
}
