//! Hyperedge identity and the value type callers build edges from.
//!
//! - [`Members`]: the member nodes of a hyperedge, either as an unordered set or an ordered
//!   sequence. The kind is chosen at construction and never changes.
//! - [`EdgeId`]: members plus an optional discriminator. This is the key a
//!   [crate::hypergraph::HyperGraph] stores edges under.
//! - [`HyperEdge`]: an [`EdgeId`] together with its [`Attributes`]. Equality and hashing only look
//!   at the identity, so two `HyperEdge`s with different attributes but the same identity are the
//!   same edge.

use serde::{Deserialize, Serialize};
use std::{
    collections::{btree_set, BTreeSet, HashSet},
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Deref,
    slice,
};

use crate::properties::{Attributes, Node};

/// Member nodes of a hyperedge.
///
/// `Unordered` members compare with set semantics (duplicates collapse, order is irrelevant);
/// `Ordered` members compare as sequences (duplicates and order matter). An unordered edge never
/// equals an ordered one, even over the same nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Ord"
))]
pub enum Members<N> {
    Unordered(BTreeSet<N>),
    Ordered(Vec<N>),
}

impl<N: Node> Members<N> {
    pub fn unordered<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Members::Unordered(nodes.into_iter().collect())
    }

    pub fn ordered<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Members::Ordered(nodes.into_iter().collect())
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Members::Ordered(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Members::Unordered(set) => set.len(),
            Members::Ordered(seq) => seq.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, node: &N) -> bool {
        match self {
            Members::Unordered(set) => set.contains(node),
            Members::Ordered(seq) => seq.contains(node),
        }
    }

    pub fn iter(&self) -> MembersIter<'_, N> {
        match self {
            Members::Unordered(set) => MembersIter::Unordered(set.iter()),
            Members::Ordered(seq) => MembersIter::Ordered(seq.iter()),
        }
    }

    /// Same kind of collection with every occurrence of `node` dropped.
    pub fn without(&self, node: &N) -> Members<N> {
        match self {
            Members::Unordered(set) => {
                Members::Unordered(set.iter().filter(|n| *n != node).cloned().collect())
            }
            Members::Ordered(seq) => {
                Members::Ordered(seq.iter().filter(|n| *n != node).cloned().collect())
            }
        }
    }
}

/// Iterator over the members of a hyperedge, in canonical order for unordered edges and in
/// sequence order for ordered ones.
pub enum MembersIter<'a, N> {
    Unordered(btree_set::Iter<'a, N>),
    Ordered(slice::Iter<'a, N>),
}

impl<'a, N> Iterator for MembersIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        match self {
            MembersIter::Unordered(iter) => iter.next(),
            MembersIter::Ordered(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            MembersIter::Unordered(iter) => iter.size_hint(),
            MembersIter::Ordered(iter) => iter.size_hint(),
        }
    }
}

impl<'a, N: Node> IntoIterator for &'a Members<N> {
    type Item = &'a N;
    type IntoIter = MembersIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Node> From<Vec<N>> for Members<N> {
    fn from(nodes: Vec<N>) -> Self {
        Members::Ordered(nodes)
    }
}

impl<N: Node, const K: usize> From<[N; K]> for Members<N> {
    fn from(nodes: [N; K]) -> Self {
        Members::Ordered(Vec::from(nodes))
    }
}

impl<N: Node> From<&[N]> for Members<N> {
    fn from(nodes: &[N]) -> Self {
        Members::Ordered(nodes.to_vec())
    }
}

impl<N: Node> From<BTreeSet<N>> for Members<N> {
    fn from(nodes: BTreeSet<N>) -> Self {
        Members::Unordered(nodes)
    }
}

impl<N: Node> From<HashSet<N>> for Members<N> {
    fn from(nodes: HashSet<N>) -> Self {
        Members::Unordered(nodes.into_iter().collect())
    }
}

impl<N: Node> Display for Members<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (open, close) = match self {
            Members::Unordered(_) => ("{", "}"),
            Members::Ordered(_) => ("(", ")"),
        };
        let nodes = self
            .iter()
            .map(|n| format!("{n:?}"))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{open}{nodes}{close}")
    }
}

/// The identity of a hyperedge: its members plus an optional discriminator. Two edges over the
/// same members with different (or absent vs present) discriminators are distinct parallel edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Ord"
))]
pub struct EdgeId<N> {
    members: Members<N>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discriminator: Option<String>,
}

impl<N: Node> EdgeId<N> {
    pub fn new(members: impl Into<Members<N>>) -> Self {
        EdgeId {
            members: members.into(),
            discriminator: None,
        }
    }

    pub fn with_key(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    pub fn members(&self) -> &Members<N> {
        &self.members
    }

    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    pub fn is_ordered(&self) -> bool {
        self.members.is_ordered()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }

    pub fn iter(&self) -> MembersIter<'_, N> {
        self.members.iter()
    }

    /// The identity this edge is rewritten to when `node` leaves the graph: same kind, same
    /// discriminator, `node` excluded.
    pub fn without(&self, node: &N) -> EdgeId<N> {
        EdgeId {
            members: self.members.without(node),
            discriminator: self.discriminator.clone(),
        }
    }
}

impl<'a, N: Node> IntoIterator for &'a EdgeId<N> {
    type Item = &'a N;
    type IntoIter = MembersIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Node> Display for EdgeId<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.discriminator {
            None => write!(f, "Edge({})", self.members),
            Some(key) => write!(f, "Edge({}, key={key})", self.members),
        }
    }
}

impl<N: Node> From<Members<N>> for EdgeId<N> {
    fn from(members: Members<N>) -> Self {
        EdgeId::new(members)
    }
}

impl<N: Node> From<Vec<N>> for EdgeId<N> {
    fn from(nodes: Vec<N>) -> Self {
        EdgeId::new(nodes)
    }
}

impl<N: Node, const K: usize> From<[N; K]> for EdgeId<N> {
    fn from(nodes: [N; K]) -> Self {
        EdgeId::new(nodes)
    }
}

impl<N: Node> From<BTreeSet<N>> for EdgeId<N> {
    fn from(nodes: BTreeSet<N>) -> Self {
        EdgeId::new(nodes)
    }
}

impl<N: Node> From<HashSet<N>> for EdgeId<N> {
    fn from(nodes: HashSet<N>) -> Self {
        EdgeId::new(nodes)
    }
}

impl<N: Node> From<&EdgeId<N>> for EdgeId<N> {
    fn from(id: &EdgeId<N>) -> Self {
        id.clone()
    }
}

impl<N: Node> From<HyperEdge<N>> for EdgeId<N> {
    fn from(edge: HyperEdge<N>) -> Self {
        edge.id
    }
}

impl<N: Node> From<&HyperEdge<N>> for EdgeId<N> {
    fn from(edge: &HyperEdge<N>) -> Self {
        edge.id.clone()
    }
}

/// A hyperedge as built by callers: identity plus attributes.
///
/// ```rust
/// use hypergraph_core::hyperedge::HyperEdge;
///
/// let edge = HyperEdge::new([1, 2, 3]).with_key("a").with_attr("weight", 0.5).unwrap();
/// assert_eq!(edge.len(), 3);
/// assert_eq!(edge.discriminator(), Some("a"));
/// assert_eq!(edge.attributes.get::<f64>("weight"), Some(0.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Ord"
))]
pub struct HyperEdge<N> {
    pub id: EdgeId<N>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl<N: Node> HyperEdge<N> {
    pub fn new(members: impl Into<Members<N>>) -> Self {
        HyperEdge {
            id: EdgeId::new(members),
            attributes: Attributes::default(),
        }
    }

    pub fn with_key(mut self, discriminator: impl Into<String>) -> Self {
        self.id = self.id.with_key(discriminator);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_attr<T: Serialize>(mut self, key: &str, value: T) -> Result<Self, toml::ser::Error> {
        self.attributes.set(key, value)?;
        Ok(self)
    }

    pub fn into_parts(self) -> (EdgeId<N>, Attributes) {
        (self.id, self.attributes)
    }
}

impl<N> Deref for HyperEdge<N> {
    type Target = EdgeId<N>;
    fn deref(&self) -> &EdgeId<N> {
        &self.id
    }
}

impl<N: PartialEq> PartialEq for HyperEdge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N: Eq> Eq for HyperEdge<N> {}

impl<N: Hash> Hash for HyperEdge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Attributes are payload, not identity
        self.id.hash(state);
    }
}

impl<N: Node> Display for HyperEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<N: Node> From<EdgeId<N>> for HyperEdge<N> {
    fn from(id: EdgeId<N>) -> Self {
        HyperEdge {
            id,
            attributes: Attributes::default(),
        }
    }
}

impl<N: Node> From<Members<N>> for HyperEdge<N> {
    fn from(members: Members<N>) -> Self {
        HyperEdge::new(members)
    }
}

impl<N: Node> From<Vec<N>> for HyperEdge<N> {
    fn from(nodes: Vec<N>) -> Self {
        HyperEdge::new(nodes)
    }
}

impl<N: Node, const K: usize> From<[N; K]> for HyperEdge<N> {
    fn from(nodes: [N; K]) -> Self {
        HyperEdge::new(nodes)
    }
}

impl<N: Node> From<BTreeSet<N>> for HyperEdge<N> {
    fn from(nodes: BTreeSet<N>) -> Self {
        HyperEdge::new(nodes)
    }
}

impl<N: Node> From<HashSet<N>> for HyperEdge<N> {
    fn from(nodes: HashSet<N>) -> Self {
        HyperEdge::new(nodes)
    }
}
