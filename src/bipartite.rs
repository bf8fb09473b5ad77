//! Bipartite graphs: two sides whose cross product is the edge set.

use core::fmt;
use core::ops::{Add, Sub};

use crate::edge::{Edge, EdgeSet};
use crate::storage::Storage;
use crate::vertex::{Vertex, VertexSet};
use crate::weighted::{Weight, WeightedGraph};

/// A bipartite graph: an `upper` and a `lower` vertex subset, with the edge
/// set equal to the cross product of the two sides.
///
/// Side membership drives everything: adding a vertex to one side also adds
/// the canonical edges to every vertex currently on the other side, and
/// removing from a side performs a full vertex removal. Side removal does
/// not re-derive a coherent split for a vertex that was put on both sides —
/// callers are expected to keep the sides disjoint.
///
/// ```rust
/// use letter_graphs::bipartite::BipartiteGraph;
/// use letter_graphs::vertex::vertex_set;
///
/// let g = BipartiteGraph::new(vertex_set("AB".chars()), vertex_set("XY".chars()));
/// assert_eq!(g.edges().len(), 4); // AX, AY, BX, BY
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BipartiteGraph {
    storage: Storage,
    upper: VertexSet,
    lower: VertexSet,
}

impl BipartiteGraph {
    /// The empty graph.
    pub fn empty() -> Self {
        BipartiteGraph::default()
    }

    /// Construct from the two sides, routing every vertex through the
    /// cross-edge-preserving side inserts.
    pub fn new(
        upper: impl IntoIterator<Item = Vertex>,
        lower: impl IntoIterator<Item = Vertex>,
    ) -> Self {
        let mut g = BipartiteGraph::empty();
        for v in upper {
            g.insert_upper(v);
        }
        for v in lower {
            g.insert_lower(v);
        }
        g
    }

    pub fn vertices(&self) -> &VertexSet {
        &self.storage.vertices
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.storage.edges
    }

    pub fn upper(&self) -> &VertexSet {
        &self.upper
    }

    pub fn lower(&self) -> &VertexSet {
        &self.lower
    }

    /// Insert a vertex on the upper side, edged to every current lower
    /// vertex. Out-of-range letters are silently ignored.
    pub fn add_upper(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.insert_upper(v);
        }
    }

    /// Insert a vertex on the lower side, edged to every current upper
    /// vertex. Out-of-range letters are silently ignored.
    pub fn add_lower(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.insert_lower(v);
        }
    }

    /// Remove a vertex from the upper side along with the vertex itself and
    /// every edge touching it.
    pub fn remove_upper(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.delete_upper(v);
        }
    }

    /// Remove a vertex from the lower side along with the vertex itself and
    /// every edge touching it.
    pub fn remove_lower(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.delete_lower(v);
        }
    }

    fn insert_upper(&mut self, v: Vertex) {
        self.upper.insert(v);
        self.storage.insert_vertex(v);
        let Storage { edges, .. } = &mut self.storage;
        edges.extend(self.lower.iter().filter_map(|&l| Edge::between(v, l)));
    }

    fn insert_lower(&mut self, v: Vertex) {
        self.lower.insert(v);
        self.storage.insert_vertex(v);
        let Storage { edges, .. } = &mut self.storage;
        edges.extend(self.upper.iter().filter_map(|&u| Edge::between(v, u)));
    }

    fn delete_upper(&mut self, v: Vertex) {
        self.upper.remove(&v);
        self.storage.remove_vertex(v);
    }

    fn delete_lower(&mut self, v: Vertex) {
        self.lower.remove(&v);
        self.storage.remove_vertex(v);
    }

    /// Copy into a new [`WeightedGraph`], giving every existing edge the
    /// weight `default_weight`. The side split is not carried over.
    pub fn as_weighted<W: Weight>(&self, default_weight: W) -> WeightedGraph<W> {
        WeightedGraph::new(
            self.edges().iter().copied(),
            default_weight,
            self.vertices().iter().copied(),
        )
    }
}

/// Union of the upper sets and of the lower sets; cross-edges are re-derived
/// by the side inserts, so the result's edge set is the full cross product
/// of the unioned sides (minus any self-pair).
impl Add<&BipartiteGraph> for &BipartiteGraph {
    type Output = BipartiteGraph;

    fn add(self, rhs: &BipartiteGraph) -> BipartiteGraph {
        let mut out = self.clone();
        for &v in rhs.upper() {
            out.insert_upper(v);
        }
        for &v in rhs.lower() {
            out.insert_lower(v);
        }
        out
    }
}

/// Removes `rhs`'s upper members from the upper side and lower members from
/// the lower side, dropping their incident edges.
impl Sub<&BipartiteGraph> for &BipartiteGraph {
    type Output = BipartiteGraph;

    fn sub(self, rhs: &BipartiteGraph) -> BipartiteGraph {
        let mut out = self.clone();
        for &v in rhs.upper() {
            out.delete_upper(v);
        }
        for &v in rhs.lower() {
            out.delete_lower(v);
        }
        out
    }
}

impl fmt::Display for BipartiteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bipartite {{")?;
        let mut sep = " ";
        for v in self.vertices() {
            write!(f, "{sep}{v}")?;
            sep = ", ";
        }
        write!(f, " }}")
    }
}
