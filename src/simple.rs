//! Unrestricted simple graphs.

use core::fmt;

use crate::edge::{Edge, EdgeSet};
use crate::storage::Storage;
use crate::vertex::{Vertex, VertexSet};
use crate::weighted::{Weight, WeightedGraph};

/// A simple graph: a vertex set and a canonical edge set with no further
/// invariant.
///
/// Every edge's endpoints are auto-inserted as vertices, both at
/// construction and through [`SimpleGraph::add_edge`].
///
/// ```rust
/// use letter_graphs::edge::edge_set;
/// use letter_graphs::simple::SimpleGraph;
///
/// let mut g = SimpleGraph::new(edge_set([('A', 'B')]), []);
/// g.add_edge('B', 'C');
/// assert_eq!(g.vertices().len(), 3);
/// assert_eq!(g.edges().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleGraph {
    storage: Storage,
}

impl SimpleGraph {
    /// The empty graph.
    pub fn empty() -> Self {
        SimpleGraph::default()
    }

    /// Construct from an edge set and extra isolated vertices.
    pub fn new(
        edges: impl IntoIterator<Item = Edge>,
        vertices: impl IntoIterator<Item = Vertex>,
    ) -> Self {
        let mut g = SimpleGraph::empty();
        for e in edges {
            g.storage.insert_edge(e);
        }
        for v in vertices {
            g.storage.insert_vertex(v);
        }
        g
    }

    pub fn vertices(&self) -> &VertexSet {
        &self.storage.vertices
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.storage.edges
    }

    /// Insert a vertex; out-of-range letters are silently ignored.
    pub fn add_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.storage.insert_vertex(v);
        }
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.storage.remove_vertex(v);
        }
    }

    /// Insert the canonical edge between `a` and `b`, auto-inserting both
    /// endpoints. Out-of-range letters and self-pairs are silently ignored.
    pub fn add_edge(&mut self, a: char, b: char) {
        if let Some(e) = Edge::new(a, b) {
            self.storage.insert_edge(e);
        }
    }

    /// Remove the canonical edge between `a` and `b`; the endpoints stay.
    pub fn remove_edge(&mut self, a: char, b: char) {
        if let Some(e) = Edge::new(a, b) {
            self.storage.remove_edge(e);
        }
    }

    /// Copy into a new [`WeightedGraph`], giving every existing edge the
    /// weight `default_weight`.
    pub fn as_weighted<W: Weight>(&self, default_weight: W) -> WeightedGraph<W> {
        WeightedGraph::new(
            self.edges().iter().copied(),
            default_weight,
            self.vertices().iter().copied(),
        )
    }
}

impl fmt::Display for SimpleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Simple {{")?;
        let mut sep = " ";
        for e in self.edges() {
            write!(f, "{sep}{e}")?;
            sep = ", ";
        }
        write!(f, " }}")
    }
}
