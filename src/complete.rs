//! Complete graphs: the edge set is derived from the vertex set.

use core::fmt;
use core::ops::{Add, Sub};

use crate::edge::{Edge, EdgeSet};
use crate::storage::Storage;
use crate::vertex::{Vertex, VertexSet};
use crate::weighted::{Weight, WeightedGraph};

/// A complete graph: every pair of distinct present vertices is edged.
///
/// Completeness is entirely vertex-set-driven — there is no independent edge
/// mutation on this type. Inserting a vertex also inserts the edges to every
/// other present vertex; removing one drops its incident edges.
///
/// ```rust
/// use letter_graphs::complete::CompleteGraph;
/// use letter_graphs::vertex::vertex_set;
///
/// let mut g = CompleteGraph::new(vertex_set("AB".chars()));
/// g.add_vertex('C');
/// assert_eq!(g.vertices().len(), 3);
/// assert_eq!(g.edges().len(), 3); // AB, AC, BC
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteGraph {
    storage: Storage,
}

impl CompleteGraph {
    /// The empty graph.
    pub fn empty() -> Self {
        CompleteGraph::default()
    }

    /// Construct from a vertex set, inserting one vertex at a time so the
    /// edge set accumulates incrementally.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut g = CompleteGraph::empty();
        for v in vertices {
            g.insert(v);
        }
        g
    }

    pub fn vertices(&self) -> &VertexSet {
        &self.storage.vertices
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.storage.edges
    }

    /// Insert a vertex together with the edges to every other present
    /// vertex. Out-of-range letters are silently ignored.
    pub fn add_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.insert(v);
        }
    }

    /// Remove a vertex and its incident edges; the rest stays complete.
    pub fn remove_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.storage.remove_vertex(v);
        }
    }

    fn insert(&mut self, v: Vertex) {
        self.storage.insert_vertex(v);
        let Storage { vertices, edges } = &mut self.storage;
        edges.extend(vertices.iter().filter_map(|&u| Edge::between(u, v)));
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

/// Union of the vertex sets; the result stays complete.
impl Add<&CompleteGraph> for &CompleteGraph {
    type Output = CompleteGraph;

    fn add(self, rhs: &CompleteGraph) -> CompleteGraph {
        let mut out = self.clone();
        for &v in rhs.vertices() {
            out.insert(v);
        }
        out
    }
}

/// Removes `rhs`'s vertices; completeness is preserved on what remains.
impl Sub<&CompleteGraph> for &CompleteGraph {
    type Output = CompleteGraph;

    fn sub(self, rhs: &CompleteGraph) -> CompleteGraph {
        let mut out = self.clone();
        for &v in rhs.vertices() {
            out.storage.remove_vertex(v);
        }
        out
    }
}

impl fmt::Display for CompleteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complete {{")?;
        let mut sep = " ";
        for v in self.vertices() {
            write!(f, "{sep}{v}")?;
            sep = ", ";
        }
        write!(f, " }}")
    }
}
