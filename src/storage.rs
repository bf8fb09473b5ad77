//! The vertex/edge storage shared by every graph variant.

use crate::edge::{Edge, EdgeSet};
use crate::vertex::{Vertex, VertexSet};

/// The base storage every variant owns: a set of vertices and a set of
/// canonical edges.
///
/// Methods here are the raw set operations; range checking happens at the
/// public entry points (see [`Vertex::new`]), and each variant layers its own
/// invariant maintenance on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Storage {
    pub(crate) vertices: VertexSet,
    pub(crate) edges: EdgeSet,
}

impl Storage {
    pub(crate) fn insert_vertex(&mut self, v: Vertex) {
        self.vertices.insert(v);
    }

    /// Remove `v` and every edge touching it.
    pub(crate) fn remove_vertex(&mut self, v: Vertex) {
        self.edges.retain(|e| !e.touches(v));
        self.vertices.remove(&v);
    }

    /// Insert a canonical edge, adding both endpoints to the vertex set.
    pub(crate) fn insert_edge(&mut self, e: Edge) {
        self.vertices.insert(e.lo());
        self.vertices.insert(e.hi());
        self.edges.insert(e);
    }

    pub(crate) fn remove_edge(&mut self, e: Edge) -> bool {
        self.edges.remove(&e)
    }
}
