//! Edge-weighted graphs.

use core::fmt;
use core::ops::{Add, Sub};
use std::collections::BTreeMap;

use num_traits::Unsigned;

use crate::edge::{Edge, EdgeSet};
use crate::storage::Storage;
use crate::vertex::{Vertex, VertexSet};

/// Edge weights: any unsigned integer.
pub trait Weight: Unsigned + Ord + Copy {}
impl<T: Unsigned + Ord + Copy> Weight for T {}

/// A simple graph with a weight attached to every edge, plus a default
/// weight used when an edge is added without an explicit one.
///
/// The weight map's key set always equals the edge set: adding an edge adds
/// its weight entry, removing an edge (or a vertex with incident edges)
/// drops the entries with it. Lookups use the canonical `(min, max)`
/// ordering, so `weight('A', 'B')` and `weight('B', 'A')` agree.
///
/// ```rust
/// use letter_graphs::edge::edge_set;
/// use letter_graphs::prelude::WeightedGraph;
///
/// let mut g = WeightedGraph::new(edge_set([('A', 'B')]), 5, []);
/// g.add_edge('B', 'C');
/// assert_eq!(g.weight('C', 'B'), Some(5));
/// g.add_edge_weighted('A', 'C', 2);
/// assert_eq!(g.weight('A', 'C'), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraph<W> {
    storage: Storage,
    weights: BTreeMap<Edge, W>,
    default_weight: W,
}

impl<W: Weight> WeightedGraph<W> {
    /// The empty graph. Edges added without an explicit weight get
    /// `default_weight`.
    pub fn empty(default_weight: W) -> Self {
        WeightedGraph {
            storage: Storage::default(),
            weights: BTreeMap::new(),
            default_weight,
        }
    }

    /// Construct from an edge set, a default weight and extra isolated
    /// vertices; every constructed edge gets the default weight.
    pub fn new(
        edges: impl IntoIterator<Item = Edge>,
        default_weight: W,
        vertices: impl IntoIterator<Item = Vertex>,
    ) -> Self {
        let mut g = WeightedGraph::empty(default_weight);
        for e in edges {
            g.insert(e, default_weight);
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

    /// The edges with their weights, in canonical order.
    pub fn weights(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        self.weights.iter().map(|(&e, &w)| (e, w))
    }

    /// The weight given to edges added without an explicit one.
    pub fn default_weight(&self) -> W {
        self.default_weight
    }

    pub fn set_default_weight(&mut self, w: W) {
        self.default_weight = w;
    }

    /// Insert a vertex; out-of-range letters are silently ignored.
    pub fn add_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.storage.insert_vertex(v);
        }
    }

    /// Remove a vertex, its incident edges and their weight entries.
    pub fn remove_vertex(&mut self, v: char) {
        if let Some(v) = Vertex::new(v) {
            self.storage.remove_vertex(v);
            self.weights.retain(|e, _| !e.touches(v));
        }
    }

    /// Insert the canonical edge between `a` and `b` at the default weight.
    pub fn add_edge(&mut self, a: char, b: char) {
        self.add_edge_weighted(a, b, self.default_weight);
    }

    /// Insert the canonical edge between `a` and `b` at weight `w`,
    /// auto-inserting both endpoints. Re-adding an existing edge updates its
    /// weight.
    pub fn add_edge_weighted(&mut self, a: char, b: char, w: W) {
        if let Some(e) = Edge::new(a, b) {
            self.insert(e, w);
        }
    }

    /// Remove the canonical edge between `a` and `b` together with its
    /// weight entry.
    pub fn remove_edge(&mut self, a: char, b: char) {
        if let Some(e) = Edge::new(a, b) {
            self.delete(e);
        }
    }

    /// The weight of the edge between `a` and `b`, or `None` if the edge is
    /// absent.
    pub fn weight(&self, a: char, b: char) -> Option<W> {
        self.weights.get(&Edge::new(a, b)?).copied()
    }

    /// Update the weight of an existing edge; absent edges are left alone
    /// (use [`WeightedGraph::add_edge_weighted`] to insert).
    pub fn set_weight(&mut self, a: char, b: char, w: W) {
        if let Some(e) = Edge::new(a, b) {
            if let Some(slot) = self.weights.get_mut(&e) {
                *slot = w;
            }
        }
    }

    fn insert(&mut self, e: Edge, w: W) {
        self.storage.insert_edge(e);
        self.weights.insert(e, w);
    }

    fn delete(&mut self, e: Edge) {
        self.storage.remove_edge(e);
        self.weights.remove(&e);
    }

    /// Copy into a new [`WeightedGraph`], resetting every edge's weight to
    /// `default_weight`.
    pub fn as_weighted(&self, default_weight: W) -> WeightedGraph<W> {
        WeightedGraph::new(
            self.edges().iter().copied(),
            default_weight,
            self.vertices().iter().copied(),
        )
    }
}

/// Union of the edge sets. An edge present in both operands keeps the
/// *minimum* of the two weights; an edge present in one carries its weight
/// over unchanged.
impl<W: Weight> Add<&WeightedGraph<W>> for &WeightedGraph<W> {
    type Output = WeightedGraph<W>;

    fn add(self, rhs: &WeightedGraph<W>) -> WeightedGraph<W> {
        let mut out = self.clone();
        for (&e, &w) in &rhs.weights {
            match out.weights.get_mut(&e) {
                Some(slot) => {
                    if w < *slot {
                        *slot = w;
                    }
                }
                None => out.insert(e, w),
            }
        }
        out
    }
}

/// Removes exactly `rhs`'s edges (and their weight entries) from `self`.
impl<W: Weight> Sub<&WeightedGraph<W>> for &WeightedGraph<W> {
    type Output = WeightedGraph<W>;

    fn sub(self, rhs: &WeightedGraph<W>) -> WeightedGraph<W> {
        let mut out = self.clone();
        for &e in rhs.edges() {
            out.delete(e);
        }
        out
    }
}

impl<W: Weight + fmt::Display> fmt::Display for WeightedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weighted {{")?;
        let mut sep = " ";
        for (e, w) in &self.weights {
            write!(f, "{sep}{e}: {w}")?;
            sep = ", ";
        }
        write!(f, " }}")
    }
}
