//! The uniform handle over the four concrete variants.

use core::fmt;

use crate::bipartite::BipartiteGraph;
use crate::complete::CompleteGraph;
use crate::edge::EdgeSet;
use crate::simple::SimpleGraph;
use crate::vertex::VertexSet;
use crate::weighted::{Weight, WeightedGraph};

/// The runtime tag naming a variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphKind {
    Simple,
    Complete,
    Bipartite,
    Weighted,
}

impl GraphKind {
    /// The registry name of the kind, as accepted by
    /// [`crate::factory::create`].
    pub fn name(self) -> &'static str {
        match self {
            GraphKind::Simple => "simple",
            GraphKind::Complete => "complete",
            GraphKind::Bipartite => "bipartite",
            GraphKind::Weighted => "weighted",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A graph of any variant, dispatching each capability to the variant's own
/// invariant-preserving logic.
///
/// Operations that are meaningless for a variant are explicit no-op arms,
/// never errors: direct edge mutation on [`CompleteGraph`] and
/// [`BipartiteGraph`] (their edges are derived), vertex mutation on
/// [`BipartiteGraph`] (membership is side-driven), side and weight
/// operations everywhere but their own variant.
///
/// ```rust
/// use letter_graphs::prelude::Graph;
/// use letter_graphs::complete::CompleteGraph;
/// use letter_graphs::vertex::vertex_set;
///
/// let mut g = Graph::from(CompleteGraph::new(vertex_set("AB".chars())));
/// g.add_edge('A', 'C'); // derived edges: explicit no-op
/// assert_eq!(g.edges().len(), 1);
/// g.add_vertex('C');
/// assert_eq!(g.edges().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Graph<W> {
    Simple(SimpleGraph),
    Complete(CompleteGraph),
    Bipartite(BipartiteGraph),
    Weighted(WeightedGraph<W>),
}

impl<W: Weight> Graph<W> {
    pub fn kind(&self) -> GraphKind {
        match self {
            Graph::Simple(_) => GraphKind::Simple,
            Graph::Complete(_) => GraphKind::Complete,
            Graph::Bipartite(_) => GraphKind::Bipartite,
            Graph::Weighted(_) => GraphKind::Weighted,
        }
    }

    pub fn vertices(&self) -> &VertexSet {
        match self {
            Graph::Simple(g) => g.vertices(),
            Graph::Complete(g) => g.vertices(),
            Graph::Bipartite(g) => g.vertices(),
            Graph::Weighted(g) => g.vertices(),
        }
    }

    pub fn edges(&self) -> &EdgeSet {
        match self {
            Graph::Simple(g) => g.edges(),
            Graph::Complete(g) => g.edges(),
            Graph::Bipartite(g) => g.edges(),
            Graph::Weighted(g) => g.edges(),
        }
    }

    /// Insert a vertex. Bipartite membership is side-driven, so this is a
    /// no-op there; use [`Graph::add_upper`] / [`Graph::add_lower`].
    pub fn add_vertex(&mut self, v: char) {
        match self {
            Graph::Simple(g) => g.add_vertex(v),
            Graph::Complete(g) => g.add_vertex(v),
            Graph::Bipartite(_) => {}
            Graph::Weighted(g) => g.add_vertex(v),
        }
    }

    /// Remove a vertex and its incident edges. No-op on bipartite graphs;
    /// use [`Graph::remove_upper`] / [`Graph::remove_lower`].
    pub fn remove_vertex(&mut self, v: char) {
        match self {
            Graph::Simple(g) => g.remove_vertex(v),
            Graph::Complete(g) => g.remove_vertex(v),
            Graph::Bipartite(_) => {}
            Graph::Weighted(g) => g.remove_vertex(v),
        }
    }

    /// Insert an edge (at the default weight on weighted graphs). No-op on
    /// complete and bipartite graphs, whose edges are derived.
    pub fn add_edge(&mut self, a: char, b: char) {
        match self {
            Graph::Simple(g) => g.add_edge(a, b),
            Graph::Complete(_) | Graph::Bipartite(_) => {}
            Graph::Weighted(g) => g.add_edge(a, b),
        }
    }

    /// Insert an edge at an explicit weight. Only weighted graphs carry
    /// weights, so this is a no-op everywhere else.
    pub fn add_edge_weighted(&mut self, a: char, b: char, w: W) {
        match self {
            Graph::Weighted(g) => g.add_edge_weighted(a, b, w),
            Graph::Simple(_) | Graph::Complete(_) | Graph::Bipartite(_) => {}
        }
    }

    /// Remove an edge. No-op on complete and bipartite graphs.
    pub fn remove_edge(&mut self, a: char, b: char) {
        match self {
            Graph::Simple(g) => g.remove_edge(a, b),
            Graph::Complete(_) | Graph::Bipartite(_) => {}
            Graph::Weighted(g) => g.remove_edge(a, b),
        }
    }

    /// Insert a vertex on the upper side; meaningful only for bipartite
    /// graphs.
    pub fn add_upper(&mut self, v: char) {
        if let Graph::Bipartite(g) = self {
            g.add_upper(v);
        }
    }

    /// Insert a vertex on the lower side; meaningful only for bipartite
    /// graphs.
    pub fn add_lower(&mut self, v: char) {
        if let Graph::Bipartite(g) = self {
            g.add_lower(v);
        }
    }

    /// Remove a vertex from the upper side; meaningful only for bipartite
    /// graphs.
    pub fn remove_upper(&mut self, v: char) {
        if let Graph::Bipartite(g) = self {
            g.remove_upper(v);
        }
    }

    /// Remove a vertex from the lower side; meaningful only for bipartite
    /// graphs.
    pub fn remove_lower(&mut self, v: char) {
        if let Graph::Bipartite(g) = self {
            g.remove_lower(v);
        }
    }

    /// The weight of an edge; `None` on every non-weighted variant.
    pub fn weight(&self, a: char, b: char) -> Option<W> {
        match self {
            Graph::Weighted(g) => g.weight(a, b),
            Graph::Simple(_) | Graph::Complete(_) | Graph::Bipartite(_) => None,
        }
    }

    /// Update the weight of an existing edge; meaningful only for weighted
    /// graphs.
    pub fn set_weight(&mut self, a: char, b: char, w: W) {
        if let Graph::Weighted(g) = self {
            g.set_weight(a, b, w);
        }
    }

    /// Copy into a new [`WeightedGraph`], giving every existing edge the
    /// weight `default_weight`. Available on every variant; the source is
    /// unmodified.
    pub fn as_weighted(&self, default_weight: W) -> WeightedGraph<W> {
        match self {
            Graph::Simple(g) => g.as_weighted(default_weight),
            Graph::Complete(g) => g.as_weighted(default_weight),
            Graph::Bipartite(g) => g.as_weighted(default_weight),
            Graph::Weighted(g) => g.as_weighted(default_weight),
        }
    }
}

impl<W> From<SimpleGraph> for Graph<W> {
    fn from(g: SimpleGraph) -> Self {
        Graph::Simple(g)
    }
}

impl<W> From<CompleteGraph> for Graph<W> {
    fn from(g: CompleteGraph) -> Self {
        Graph::Complete(g)
    }
}

impl<W> From<BipartiteGraph> for Graph<W> {
    fn from(g: BipartiteGraph) -> Self {
        Graph::Bipartite(g)
    }
}

impl<W> From<WeightedGraph<W>> for Graph<W> {
    fn from(g: WeightedGraph<W>) -> Self {
        Graph::Weighted(g)
    }
}

impl<W: Weight + fmt::Display> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Graph::Simple(g) => fmt::Display::fmt(g, f),
            Graph::Complete(g) => fmt::Display::fmt(g, f),
            Graph::Bipartite(g) => fmt::Display::fmt(g, f),
            Graph::Weighted(g) => fmt::Display::fmt(g, f),
        }
    }
}
