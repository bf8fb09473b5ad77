//! Building a variant from a runtime kind tag and raw construction data.

use core::fmt;
use core::str::FromStr;

use crate::bipartite::BipartiteGraph;
use crate::complete::CompleteGraph;
use crate::edge::EdgeSet;
use crate::graph::{Graph, GraphKind};
use crate::simple::SimpleGraph;
use crate::vertex::VertexSet;
use crate::weighted::{Weight, WeightedGraph};

/// The raw construction shapes a graph can be built from.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphData<W> {
    /// Upper and lower vertex sets — builds a [`BipartiteGraph`].
    Sides(VertexSet, VertexSet),
    /// One vertex set — builds a [`CompleteGraph`].
    Vertices(VertexSet),
    /// One edge set — builds a [`SimpleGraph`].
    Edges(EdgeSet),
    /// An edge set plus the default weight — builds a [`WeightedGraph`].
    WeightedEdges(EdgeSet, W),
}

impl<W> GraphData<W> {
    fn shape(&self) -> &'static str {
        match self {
            GraphData::Sides(..) => "two vertex sets",
            GraphData::Vertices(_) => "a vertex set",
            GraphData::Edges(_) => "an edge set",
            GraphData::WeightedEdges(..) => "an edge set with a default weight",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BuildError {
    /// The kind name is not one of `"simple"`, `"complete"`, `"bipartite"`,
    /// `"weighted"`.
    UnknownKind(String),
    /// The kind exists but cannot be built from the supplied shape.
    UnsupportedShape {
        kind: GraphKind,
        shape: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnknownKind(name) => write!(f, "unknown graph kind {name:?}"),
            BuildError::UnsupportedShape { kind, shape } => {
                write!(f, "cannot build a {kind} graph from {shape}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl FromStr for GraphKind {
    type Err = BuildError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "simple" => Ok(GraphKind::Simple),
            "complete" => Ok(GraphKind::Complete),
            "bipartite" => Ok(GraphKind::Bipartite),
            "weighted" => Ok(GraphKind::Weighted),
            _ => Err(BuildError::UnknownKind(name.to_string())),
        }
    }
}

/// Build the concrete variant for `kind` from `data`.
///
/// Each kind accepts exactly one shape; every other combination is an
/// [`BuildError::UnsupportedShape`].
pub fn build<W: Weight>(kind: GraphKind, data: GraphData<W>) -> Result<Graph<W>, BuildError> {
    match (kind, data) {
        (GraphKind::Bipartite, GraphData::Sides(upper, lower)) => {
            Ok(Graph::Bipartite(BipartiteGraph::new(upper, lower)))
        }
        (GraphKind::Complete, GraphData::Vertices(vertices)) => {
            Ok(Graph::Complete(CompleteGraph::new(vertices)))
        }
        (GraphKind::Simple, GraphData::Edges(edges)) => {
            Ok(Graph::Simple(SimpleGraph::new(edges, [])))
        }
        (GraphKind::Weighted, GraphData::WeightedEdges(edges, default_weight)) => {
            Ok(Graph::Weighted(WeightedGraph::new(edges, default_weight, [])))
        }
        (kind, data) => Err(BuildError::UnsupportedShape {
            kind,
            shape: data.shape(),
        }),
    }
}

/// Build a variant from its registry name.
///
/// ```rust
/// use letter_graphs::factory::{create, GraphData};
/// use letter_graphs::vertex::vertex_set;
///
/// let g = create::<u32>(
///     "bipartite",
///     GraphData::Sides(vertex_set("A".chars()), vertex_set("B".chars())),
/// )
/// .unwrap();
/// assert_eq!(g.edges().len(), 1);
///
/// // "complete" cannot be built from two vertex sets.
/// let err = create::<u32>(
///     "complete",
///     GraphData::Sides(vertex_set("A".chars()), vertex_set("B".chars())),
/// );
/// assert!(err.is_err());
/// ```
pub fn create<W: Weight>(name: &str, data: GraphData<W>) -> Result<Graph<W>, BuildError> {
    build(name.parse()?, data)
}
