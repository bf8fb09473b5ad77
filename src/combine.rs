//! The add/subtract combinators over pairs of variants.
//!
//! Same-variant pairs of complete, bipartite and weighted graphs keep their
//! specialization; a weighted operand paired with anything else is rejected;
//! every other pair degrades to [`SimpleGraph`].

use core::fmt;
use core::ops::{Add, Sub};

use crate::graph::{Graph, GraphKind};
use crate::simple::SimpleGraph;
use crate::weighted::Weight;

/// The one fatal combination: exactly one operand is weighted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CombineError {
    MixedWeighted { lhs: GraphKind, rhs: GraphKind },
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineError::MixedWeighted { lhs, rhs } => write!(
                f,
                "cannot combine {lhs} and {rhs}: a weighted graph only combines with \
                 another weighted graph; convert the other operand with `as_weighted` first"
            ),
        }
    }
}

impl std::error::Error for CombineError {}

impl<W: Weight> Graph<W> {
    /// Combine two graphs, preserving the variant where the pair allows it.
    ///
    /// - bipartite + bipartite: union of the upper sets and of the lower
    ///   sets, cross-edges re-derived; stays bipartite.
    /// - complete + complete: union of the vertex sets; stays complete.
    /// - weighted + weighted: union of the edge sets, minimum weight winning
    ///   on edges present in both; stays weighted.
    /// - weighted + anything else (either order): [`CombineError`].
    /// - every other pair: union of edges and vertices into a fresh
    ///   [`SimpleGraph`]; specialization is lost.
    ///
    /// Both operands are read-only; the result is freshly owned.
    ///
    /// ```rust
    /// use letter_graphs::edge::edge_set;
    /// use letter_graphs::prelude::Graph;
    /// use letter_graphs::complete::CompleteGraph;
    /// use letter_graphs::simple::SimpleGraph;
    /// use letter_graphs::vertex::vertex_set;
    ///
    /// let s = Graph::from(SimpleGraph::new(edge_set([('A', 'B')]), []));
    /// let c = Graph::from(CompleteGraph::new(vertex_set("BC".chars())));
    /// let sum = s.add(&c).unwrap();
    /// assert_eq!(sum.kind(), letter_graphs::graph::GraphKind::Simple);
    /// assert_eq!(sum.edges(), &edge_set([('A', 'B'), ('B', 'C')]));
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self, CombineError> {
        match (self, rhs) {
            (Graph::Bipartite(a), Graph::Bipartite(b)) => Ok(Graph::Bipartite(a + b)),
            (Graph::Complete(a), Graph::Complete(b)) => Ok(Graph::Complete(a + b)),
            (Graph::Weighted(a), Graph::Weighted(b)) => Ok(Graph::Weighted(a + b)),
            (Graph::Weighted(_), _) | (_, Graph::Weighted(_)) => {
                Err(CombineError::MixedWeighted {
                    lhs: self.kind(),
                    rhs: rhs.kind(),
                })
            }
            _ => Ok(Graph::Simple(union_simple(self, rhs))),
        }
    }

    /// Subtract `rhs` from `self`, mirroring [`Graph::add`]'s
    /// variant-matching structure.
    ///
    /// - bipartite − bipartite: removes `rhs`'s side members through the
    ///   side-removal hooks; stays bipartite.
    /// - complete − complete: removes `rhs`'s vertices; stays complete.
    /// - weighted − weighted: removes exactly `rhs`'s edges and their weight
    ///   entries; stays weighted.
    /// - weighted − anything else (either order): [`CombineError`].
    /// - every other pair: `self`'s edges and vertices minus `rhs`'s edges,
    ///   in a fresh [`SimpleGraph`].
    pub fn subtract(&self, rhs: &Self) -> Result<Self, CombineError> {
        match (self, rhs) {
            (Graph::Bipartite(a), Graph::Bipartite(b)) => Ok(Graph::Bipartite(a - b)),
            (Graph::Complete(a), Graph::Complete(b)) => Ok(Graph::Complete(a - b)),
            (Graph::Weighted(a), Graph::Weighted(b)) => Ok(Graph::Weighted(a - b)),
            (Graph::Weighted(_), _) | (_, Graph::Weighted(_)) => {
                Err(CombineError::MixedWeighted {
                    lhs: self.kind(),
                    rhs: rhs.kind(),
                })
            }
            _ => Ok(Graph::Simple(difference_simple(self, rhs))),
        }
    }
}

/// The generic fallback: seed from `lhs`, union in `rhs`'s edges and
/// vertices.
fn union_simple<W: Weight>(lhs: &Graph<W>, rhs: &Graph<W>) -> SimpleGraph {
    SimpleGraph::new(
        lhs.edges().iter().chain(rhs.edges()).copied(),
        lhs.vertices().iter().chain(rhs.vertices()).copied(),
    )
}

/// The generic fallback: seed from `lhs`, remove `rhs`'s edges. Vertices
/// are kept.
fn difference_simple<W: Weight>(lhs: &Graph<W>, rhs: &Graph<W>) -> SimpleGraph {
    SimpleGraph::new(
        lhs.edges().difference(rhs.edges()).copied(),
        lhs.vertices().iter().copied(),
    )
}

// Syntactic sugar for the combinators.
impl<W: Weight> Add<&Graph<W>> for &Graph<W> {
    type Output = Result<Graph<W>, CombineError>;

    fn add(self, rhs: &Graph<W>) -> Self::Output {
        Graph::add(self, rhs)
    }
}

impl<W: Weight> Sub<&Graph<W>> for &Graph<W> {
    type Output = Result<Graph<W>, CombineError>;

    fn sub(self, rhs: &Graph<W>) -> Self::Output {
        Graph::subtract(self, rhs)
    }
}
