//! # Letter Graphs
//!
//! Small labeled graphs whose vertices are single letters `'A'..='Z'`, in
//! four structural variants:
//!
//! - [SimpleGraph](crate::simple::SimpleGraph) — unrestricted vertex and
//!   edge sets.
//! - [CompleteGraph](crate::complete::CompleteGraph) — every pair of present
//!   vertices is edged; edges are derived from the vertex set.
//! - [BipartiteGraph](crate::bipartite::BipartiteGraph) — an upper and a
//!   lower side whose cross product is the edge set.
//! - [WeightedGraph](crate::weighted::WeightedGraph) — simple-graph
//!   structure with a weight per edge and a default weight.
//!
//! Each variant re-derives its own invariant under mutation, so a complete
//! graph stays complete as vertices come and go, and a bipartite graph keeps
//! every upper vertex connected to every lower vertex.
//!
//! Edges are undirected and canonical: `(A, B)` and `(B, A)` are the same
//! edge, stored as `(min, max)`. Letters outside `'A'..='Z'` are silently
//! ignored by every mutation entry point, and self-loops are never created.
//!
//! # Combining graphs
//!
//! The [Graph](crate::graph::Graph) handle carries any variant and defines
//! "add" and "subtract" per pair of operand variants. Same-variant pairs of
//! complete, bipartite and weighted graphs keep their specialization; any
//! other pair degrades to a plain simple graph — except that a weighted
//! graph only ever combines with another weighted graph, and everything else
//! must opt in through `as_weighted`:
//!
//! ```rust
//! use letter_graphs::edge::edge_set;
//! use letter_graphs::prelude::*;
//! use letter_graphs::vertex::vertex_set;
//!
//! let complete = Graph::from(CompleteGraph::new(vertex_set("ABC".chars())));
//! let simple = Graph::from(SimpleGraph::new(edge_set([('C', 'D')]), []));
//!
//! // complete + simple degrades to a simple graph.
//! let sum = (&complete + &simple).unwrap();
//! assert_eq!(sum.kind(), GraphKind::Simple);
//! assert_eq!(sum.vertices().len(), 4);
//!
//! // weighted graphs only combine with weighted graphs...
//! let weighted = Graph::from(sum.as_weighted(2));
//! assert!((&weighted + &complete).is_err());
//!
//! // ...so convert the other operand first.
//! let both = (&weighted + &Graph::from(complete.as_weighted(7))).unwrap();
//! assert_eq!(both.weight('A', 'B'), Some(2));
//! ```
//!
//! # The factory
//!
//! [factory::create](crate::factory::create) maps a runtime kind name
//! (`"simple"`, `"complete"`, `"bipartite"`, `"weighted"`) and one of four
//! raw data shapes to the matching variant behind a
//! [Graph](crate::graph::Graph) handle, rejecting unknown names and
//! mismatched shapes.

pub mod edge;
pub mod vertex;

pub mod bipartite;
pub mod complete;
pub mod simple;
pub mod weighted;

pub mod combine;
pub mod factory;
pub mod graph;

mod storage;

pub mod prelude {
    //! The variant types plus aliases fixing the default `u32` weight.
    pub use crate::bipartite::BipartiteGraph;
    pub use crate::combine::CombineError;
    pub use crate::complete::CompleteGraph;
    pub use crate::edge::{Edge, EdgeSet};
    pub use crate::factory::BuildError;
    pub use crate::graph::GraphKind;
    pub use crate::simple::SimpleGraph;
    pub use crate::vertex::{Vertex, VertexSet};

    pub type Graph = crate::graph::Graph<u32>;
    pub type WeightedGraph = crate::weighted::WeightedGraph<u32>;
    pub type GraphData = crate::factory::GraphData<u32>;
}
