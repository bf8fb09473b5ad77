//! Canonical undirected edges between [`Vertex`] pairs.

use core::fmt;
use std::collections::BTreeSet;

use crate::vertex::Vertex;

/// An undirected edge, stored canonically as `(min, max)` by letter order so
/// that `(A, B)` and `(B, A)` are the same value.
///
/// Self-loops do not exist: [`Edge::new`] and [`Edge::between`] reject equal
/// endpoints.
///
/// ```rust
/// use letter_graphs::edge::Edge;
///
/// assert_eq!(Edge::new('B', 'A'), Edge::new('A', 'B'));
/// assert!(Edge::new('A', 'A').is_none());
/// assert!(Edge::new('A', 'b').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Edge {
    lo: Vertex,
    hi: Vertex,
}

/// An ordered set of canonical edges.
pub type EdgeSet = BTreeSet<Edge>;

impl Edge {
    /// Construct the canonical edge between two letters.
    ///
    /// Returns `None` if either letter is out of range or the endpoints are
    /// equal.
    pub fn new(a: char, b: char) -> Option<Self> {
        Self::between(Vertex::new(a)?, Vertex::new(b)?)
    }

    /// Construct the canonical edge between two vertices, rejecting
    /// self-pairs.
    pub fn between(a: Vertex, b: Vertex) -> Option<Self> {
        use core::cmp::Ordering::*;
        match a.cmp(&b) {
            Less => Some(Edge { lo: a, hi: b }),
            Equal => None,
            Greater => Some(Edge { lo: b, hi: a }),
        }
    }

    /// The smaller endpoint.
    pub fn lo(self) -> Vertex {
        self.lo
    }

    /// The larger endpoint.
    pub fn hi(self) -> Vertex {
        self.hi
    }

    /// Both endpoints as letters, in canonical order.
    pub fn letters(self) -> (char, char) {
        (self.lo.letter(), self.hi.letter())
    }

    /// Whether `v` is one of the endpoints.
    pub fn touches(self, v: Vertex) -> bool {
        self.lo == v || self.hi == v
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lo, self.hi)
    }
}

/// Collect the valid letter pairs of `pairs` into an [`EdgeSet`], silently
/// dropping out-of-range letters and self-pairs.
///
/// ```rust
/// use letter_graphs::edge::edge_set;
///
/// let edges = edge_set([('B', 'A'), ('A', 'A'), ('A', 'z')]);
/// assert_eq!(edges.len(), 1);
/// ```
pub fn edge_set(pairs: impl IntoIterator<Item = (char, char)>) -> EdgeSet {
    pairs
        .into_iter()
        .filter_map(|(a, b)| Edge::new(a, b))
        .collect()
}

// Edges serialize as the two-letter string "AB" so they can be used as map
// keys in formats (like JSON) that only allow string keys.
#[cfg(feature = "serde")]
impl serde::Serialize for Edge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Edge {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut letters = s.chars();
        match (letters.next(), letters.next(), letters.next()) {
            (Some(a), Some(b), None) => Edge::new(a, b)
                .ok_or_else(|| serde::de::Error::custom("edge endpoints must be two distinct letters in 'A'..='Z'")),
            _ => Err(serde::de::Error::custom("edge must be a two-letter string")),
        }
    }
}
