//! Vertex labels: single letters `'A'..='Z'`.

use core::fmt;
use std::collections::BTreeSet;

/// A vertex label.
///
/// Construction is the only validation boundary: [`Vertex::new`] rejects any
/// character outside `'A'..='Z'` by returning `None`, and every mutation
/// entry point in the crate turns that `None` into a silent no-op.
///
/// ```rust
/// use letter_graphs::vertex::Vertex;
///
/// assert!(Vertex::new('A').is_some());
/// assert!(Vertex::new('a').is_none());
/// assert!(Vertex::new('@').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Vertex(char);

/// An ordered set of vertices.
///
/// Ordering makes iteration (and therefore [`core::fmt::Display`] output)
/// deterministic.
pub type VertexSet = BTreeSet<Vertex>;

impl Vertex {
    /// Construct a vertex from a letter, rejecting anything outside
    /// `'A'..='Z'`.
    pub fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Vertex(letter))
        } else {
            None
        }
    }

    /// The underlying letter.
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collect the in-range letters of `letters` into a [`VertexSet`],
/// silently dropping everything else.
///
/// ```rust
/// use letter_graphs::vertex::vertex_set;
///
/// // 'x' and '!' are out of range and dropped.
/// assert_eq!(vertex_set("ABx!".chars()).len(), 2);
/// ```
pub fn vertex_set(letters: impl IntoIterator<Item = char>) -> VertexSet {
    letters.into_iter().filter_map(Vertex::new).collect()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Vertex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vertex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let letter = char::deserialize(deserializer)?;
        Vertex::new(letter)
            .ok_or_else(|| serde::de::Error::custom("vertex letter must be in 'A'..='Z'"))
    }
}
