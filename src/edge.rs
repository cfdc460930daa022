use std::fmt::{Debug, Display};

use crate::GraphNode;

/// Edge weights are non-negative integers.
///
/// A stored weight of `0` is indistinguishable from a missing edge, hence zero-weight edges
/// cannot be represented by any graph of this crate.
pub type Weight = u32;

/// Weight assigned by [`Edge::unit`] and `From<(N, N)>`
pub const DEFAULT_WEIGHT: Weight = 1;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A directed, weighted edge between two node identities.
///
/// Edges are immutable: use [`Edge::with_weight`] to obtain a re-weighted copy.
/// An edge `(u, v)` does not imply an edge `(v, u)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N> {
    src: N,
    dst: N,
    weight: Weight,
}

impl<N: Display> Display for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.src, self.dst, self.weight)
    }
}

impl<N: Display> Debug for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<N> Edge<N> {
    /// Creates the edge `src -> dst` with the given weight
    pub fn new(src: N, dst: N, weight: Weight) -> Self {
        Self { src, dst, weight }
    }

    /// Creates the edge `src -> dst` with [`DEFAULT_WEIGHT`]
    pub fn unit(src: N, dst: N) -> Self {
        Self::new(src, dst, DEFAULT_WEIGHT)
    }

    /// Source endpoint
    pub fn src(&self) -> &N {
        &self.src
    }

    /// Destination endpoint
    pub fn dst(&self) -> &N {
        &self.dst
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the same edge carrying `weight` instead
    pub fn with_weight(self, weight: Weight) -> Self {
        Self { weight, ..self }
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            weight: self.weight,
        }
    }

    /// Decomposes the edge into `(src, dst, weight)`
    pub fn into_parts(self) -> (N, N, Weight) {
        (self.src, self.dst, self.weight)
    }
}

impl<N: GraphNode> Edge<N> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from(value: (N, N)) -> Self {
        Edge::unit(value.0, value.1)
    }
}

impl<N> From<(N, N, Weight)> for Edge<N> {
    fn from(value: (N, N, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl<N: Clone> From<&(N, N, Weight)> for Edge<N> {
    fn from(value: &(N, N, Weight)) -> Self {
        Edge::new(value.0.clone(), value.1.clone(), value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let e: Edge<&str> = ("A", "B").into();
        assert_eq!(e.weight(), DEFAULT_WEIGHT);
        assert_eq!((*e.src(), *e.dst()), ("A", "B"));

        let e: Edge<&str> = ("A", "B", 7).into();
        assert_eq!(e, Edge::new("A", "B", 7));
        assert_eq!(e.to_string(), "(A,B;7)");
    }

    #[test]
    fn copy_on_write() {
        let e = Edge::new("A", "B", 3);
        let f = e.clone().with_weight(5);
        assert_eq!(e.weight(), 3);
        assert_eq!(f.weight(), 5);
        assert_eq!(f.clone().reverse().into_parts(), ("B", "A", 5));
        assert!(!f.is_loop());
        assert!(Edge::unit("C", "C").is_loop());
    }
}
