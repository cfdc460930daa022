/*!
# Paths

A [`Path`] is the result of a shortest-path query: the ordered node identities from source to
destination together with the accumulated cost of the traversed edges.

An **empty** path denotes that no path was found. Its cost is [`INFINITE_COST`], so callers
must check [`Path::is_empty`] before using the cost.
*/

use std::fmt::Display;

/// Accumulated weight along a path.
///
/// Wider than [`Weight`](crate::Weight) such that sums over many heavy edges cannot overflow.
pub type Cost = u64;

/// Cost of an empty path, i.e. "unreachable"
pub const INFINITE_COST: Cost = Cost::MAX;

/// Ordered sequence of node identities plus the total cost of traversing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: Cost,
}

impl<N> Default for Path<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N> Path<N> {
    /// Creates a path visiting `nodes` in order with the given total cost
    pub fn new(nodes: Vec<N>, cost: Cost) -> Self {
        Self { nodes, cost }
    }

    /// Creates the empty path with [`INFINITE_COST`]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            cost: INFINITE_COST,
        }
    }

    /// Appends a node to the end of the path
    pub fn push(&mut self, node: N) {
        self.nodes.push(node);
    }

    /// Reverses the order of the nodes in place; the cost is unaffected
    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    /// Consumes and returns the reversed path
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Returns *true* if no path was found
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges traversed by the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// First node of the path, if any
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Last node of the path, if any
    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Renders the route as `A -> B -> C`; the empty path renders as an empty string
impl<N: Display> Display for Path<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path() {
        let path: Path<&str> = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.cost(), INFINITE_COST);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.start(), None);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn build_backwards() {
        let mut path = Path::new(Vec::new(), 6);
        for node in ["E", "D", "A"] {
            path.push(node);
        }

        let path = path.reversed();
        assert_eq!(path.nodes(), &["A", "D", "E"]);
        assert_eq!(path.start(), Some(&"A"));
        assert_eq!(path.end(), Some(&"E"));
        assert_eq!(path.hops(), 2);
        assert_eq!(path.cost(), 6);
        assert_eq!(path.to_string(), "A -> D -> E");
        assert_eq!(path.into_iter().collect::<String>(), "ADE");
    }
}
