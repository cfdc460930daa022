/*!
# Graph Representations

A [`WeightedGraph`] composes a [`NodeRegistry`] (identity ⇄ slot) with a [`WeightStore`] that
holds the weights between slots. The store decides the memory/lookup trade-off:

- [`DenseWeights`]: `capacity × capacity` matrix, `O(1)` lookup/update, `O(capacity²)` memory,
- [`SparseWeights`]: one sorted row per slot, `O(log deg)` lookup, `O(n + m)` memory.

Both expose identical behaviour; in particular outgoing edges are always reported in ascending
slot order of their destinations.

The graph never grows: the capacity passed on construction bounds the number of nodes forever.
*/

use crate::{ops::*, *};

mod dense;
mod registry;
mod sparse;

pub mod digest;

pub use dense::*;
pub use registry::*;
pub use sparse::*;

/// Storage of edge weights between slots of a fixed-capacity graph.
///
/// A weight of `0` encodes "no edge".
pub trait WeightStore: Clone {
    /// Creates an empty store for slots `0..capacity`
    fn new(capacity: NumNodes) -> Self;

    /// Returns the weight stored for `(u, v)` or `None` if there is no edge
    /// ** Might panic if `u >= capacity || v >= capacity` **
    fn weight(&self, u: Slot, v: Slot) -> Option<Weight>;

    /// Stores `weight` for `(u, v)` and returns the previous weight. Storing `0` clears the entry.
    /// ** Might panic if `u >= capacity || v >= capacity` **
    fn set_weight(&mut self, u: Slot, v: Slot, weight: Weight) -> Option<Weight>;

    /// Returns an iterator over `(v, weight)` of all edges `(u, v)` in ascending order of `v`
    /// ** Might panic if `u >= capacity` **
    fn out_weights(&self, u: Slot) -> impl Iterator<Item = (Slot, Weight)> + '_;

    /// Returns the number of stored edges
    fn number_of_edges(&self) -> NumEdges;
}

/// A directed weighted graph over node identities `N` with a fixed capacity.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = MatrixGraph::new(3);
/// graph.add_nodes(["LIS", "OPO", "FAO"]).unwrap();
/// graph.add_edge(Edge::new("LIS", "OPO", 274)).unwrap();
///
/// assert!(graph.connects(&"LIS", &"OPO").unwrap());
/// assert!(!graph.connects(&"OPO", &"LIS").unwrap());
/// assert_eq!(graph.weight_between(&"LIS", &"OPO"), Ok(274));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, S> {
    registry: NodeRegistry<N>,
    weights: S,
}

/// Weighted graph backed by a dense adjacency matrix
pub type MatrixGraph<N> = WeightedGraph<N, DenseWeights>;

/// Weighted graph backed by sorted adjacency rows
pub type SparseGraph<N> = WeightedGraph<N, SparseWeights>;

impl<N, S> WeightedGraph<N, S>
where
    N: GraphNode,
    S: WeightStore,
{
    /// Creates an empty graph that can hold up to `capacity` nodes
    pub fn new(capacity: NumNodes) -> Self {
        Self {
            registry: NodeRegistry::new(capacity),
            weights: S::new(capacity),
        }
    }

    /// Creates a graph whose capacity equals the number of given nodes and registers all of them
    ///
    /// # Errors
    /// [`GraphError::NodeAlreadyPresent`] if `nodes` contains duplicates.
    pub fn from_nodes<I>(nodes: I) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
    {
        let nodes: Vec<N> = nodes.into_iter().collect();
        let mut graph = Self::new(nodes.len() as NumNodes);
        graph.add_nodes(nodes)?;
        Ok(graph)
    }

    /// Like [`WeightedGraph::from_nodes`] and additionally inserts all `edges`
    ///
    /// # Errors
    /// [`GraphError::NodeAlreadyPresent`] for duplicate nodes,
    /// [`GraphError::NodeNotFound`] if an edge references a node not contained in `nodes`.
    pub fn from_nodes_and_edges<I, J, E>(nodes: I, edges: J) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let mut graph = Self::from_nodes(nodes)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Read access to the identity ⇄ slot mapping
    pub fn registry(&self) -> &NodeRegistry<N> {
        &self.registry
    }

    /// Read access to the underlying weight store
    pub fn weights(&self) -> &S {
        &self.weights
    }
}

impl<N: GraphNode, S: WeightStore> GraphType for WeightedGraph<N, S> {
    type Node = N;
}

impl<N: GraphNode, S: WeightStore> GraphNodeOrder for WeightedGraph<N, S> {
    fn number_of_nodes(&self) -> NumNodes {
        self.registry.len()
    }

    fn capacity(&self) -> NumNodes {
        self.registry.capacity()
    }

    fn slot_of(&self, node: &N) -> GraphResult<Slot, N> {
        self.registry.slot_of(node)
    }

    fn node_at(&self, slot: Slot) -> Option<&N> {
        self.registry.node_at(slot)
    }

    fn has_node(&self, node: &N) -> bool {
        self.registry.contains(node)
    }
}

impl<N: GraphNode, S: WeightStore> GraphNodeEditing for WeightedGraph<N, S> {
    fn add_node(&mut self, node: N) -> GraphResult<Slot, N> {
        self.registry.register(node)
    }
}

impl<N: GraphNode, S: WeightStore> WeightedAdjacency for WeightedGraph<N, S> {
    fn weight_at(&self, u: Slot, v: Slot) -> Option<Weight> {
        self.weights.weight(u, v)
    }

    fn out_weights_of(&self, u: Slot) -> impl Iterator<Item = (Slot, Weight)> + '_ {
        self.weights.out_weights(u)
    }

    fn number_of_edges(&self) -> NumEdges {
        self.weights.number_of_edges()
    }
}

impl<N: GraphNode, S: WeightStore> GraphEdgeEditing for WeightedGraph<N, S> {
    fn set_weight_at(&mut self, u: Slot, v: Slot, weight: Weight) -> Option<Weight> {
        debug_assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        self.weights.set_weight(u, v, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::digest::GraphDigest;

    fn airports<S: WeightStore>() -> WeightedGraph<&'static str, S> {
        WeightedGraph::from_nodes_and_edges(["LIS", "OPO", "FAO"], [("LIS", "OPO", 274)]).unwrap()
    }

    #[test]
    fn overwrite_edge() {
        let mut graph = airports::<DenseWeights>();
        let old = Edge::new("LIS", "OPO", 274);
        assert!(graph.has_edge(&old).unwrap());

        graph.add_edge(Edge::new("LIS", "OPO", 300)).unwrap();
        assert_eq!(graph.weight_between(&"LIS", &"OPO"), Ok(300));
        assert!(!graph.has_edge(&old).unwrap());
        assert!(graph.has_edge(&old.with_weight(300)).unwrap());
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn zero_weight_clears() {
        let mut graph = airports::<SparseWeights>();
        assert_eq!(graph.replace_edge(Edge::new("LIS", "OPO", 0)), Ok(Some(274)));
        assert_eq!(graph.connects(&"LIS", &"OPO"), Ok(false));
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn unknown_node_is_rejected() {
        let mut graph = airports::<DenseWeights>();
        let digest = graph.digest_sha256();

        assert_eq!(
            graph.add_edge(Edge::new("LIS", "MAD", 500)),
            Err(GraphError::NodeNotFound("MAD"))
        );
        assert_eq!(
            graph.edge_between(&"MAD", &"LIS"),
            Err(GraphError::NodeNotFound("MAD"))
        );
        assert_eq!(graph.digest_sha256(), digest);
    }

    #[test]
    fn stores_agree() {
        let dense = airports::<DenseWeights>();
        let sparse = airports::<SparseWeights>();

        assert_eq!(dense.edges().collect::<Vec<_>>(), sparse.edges().collect::<Vec<_>>());
        assert_eq!(dense.digest_sha256(), sparse.digest_sha256());
        assert_eq!(dense.registry().as_slice(), sparse.registry().as_slice());
        assert_eq!(dense.weights().row(0), &[0, 274, 0]);
        assert_eq!(sparse.weights().row(0), &[(1, 274)]);
    }

    #[test]
    fn empty_graph() {
        let graph = MatrixGraph::<&str>::new(4);
        assert!(graph.is_empty());
        assert!(!graph.is_full());
        assert_eq!(graph.capacity(), 4);
        assert_eq!(graph.nodes().count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
