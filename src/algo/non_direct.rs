/*!
Shortest paths that do not consist of the direct edge between the endpoints.

Given `src` and `dst`, the direct edge `src -> dst` (if any) is hidden from the graph, an
ordinary shortest-path search is run and the edge is reinstated afterwards. The result is the
cheapest route with at least one intermediate hop, or the empty path if there is none.

Hiding is implemented by the [`HiddenEdge`] guard which restores the edge when dropped, so the
graph is never left without an edge it logically has, even if the search unwinds.
*/

use std::ops::Deref;

use tracing::trace;

use super::*;

/// Guard that temporarily removes the edge `src -> dst` from a graph.
///
/// While the guard lives, the graph can only be read through it; the removed edge is stored
/// back with its previous weight when the guard is dropped.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = MatrixGraph::from_nodes_and_edges(["A", "B"], [("A", "B", 7)]).unwrap();
/// {
///     let hidden = HiddenEdge::new(&mut graph, &"A", &"B").unwrap();
///     assert_eq!(hidden.removed().map(|e| e.weight()), Some(7));
///     assert!(!hidden.connects(&"A", &"B").unwrap());
/// }
/// assert_eq!(graph.weight_between(&"A", &"B"), Ok(7));
/// ```
pub struct HiddenEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    graph: &'a mut G,
    removed: Option<(Slot, Slot, Edge<G::Node>)>,
}

impl<'a, G> HiddenEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    /// Removes `src -> dst` from `graph` if it exists.
    /// A missing edge is not an error: the guard then simply hides nothing.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is not registered.
    pub fn new(
        graph: &'a mut G,
        src: &G::Node,
        dst: &G::Node,
    ) -> GraphResult<Self, G::Node> {
        let (u, v) = graph.slots_of(src, dst)?;

        let removed = match graph.remove_edge_between(src, dst) {
            Ok(edge) => {
                trace!(%src, %dst, weight = edge.weight(), "hiding direct edge");
                Some((u, v, edge))
            }
            Err(GraphError::EdgeNotFound { .. }) => None,
            Err(err) => return Err(err),
        };

        Ok(Self { graph, removed })
    }

    /// Returns the hidden edge, `None` if there was no direct edge
    pub fn removed(&self) -> Option<&Edge<G::Node>> {
        self.removed.as_ref().map(|(_, _, edge)| edge)
    }
}

impl<G> Deref for HiddenEdge<'_, G>
where
    G: GraphEdgeEditing,
{
    type Target = G;

    fn deref(&self) -> &G {
        &*self.graph
    }
}

impl<G> Drop for HiddenEdge<'_, G>
where
    G: GraphEdgeEditing,
{
    fn drop(&mut self) {
        if let Some((u, v, edge)) = self.removed.take() {
            trace!(src = %edge.src(), dst = %edge.dst(), "restoring direct edge");
            self.graph.set_weight_at(u, v, edge.weight());
        }
    }
}

/// Shortest paths with at least one intermediate hop
pub trait NonDirectPath: ShortestPath + GraphEdgeEditing {
    /// Returns the cheapest path from `src` to `dst` that does not consist of the direct edge
    /// `src -> dst`, or the empty path with [`INFINITE_COST`] if no such path exists.
    ///
    /// If there is no direct edge, this is the ordinary shortest path. The graph is left
    /// edge-for-edge identical to its state before the call; taking `&mut self` makes the
    /// hide → search → restore sequence atomic for all other users of the graph.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is not registered.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = MatrixGraph::from_nodes_and_edges(
    ///     ["A", "B", "C"],
    ///     [("A", "B", 1), ("A", "C", 2), ("C", "B", 3)],
    /// )
    /// .unwrap();
    ///
    /// let path = graph.shortest_non_direct_path(&"A", &"B").unwrap();
    /// assert_eq!(path.to_string(), "A -> C -> B");
    /// assert_eq!(path.cost(), 5);
    /// assert_eq!(graph.weight_between(&"A", &"B"), Ok(1));
    /// ```
    fn shortest_non_direct_path(
        &mut self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<Path<Self::Node>, Self::Node> {
        let hidden = HiddenEdge::new(self, src, dst)?;
        hidden.shortest_path(src, dst)
    }
}

impl<G> NonDirectPath for G where G: ShortestPath + GraphEdgeEditing {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::digest::GraphDigest;

    fn scenario_b<S: WeightStore>() -> WeightedGraph<&'static str, S> {
        WeightedGraph::from_nodes_and_edges(
            ["A", "B", "C", "D", "E"],
            [
                ("A", "B", 1),
                ("A", "C", 2),
                ("B", "C", 3),
                ("C", "B", 3),
                ("B", "D", 3),
                ("C", "D", 1),
                ("D", "E", 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn direct_edge_is_excluded() {
        let mut graph = scenario_b::<DenseWeights>();

        assert_eq!(graph.shortest_path(&"A", &"B").unwrap().nodes(), &["A", "B"]);

        let path = graph.shortest_non_direct_path(&"A", &"B").unwrap();
        assert_eq!(path.nodes(), &["A", "C", "B"]);
        assert_eq!(path.cost(), 5);
    }

    #[test]
    fn graph_is_restored() {
        let mut graph = scenario_b::<SparseWeights>();
        let digest = graph.digest_sha256();
        let edges = graph.edges().collect::<Vec<_>>();

        for (src, dst) in [("A", "B"), ("C", "D"), ("A", "E"), ("E", "A"), ("B", "B")] {
            graph.shortest_non_direct_path(&src, &dst).unwrap();
            assert_eq!(graph.digest_sha256(), digest);
        }

        assert_eq!(graph.edges().collect::<Vec<_>>(), edges);
        assert!(graph.has_edge(&Edge::new("A", "B", 1)).unwrap());
    }

    #[test]
    fn without_direct_edge_behaves_like_shortest_path() {
        let mut graph = scenario_b::<DenseWeights>();

        let expected = graph.shortest_path(&"A", &"E").unwrap();
        let path = graph.shortest_non_direct_path(&"A", &"E").unwrap();
        assert_eq!(path, expected);
        assert_eq!(path.nodes(), &["A", "C", "D", "E"]);
        assert_eq!(path.cost(), 8);
    }

    #[test]
    fn unreachable_without_direct_edge() {
        let mut graph = scenario_b::<DenseWeights>();

        // E has no outgoing edges at all
        let path = graph.shortest_non_direct_path(&"E", &"A").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), INFINITE_COST);

        // D -> E is the only way into E
        let path = graph.shortest_non_direct_path(&"D", &"E").unwrap();
        assert!(path.is_empty());
        assert_eq!(graph.weight_between(&"D", &"E"), Ok(5));
    }

    #[test]
    fn unknown_nodes_leave_graph_untouched() {
        let mut graph = scenario_b::<SparseWeights>();
        let digest = graph.digest_sha256();

        assert_eq!(
            graph.shortest_non_direct_path(&"A", &"X"),
            Err(GraphError::NodeNotFound("X"))
        );
        assert_eq!(
            graph.shortest_non_direct_path(&"X", &"A"),
            Err(GraphError::NodeNotFound("X"))
        );
        assert_eq!(graph.digest_sha256(), digest);
    }

    #[test]
    fn restored_on_unwind() {
        let mut graph = scenario_b::<DenseWeights>();
        let digest = graph.digest_sha256();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let hidden = HiddenEdge::new(&mut graph, &"A", &"B").unwrap();
            assert!(hidden.removed().is_some());
            panic!("search interrupted");
        }));

        assert!(result.is_err());
        assert_eq!(graph.digest_sha256(), digest);
    }

    #[test]
    fn hiding_a_missing_edge() {
        let mut graph = scenario_b::<DenseWeights>();
        let hidden = HiddenEdge::new(&mut graph, &"E", &"A").unwrap();
        assert!(hidden.removed().is_none());
        assert_eq!(hidden.number_of_edges(), 7);
    }
}
