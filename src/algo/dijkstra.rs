/*!
Single-source shortest paths via Dijkstra's algorithm.

The search runs on slots: distances and predecessors are stored per slot and only translated
back into node identities when a [`Path`] is requested. All edge weights are non-negative by
type, which is the precondition for the correctness of Dijkstra's algorithm.

The priority queue uses **lazy deletion**: instead of a decrease-key operation, improved
distances are pushed again and stale queue entries are skipped when popped.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::trace;

use super::*;

/// Result of a single-source search: per-slot distances and predecessors.
///
/// Slots that were not reached have distance [`INFINITE_COST`] and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Slot,
    distances: Vec<Cost>,
    predecessors: Vec<Option<OptionalSlot>>,
}

impl ShortestPathTree {
    /// Returns the slot the search started from
    pub fn source(&self) -> Slot {
        self.source
    }

    /// Returns the distance of every slot; unreached slots hold [`INFINITE_COST`]
    pub fn distances(&self) -> &[Cost] {
        &self.distances
    }

    /// Returns the distance from the source to `v` or `None` if `v` was not reached
    pub fn distance_to(&self, v: Slot) -> Option<Cost> {
        self.distances
            .get(v as usize)
            .copied()
            .filter(|&d| d != INFINITE_COST)
    }

    /// Returns *true* if `v` was reached
    pub fn is_reachable(&self, v: Slot) -> bool {
        self.distance_to(v).is_some()
    }

    /// Returns the slot preceding `v` on its shortest path; `None` for the source and
    /// unreached slots
    pub fn predecessor_of(&self, v: Slot) -> Option<Slot> {
        self.predecessors
            .get(v as usize)
            .copied()
            .flatten()
            .map(|p| p.get())
    }

    /// Returns the slots of the shortest path from the source to `target` or `None` if
    /// `target` was not reached
    pub fn slots_to(&self, target: Slot) -> Option<Vec<Slot>> {
        self.distance_to(target)?;

        let mut slots = vec![target];
        let mut slot = target;
        while let Some(pred) = self.predecessor_of(slot) {
            slots.push(pred);
            slot = pred;
        }

        slots.reverse();
        Some(slots)
    }

    /// Translates the shortest path to `target` into node identities of `graph`.
    ///
    /// The path is collected by walking the predecessors backwards from `target` and reversing
    /// the result. Returns the empty path if `target` was not reached.
    pub fn path_to<G>(&self, graph: &G, target: Slot) -> Path<G::Node>
    where
        G: GraphNodeOrder,
    {
        let Some(cost) = self.distance_to(target) else {
            return Path::empty();
        };

        let mut path = Path::new(Vec::new(), cost);
        let mut slot = Some(target);
        while let Some(s) = slot {
            if let Some(node) = graph.node_at(s) {
                path.push(node.clone());
            }
            slot = self.predecessor_of(s);
        }

        path.reversed()
    }
}

/// Configurable Dijkstra search over a weighted graph.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = MatrixGraph::from_nodes_and_edges(
///     ["A", "B", "C"],
///     [("A", "B", 4), ("A", "C", 1), ("C", "B", 2)],
/// )
/// .unwrap();
///
/// let tree = Dijkstra::new(&graph, 0).run();
/// assert_eq!(tree.distances(), &[0, 3, 1]);
/// assert_eq!(tree.slots_to(1), Some(vec![0, 2, 1]));
/// ```
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    source: Slot,
    stop_at: Option<Slot>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new search starting from slot `source`
    /// ** Panics on `run` if `source >= n` **
    pub fn new(graph: &'a G, source: Slot) -> Self {
        Self {
            graph,
            source,
            stop_at: None,
        }
    }

    /// Stops the search as soon as `target` is settled.
    ///
    /// Distances of settled slots are final, so the result for `target` is unaffected; other
    /// slots may be left with tentative or infinite distances.
    pub fn stop_at(mut self, target: Slot) -> Self {
        self.stop_at = Some(target);
        self
    }

    /// Runs the search until the queue is exhausted (or the configured target is settled)
    pub fn run(self) -> ShortestPathTree {
        let n = self.graph.len();
        assert!(
            (self.source as usize) < n,
            "source slot {} is not assigned",
            self.source
        );

        let mut distances = vec![INFINITE_COST; n];
        let mut predecessors: Vec<Option<OptionalSlot>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut num_settled: NumNodes = 0;

        distances[self.source as usize] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0 as Cost, self.source)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            let ui = u as usize;

            // stale entry
            if settled[ui] || dist > distances[ui] {
                continue;
            }

            settled[ui] = true;
            num_settled += 1;

            if self.stop_at == Some(u) {
                break;
            }

            for (v, weight) in self.graph.out_weights_of(u) {
                let vi = v as usize;
                if settled[vi] {
                    continue;
                }

                let candidate = dist + weight as Cost;
                if candidate < distances[vi] {
                    distances[vi] = candidate;
                    predecessors[vi] = OptionalSlot::new(u);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        trace!(source = self.source, num_settled, "dijkstra finished");

        ShortestPathTree {
            source: self.source,
            distances,
            predecessors,
        }
    }
}

/// Shortest-path queries by node identity, available on every weighted graph
pub trait ShortestPath: WeightedAdjacency {
    /// Computes distances and predecessors of all nodes reachable from `src`
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `src` is not registered.
    fn shortest_path_tree(
        &self,
        src: &Self::Node,
    ) -> GraphResult<ShortestPathTree, Self::Node> {
        let s = self.slot_of(src)?;
        Ok(Dijkstra::new(self, s).run())
    }

    /// Returns the cheapest path following edge directions from `src` to `dst`, or the empty
    /// path with [`INFINITE_COST`] if `dst` is unreachable.
    ///
    /// Among several paths of equal cost, the one discovered first is returned; ties are broken
    /// deterministically by slot order.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is not registered.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = SparseGraph::from_nodes_and_edges(
    ///     ["A", "B", "C"],
    ///     [("A", "B", 5), ("A", "C", 1), ("C", "B", 1)],
    /// )
    /// .unwrap();
    ///
    /// let path = graph.shortest_path(&"A", &"B").unwrap();
    /// assert_eq!(path.to_string(), "A -> C -> B");
    /// assert_eq!(path.cost(), 2);
    ///
    /// assert!(graph.shortest_path(&"B", &"A").unwrap().is_empty());
    /// ```
    fn shortest_path(
        &self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<Path<Self::Node>, Self::Node> {
        let (s, t) = self.slots_of(src, dst)?;
        let tree = Dijkstra::new(self, s).stop_at(t).run();
        Ok(tree.path_to(self, t))
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn scenario_a() -> MatrixGraph<&'static str> {
        MatrixGraph::from_nodes_and_edges(
            ["A", "B", "C", "D", "E"],
            [
                ("A", "B", 1),
                ("B", "C", 1),
                ("B", "D", 10),
                ("C", "D", 1),
                ("C", "E", 10),
                ("D", "E", 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn chain_beats_shortcuts() {
        let graph = scenario_a();
        let path = graph.shortest_path(&"A", &"E").unwrap();

        assert_eq!(path.nodes(), &["A", "B", "C", "D", "E"]);
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn deterministic_cost() {
        let graph = scenario_a();
        let costs = (0..5)
            .map(|_| graph.shortest_path(&"B", &"E").unwrap().cost())
            .collect_vec();
        assert!(costs.iter().all_equal());
        assert_eq!(costs[0], 3);
    }

    #[test]
    fn tree_of_source() {
        let graph = scenario_a();
        let tree = graph.shortest_path_tree(&"A").unwrap();

        assert_eq!(tree.source(), 0);
        assert_eq!(tree.distances(), &[0, 1, 2, 3, 4]);
        assert_eq!(tree.predecessor_of(0), None);
        assert_eq!(tree.predecessor_of(3), Some(2));
        assert_eq!(tree.slots_to(4), Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn direction_is_respected() {
        let graph = scenario_a();
        let path = graph.shortest_path(&"E", &"A").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), INFINITE_COST);

        let tree = graph.shortest_path_tree(&"C").unwrap();
        assert!(!tree.is_reachable(0));
        assert!(!tree.is_reachable(1));
        assert_eq!(tree.slots_to(1), None);
        assert_eq!(tree.distance_to(4), Some(2));
    }

    #[test]
    fn path_to_itself() {
        let graph = scenario_a();
        let path = graph.shortest_path(&"C", &"C").unwrap();
        assert_eq!(path.nodes(), &["C"]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn unknown_nodes() {
        let graph = scenario_a();
        assert_eq!(
            graph.shortest_path(&"A", &"Z"),
            Err(GraphError::NodeNotFound("Z"))
        );
        assert_eq!(
            graph.shortest_path_tree(&"Y"),
            Err(GraphError::NodeNotFound("Y"))
        );
    }

    #[test]
    fn heavy_weights_do_not_overflow() {
        let graph = SparseGraph::from_nodes_and_edges(
            [0u32, 1, 2, 3],
            [(0, 1, Weight::MAX), (1, 2, Weight::MAX), (2, 3, Weight::MAX)],
        )
        .unwrap();

        let path = graph.shortest_path(&0, &3).unwrap();
        assert_eq!(path.cost(), 3 * Weight::MAX as Cost);
        assert_eq!(path.hops(), 3);
    }

    #[test]
    fn early_stop_keeps_target_distance() {
        let graph = scenario_a();
        let full = Dijkstra::new(&graph, 0).run();
        for t in graph.slots() {
            let partial = Dijkstra::new(&graph, 0).stop_at(t).run();
            assert_eq!(partial.distance_to(t), full.distance_to(t));
            assert_eq!(partial.slots_to(t), full.slots_to(t));
        }
    }
}
