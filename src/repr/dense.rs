use super::*;
use crate::testing::test_weighted_graph_ops;

/// Dense `capacity × capacity` weight matrix in row-major order.
///
/// Entry `(u, v)` holds the weight of the edge `u -> v`; `0` means there is no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseWeights {
    capacity: NumNodes,
    matrix: Vec<Weight>,
    num_edges: NumEdges,
}

impl DenseWeights {
    #[inline]
    fn index(&self, u: Slot, v: Slot) -> usize {
        debug_assert!(u < self.capacity && v < self.capacity);
        u as usize * self.capacity as usize + v as usize
    }

    /// Returns the full row of slot `u` including zero entries
    /// ** Panics if `u >= capacity` **
    pub fn row(&self, u: Slot) -> &[Weight] {
        let start = self.index(u, 0);
        &self.matrix[start..start + self.capacity as usize]
    }
}

impl WeightStore for DenseWeights {
    fn new(capacity: NumNodes) -> Self {
        let cells = (capacity as usize)
            .checked_mul(capacity as usize)
            .expect("capacity² must fit into usize");
        Self {
            capacity,
            matrix: vec![0; cells],
            num_edges: 0,
        }
    }

    fn weight(&self, u: Slot, v: Slot) -> Option<Weight> {
        let w = self.matrix[self.index(u, v)];
        (w != 0).then_some(w)
    }

    fn set_weight(&mut self, u: Slot, v: Slot, weight: Weight) -> Option<Weight> {
        let idx = self.index(u, v);
        let prev = std::mem::replace(&mut self.matrix[idx], weight);

        match (prev != 0, weight != 0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }

        (prev != 0).then_some(prev)
    }

    fn out_weights(&self, u: Slot) -> impl Iterator<Item = (Slot, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some((v as Slot, w)))
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

test_weighted_graph_ops!(
    test_dense_weights,
    DenseWeights,
    (WeightStore, GraphEdgeEditing, ShortestPath, NonDirectPath)
);
