use smallvec::SmallVec;

use super::*;
use crate::testing::test_weighted_graph_ops;

/// Outgoing weights of a single slot, sorted by destination slot.
/// Most rows are short, so the first few entries are stored inline.
type SparseRow = SmallVec<[(Slot, Weight); 4]>;

/// Weight store keeping one sorted row of `(v, weight)` per slot.
///
/// Preferable over [`DenseWeights`] if the capacity is large and the graph is far from complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseWeights {
    rows: Vec<SparseRow>,
    num_edges: NumEdges,
}

impl SparseWeights {
    /// Returns the sorted row of slot `u`
    /// ** Panics if `u >= capacity` **
    pub fn row(&self, u: Slot) -> &[(Slot, Weight)] {
        &self.rows[u as usize]
    }
}

impl WeightStore for SparseWeights {
    fn new(capacity: NumNodes) -> Self {
        Self {
            rows: vec![SparseRow::new(); capacity as usize],
            num_edges: 0,
        }
    }

    fn weight(&self, u: Slot, v: Slot) -> Option<Weight> {
        let row = &self.rows[u as usize];
        row.binary_search_by_key(&v, |&(x, _)| x)
            .ok()
            .map(|i| row[i].1)
    }

    fn set_weight(&mut self, u: Slot, v: Slot, weight: Weight) -> Option<Weight> {
        debug_assert!((v as usize) < self.rows.len());
        let row = &mut self.rows[u as usize];

        match (row.binary_search_by_key(&v, |&(x, _)| x), weight) {
            (Ok(i), 0) => {
                self.num_edges -= 1;
                Some(row.remove(i).1)
            }
            (Ok(i), w) => Some(std::mem::replace(&mut row[i].1, w)),
            (Err(_), 0) => None,
            (Err(i), w) => {
                self.num_edges += 1;
                row.insert(i, (v, w));
                None
            }
        }
    }

    fn out_weights(&self, u: Slot) -> impl Iterator<Item = (Slot, Weight)> + '_ {
        self.rows[u as usize].iter().copied()
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

test_weighted_graph_ops!(
    test_sparse_weights,
    SparseWeights,
    (WeightStore, GraphEdgeEditing, ShortestPath, NonDirectPath)
);
