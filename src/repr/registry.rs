/*!
# Node Registry

Bidirectional mapping between node identities and dense slots `0..n` of a fixed-capacity
arena. Slots are handed out in insertion order, are never reused and never renumbered.
*/

use fxhash::FxHashMap;

use crate::*;

/// Bijection between registered identities and the slots `0..len`.
///
/// # Example
/// ```
/// use wgraphs::repr::NodeRegistry;
///
/// let mut registry = NodeRegistry::new(2);
/// assert_eq!(registry.register("LIS"), Ok(0));
/// assert_eq!(registry.register("OPO"), Ok(1));
/// assert_eq!(registry.slot_of(&"OPO"), Ok(1));
/// assert_eq!(registry.node_at(0), Some(&"LIS"));
/// assert!(registry.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct NodeRegistry<N> {
    slots: FxHashMap<N, Slot>,
    nodes: Vec<N>,
    capacity: NumNodes,
}

impl<N: GraphNode> NodeRegistry<N> {
    /// Creates an empty registry holding at most `capacity` nodes
    pub fn new(capacity: NumNodes) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity as usize, Default::default()),
            nodes: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Assigns the next free slot to `node`.
    ///
    /// # Errors
    /// [`GraphError::GraphFull`] if all slots are taken (checked first),
    /// [`GraphError::NodeAlreadyPresent`] if an equal node is registered.
    pub fn register(&mut self, node: N) -> GraphResult<Slot, N> {
        if self.is_full() {
            return Err(GraphError::GraphFull {
                capacity: self.capacity,
            });
        }

        if self.slots.contains_key(&node) {
            return Err(GraphError::NodeAlreadyPresent(node));
        }

        let slot = self.len();
        self.slots.insert(node.clone(), slot);
        self.nodes.push(node);
        Ok(slot)
    }

    /// Returns the slot of `node`, if registered
    pub fn get_slot(&self, node: &N) -> Option<Slot> {
        self.slots.get(node).copied()
    }

    /// Returns the slot of `node`
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `node` is not registered.
    pub fn slot_of(&self, node: &N) -> GraphResult<Slot, N> {
        self.get_slot(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.clone()))
    }

    /// Returns the node at `slot` or `None` if `slot >= len`
    pub fn node_at(&self, slot: Slot) -> Option<&N> {
        self.nodes.get(slot as usize)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.slots.contains_key(node)
    }

    /// Number of registered nodes
    pub fn len(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    pub fn capacity(&self) -> NumNodes {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns all nodes in slot order
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_in_insertion_order() {
        let mut registry = NodeRegistry::new(5);
        for (i, code) in ["LIS", "OPO", "FAO", "MAD"].into_iter().enumerate() {
            assert_eq!(registry.register(code.to_string()), Ok(i as Slot));
        }

        assert_eq!(registry.len(), 4);
        assert!(!registry.is_full());

        for slot in 0..registry.len() {
            let node = registry.node_at(slot).unwrap();
            assert_eq!(registry.slot_of(node), Ok(slot));
        }
        assert_eq!(registry.node_at(4), None);
    }

    #[test]
    fn duplicates_and_capacity() {
        let mut registry = NodeRegistry::new(2);
        registry.register('a').unwrap();

        assert_eq!(registry.register('a'), Err(GraphError::NodeAlreadyPresent('a')));
        assert_eq!(registry.len(), 1);

        registry.register('b').unwrap();
        assert_eq!(
            registry.register('c'),
            Err(GraphError::GraphFull { capacity: 2 })
        );
        // full wins over duplicate
        assert_eq!(
            registry.register('a'),
            Err(GraphError::GraphFull { capacity: 2 })
        );

        assert_eq!(registry.slot_of(&'c'), Err(GraphError::NodeNotFound('c')));
        assert_eq!(registry.as_slice(), &['a', 'b']);
    }

    #[test]
    fn zero_capacity() {
        let mut registry = NodeRegistry::new(0);
        assert!(registry.is_empty());
        assert!(registry.is_full());
        assert_eq!(registry.register(1u32), Err(GraphError::GraphFull { capacity: 0 }));
    }
}
