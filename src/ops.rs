/*!
# Graph Operations

Traits describing the public operations of a weighted graph. They are layered such that
algorithms only ask for what they need:

- [`GraphNodeOrder`]: node count, capacity and the identity ⇄ slot mapping,
- [`GraphNodeEditing`]: registering nodes,
- [`WeightedAdjacency`]: edge queries (by identity and by slot),
- [`GraphEdgeEditing`]: inserting, replacing and removing edges.

All identity-based operations fail with [`GraphError::NodeNotFound`] if an endpoint was never
added; in that case the graph is left untouched.
*/

use std::ops::Range;

use crate::*;

/// Fixes the node identity type of a graph
pub trait GraphType {
    type Node: GraphNode;
}

/// Provides getters pertaining to the nodes of a graph
pub trait GraphNodeOrder: GraphType {
    /// Returns the number of registered nodes
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the maximum number of nodes; fixed at construction
    fn capacity(&self) -> NumNodes;

    /// Returns the slot of a registered node
    fn slot_of(&self, node: &Self::Node) -> GraphResult<Slot, Self::Node>;

    /// Returns the node registered at `slot` or `None` if `slot >= n`
    fn node_at(&self, slot: Slot) -> Option<&Self::Node>;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range of all assigned slots
    fn slots(&self) -> Range<Slot> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over all nodes in slot (= insertion) order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_ {
        self.slots().filter_map(move |s| self.node_at(s))
    }

    /// Returns *true* if the node is registered
    fn has_node(&self, node: &Self::Node) -> bool {
        self.slot_of(node).is_ok()
    }

    /// Returns the slots of both endpoints, failing on the first one that is not registered
    fn slots_of(
        &self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<(Slot, Slot), Self::Node> {
        Ok((self.slot_of(src)?, self.slot_of(dst)?))
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns *true* if no further node can be added
    fn is_full(&self) -> bool {
        self.number_of_nodes() == self.capacity()
    }
}

/// Registering nodes
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Registers `node` at the next free slot and returns that slot.
    ///
    /// # Errors
    /// - [`GraphError::GraphFull`] if all slots are in use,
    /// - [`GraphError::NodeAlreadyPresent`] if an equal node is registered.
    fn add_node(&mut self, node: Self::Node) -> GraphResult<Slot, Self::Node>;

    /// Adds all nodes in order, stopping at the first failure
    ///
    /// # Errors
    /// See [`GraphNodeEditing::add_node`].
    fn add_nodes<I>(&mut self, nodes: I) -> GraphResult<(), Self::Node>
    where
        I: IntoIterator<Item = Self::Node>,
    {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }
}

/// Getters for weighted, directed edges.
///
/// A stored weight of `0` means "no edge", hence `connects` and every getter treat zero-weight
/// edges as absent.
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns the weight of the edge between two slots, `None` if there is no such edge.
    /// ** Might panic if `u >= capacity || v >= capacity` **
    fn weight_at(&self, u: Slot, v: Slot) -> Option<Weight>;

    /// Returns an iterator over `(v, weight)` for all edges `(u, v)` in ascending order of `v`.
    /// ** Might panic if `u >= capacity` **
    fn out_weights_of(&self, u: Slot) -> impl Iterator<Item = (Slot, Weight)> + '_;

    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Returns *true* if there is an edge `src -> dst`
    fn connects(&self, src: &Self::Node, dst: &Self::Node) -> GraphResult<bool, Self::Node> {
        let (u, v) = self.slots_of(src, dst)?;
        Ok(self.weight_at(u, v).is_some())
    }

    /// Returns the weight of the edge `src -> dst`
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if there is no such edge.
    fn weight_between(
        &self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<Weight, Self::Node> {
        let (u, v) = self.slots_of(src, dst)?;
        self.weight_at(u, v).ok_or_else(|| GraphError::EdgeNotFound {
            src: src.clone(),
            dst: dst.clone(),
        })
    }

    /// Returns the edge `src -> dst` reconstructed with its stored weight
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if there is no such edge.
    fn edge_between(
        &self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<Edge<Self::Node>, Self::Node> {
        let weight = self.weight_between(src, dst)?;
        Ok(Edge::new(src.clone(), dst.clone(), weight))
    }

    /// Returns *true* if `src -> dst` is present with exactly the weight of `edge`
    fn has_edge(&self, edge: &Edge<Self::Node>) -> GraphResult<bool, Self::Node> {
        let (u, v) = self.slots_of(edge.src(), edge.dst())?;
        Ok(self.weight_at(u, v) == Some(edge.weight()))
    }

    /// Returns the number of outgoing edges of `src`
    fn out_degree_of(&self, src: &Self::Node) -> GraphResult<NumNodes, Self::Node> {
        let u = self.slot_of(src)?;
        Ok(self.out_weights_of(u).count() as NumNodes)
    }

    /// Returns an iterator over all outgoing edges of `src` in ascending slot order of their
    /// destinations
    fn edges_from<'a>(
        &'a self,
        src: &'a Self::Node,
    ) -> GraphResult<impl Iterator<Item = Edge<Self::Node>> + 'a, Self::Node> {
        let u = self.slot_of(src)?;
        Ok(self.weighted_edges_of(u).map(move |(_, dst, weight)| {
            Edge::new(src.clone(), dst.clone(), weight)
        }))
    }

    /// Returns an iterator over `(src, dst, weight)` for all outgoing edges of slot `u`.
    /// Yields nothing if `u` is not assigned.
    fn weighted_edges_of(
        &self,
        u: Slot,
    ) -> impl Iterator<Item = (&Self::Node, &Self::Node, Weight)> + '_ {
        self.node_at(u).into_iter().flat_map(move |src| {
            self.out_weights_of(u)
                .filter_map(move |(v, weight)| Some((src, self.node_at(v)?, weight)))
        })
    }

    /// Returns an iterator over all edges of the graph ordered by `(src slot, dst slot)`
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Node>> + '_ {
        self.slots().flat_map(move |u| {
            self.weighted_edges_of(u)
                .map(|(src, dst, weight)| Edge::new(src.clone(), dst.clone(), weight))
        })
    }
}

/// Inserting, replacing and removing edges
pub trait GraphEdgeEditing: WeightedAdjacency {
    /// Stores `weight` for the slot pair `(u, v)` and returns the previously stored weight.
    /// Storing `0` removes the edge.
    /// ** Might panic if `u >= capacity || v >= capacity` **
    fn set_weight_at(&mut self, u: Slot, v: Slot, weight: Weight) -> Option<Weight>;

    /// Inserts `edge`, replacing any edge already stored for the same ordered pair, and returns
    /// the weight that was replaced.
    fn replace_edge(&mut self, edge: Edge<Self::Node>) -> GraphResult<Option<Weight>, Self::Node> {
        let (u, v) = self.slots_of(edge.src(), edge.dst())?;
        Ok(self.set_weight_at(u, v, edge.weight()))
    }

    /// Inserts `edge`, silently replacing any edge already stored for the same ordered pair.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is not registered.
    fn add_edge(&mut self, edge: Edge<Self::Node>) -> GraphResult<(), Self::Node> {
        self.replace_edge(edge).map(|_| ())
    }

    /// Adds all edges in order, stopping at the first failure
    fn add_edges<I, E>(&mut self, edges: I) -> GraphResult<(), Self::Node>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Node>>,
    {
        for edge in edges {
            self.add_edge(edge.into())?;
        }
        Ok(())
    }

    /// Removes the edge `src -> dst` and returns it, allowing it to be reinstated later.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if there is no such edge.
    fn remove_edge_between(
        &mut self,
        src: &Self::Node,
        dst: &Self::Node,
    ) -> GraphResult<Edge<Self::Node>, Self::Node> {
        let (u, v) = self.slots_of(src, dst)?;
        match self.set_weight_at(u, v, 0) {
            Some(weight) => Ok(Edge::new(src.clone(), dst.clone(), weight)),
            None => Err(GraphError::EdgeNotFound {
                src: src.clone(),
                dst: dst.clone(),
            }),
        }
    }
}
