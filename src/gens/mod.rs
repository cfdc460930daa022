/*!
# Graph Generators

This module provides builder-style generators for random **weighted** graphs, mainly used to
exercise the algorithms of this crate on many instances.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p).max_weight(w)`).
3. Generate weighted slot triples via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait builds whole graph instances whose node identities are
the slots themselves (node `u` is stored in slot `u`).
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that draw edge weights uniformly from `1..=max_weight`.
pub trait MaxWeightGen {
    /// Sets the largest weight an edge can be assigned.
    fn max_weight(self, w: Weight) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Edges are produced as `(u, v, weight)` triples over slots `0..n`.
pub trait GraphGenerator {
    /// Generates a list of random weighted edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<(Slot, Slot, Weight)>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated weighted edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (Slot, Slot, Weight)>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random directed `G(n,p)` graph without self-loops whose weights are drawn
    /// uniformly from `1..=max_weight`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, max_weight: Weight) -> Self
    where
        R: Rng;
}

impl<S> RandomGraph for WeightedGraph<Slot, S>
where
    S: WeightStore,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, max_weight: Weight) -> Self
    where
        R: Rng,
    {
        let mut graph =
            Self::from_nodes(0..n).expect("a fresh graph accepts exactly its capacity of distinct slots");

        for (u, v, w) in Gnp::new()
            .nodes(n)
            .prob(p)
            .max_weight(max_weight)
            .stream(rng)
        {
            graph.set_weight_at(u, v, w);
        }

        graph
    }
}
