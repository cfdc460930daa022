/*!
`wgraphs` is a small library for **directed, weighted graphs over arbitrary node identities**
with a fixed capacity, together with shortest-path queries on them.

# Representation

Nodes are identified by any value implementing [`GraphNode`] (`Clone + Eq + Hash + Display`),
e.g. `&str`, `u32` or a domain type that compares by a business key. Internally, every node is
assigned a dense **slot** `0..n` in insertion order; all storage and algorithms operate on slots
and only translate back to identities at the API boundary.

**Edges** are directed and carry a strictly positive [`Weight`]. At most one edge exists per
ordered pair; inserting another one replaces the weight. A stored weight of `0` encodes the
absence of an edge, hence zero-weight edges cannot be represented.

The capacity is fixed at construction; adding a node to a full graph fails with
[`GraphError::GraphFull`].

### Available Representations

See the [`repr`] module for the storage backends:

- [`MatrixGraph`](crate::repr::MatrixGraph): dense `capacity × capacity` weight matrix
- [`SparseGraph`](crate::repr::SparseGraph): one sorted adjacency row per slot

Both behave identically and differ only in their memory/lookup trade-off.

# Design

Algorithms and generators are provided as configurable structs ([`Dijkstra`](algo::Dijkstra),
[`Gnp`](gens::Gnp)) that can be altered using the *Builder* pattern before running them.
The commonly used functionality is additionally implemented via traits on the graph itself.

# Usage

- [`prelude`] includes nodes, edges, paths, errors, the graph operation traits and all
  representations,
- [`algo`] includes the shortest-path traits such as `graph.shortest_path(&a, &b)` and
  `graph.shortest_non_direct_path(&a, &b)`,
- [`gens`] includes random graph generators used to test algorithms on many instances,
- [`geo`] derives edge weights from geographic coordinates.

[`repr::digest`] enables computing a `Sha256`-hash of a graph, e.g. to verify that an operation
left it unchanged.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.

```
use wgraphs::{prelude::*, algo::*};

let mut graph = MatrixGraph::from_nodes_and_edges(
    ["A", "B", "C", "D", "E"],
    [("A", "B", 1), ("B", "C", 1), ("B", "D", 10), ("C", "D", 1), ("C", "E", 10), ("D", "E", 1)],
)
.unwrap();

let path = graph.shortest_path(&"A", &"E").unwrap();
assert_eq!(path.to_string(), "A -> B -> C -> D -> E");
assert_eq!(path.cost(), 4);

let detour = graph.shortest_non_direct_path(&"B", &"C").unwrap();
assert!(detour.is_empty());
assert_eq!(graph.weight_between(&"B", &"C"), Ok(1));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod geo;
pub mod node;
pub mod ops;
pub mod path;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use path::*;

/// `wgraphs::prelude` includes definitions for nodes, edges, paths and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, path::*, repr::*};
}
