/*!
# Graph Algorithms

This module provides the **shortest-path algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and call them directly on any graph implementing the required [`ops`](crate::ops) traits.
Lower level access is provided by configurable structs such as [`Dijkstra`].
*/

mod dijkstra;
mod non_direct;

use crate::prelude::*;

pub use dijkstra::*;
pub use non_direct::*;
