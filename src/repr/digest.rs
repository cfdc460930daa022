/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of weighted graphs that are independent of the underlying
weight store.

The digest encodes:
- the number of nodes,
- the display form of every node in slot order, and
- the weighted edge list in ascending `(src slot, dst slot)` order,

before feeding them into a cryptographic hash function. Two graphs therefore share a digest
iff they registered the same nodes in the same order and store the same weighted edges, which
makes digests a cheap way to assert that an operation left a graph untouched.

## Example
```
use wgraphs::{prelude::*, repr::digest::GraphDigest};

let mut dense = MatrixGraph::from_nodes(["A", "B"]).unwrap();
let mut sparse = SparseGraph::from_nodes(["A", "B"]).unwrap();
dense.add_edge(Edge::new("A", "B", 3)).unwrap();
sparse.add_edge(Edge::new("A", "B", 3)).unwrap();

assert_eq!(dense.digest_sha256(), sparse.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a weighted graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: WeightedAdjacency,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // first encode the number of nodes in the graph
        hasher.update(self.number_of_nodes().to_le_bytes());

        // then the identities, each terminated by a zero byte
        for node in self.nodes() {
            hasher.update(node.to_string().as_bytes());
            hasher.update([0u8]);
        }

        // then append a sorted weighted edge list
        let mut buffer = [0u8; 12];
        for u in self.slots() {
            for (v, w) in self.out_weights_of(u) {
                buffer[0..4].copy_from_slice(&u.to_le_bytes());
                buffer[4..8].copy_from_slice(&v.to_le_bytes());
                buffer[8..12].copy_from_slice(&w.to_le_bytes());
                hasher.update(buffer);
            }
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_changes_digest() {
        let mut graph = MatrixGraph::from_nodes(["A", "B", "C"]).unwrap();
        graph.add_edge(Edge::new("A", "B", 2)).unwrap();
        let before = graph.digest_sha256();
        assert_eq!(before.len(), 64);

        graph.add_edge(Edge::new("A", "B", 3)).unwrap();
        assert_ne!(graph.digest_sha256(), before);

        graph.add_edge(Edge::new("A", "B", 2)).unwrap();
        assert_eq!(graph.digest_sha256(), before);
    }

    #[test]
    fn node_order_matters() {
        let ab = SparseGraph::from_nodes(["A", "B"]).unwrap();
        let ba = SparseGraph::from_nodes(["B", "A"]).unwrap();
        assert_ne!(ab.digest_sha256(), ba.digest_sha256());
    }
}
