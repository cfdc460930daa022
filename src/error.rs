use thiserror::Error;

use crate::NumNodes;

/// Errors reported by graph operations.
///
/// All variants describe caller-input or capacity violations; none of them is transient. The
/// offending identities are returned so callers can report them without keeping their own copy.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = MatrixGraph::new(1);
/// graph.add_node("LIS").unwrap();
///
/// assert_eq!(graph.add_node("OPO"), Err(GraphError::GraphFull { capacity: 1 }));
/// assert_eq!(
///     graph.weight_between(&"LIS", &"OPO"),
///     Err(GraphError::NodeNotFound("OPO"))
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N> {
    /// A node was inserted while all slots are in use.
    #[error("graph is full: all {capacity} slots are in use")]
    GraphFull {
        /// Capacity the graph was constructed with
        capacity: NumNodes,
    },

    /// The node is already registered.
    #[error("node {0} is already present")]
    NodeAlreadyPresent(N),

    /// The node was never added to the graph.
    #[error("node {0} is not present")]
    NodeNotFound(N),

    /// There is no edge `src -> dst`.
    #[error("there is no edge from {src} to {dst}")]
    EdgeNotFound {
        /// Source of the queried edge
        src: N,
        /// Destination of the queried edge
        dst: N,
    },
}

/// Shorthand for results of graph operations on node identities of type `N`
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
