/*!
# Node Representation

Graph elements are arbitrary caller-owned values: anything that can be cloned, compared for
equality, hashed and displayed can act as a node identity (see [`GraphNode`]).
Internally, every registered identity is assigned a dense **slot** `0..n` which is used to index
the weight stores. We choose `Slot = u32` as almost all use-cases involve less than `2^32` nodes.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    num::NonZero,
};

/// Capability set a value must provide to participate in a graph.
///
/// Two identities denote the same node iff they compare equal; `Hash` must agree with `Eq`.
/// The display form is used when rendering paths and errors.
pub trait GraphNode: Clone + Eq + Hash + Display + Debug {}

impl<T> GraphNode for T where T: Clone + Eq + Hash + Display + Debug {}

/// Dense index of a registered node
pub type Slot = u32;

/// Slot-Value that is considered invalid
pub const INVALID_SLOT: Slot = Slot::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Slot;

/// As `Option<Slot>` uses additional bytes for padding, it can be inefficient
/// since we store one predecessor per slot. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalSlotImpl<const N: Slot>(NonZero<Slot>);

/// Often, `INVALID_SLOT` is safe to pick as the `None`-Value
pub type OptionalSlot = OptionalSlotImpl<INVALID_SLOT>;

impl<const N: Slot> OptionalSlotImpl<N> {
    /// Returns `Some(OptionalSlotImpl)` if `s != N` and `None` otherwise
    pub const fn new(s: Slot) -> Option<Self> {
        match NonZero::new(s ^ N) {
            Some(inner) => Some(OptionalSlotImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Slot-Value
    pub const fn get(&self) -> Slot {
        self.0.get() ^ N
    }
}
