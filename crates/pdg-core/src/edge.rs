//! Edge kinds between dependence-graph nodes.
//!
//! Which edges exist is decided by the dependence builders, not by this crate.
//! [`DependenceEdge`] only fixes the vocabulary they share so edges can live in
//! the same arena as the nodes they connect.

use serde::{Deserialize, Serialize};

/// Edge types in the dependence graph. The source node is the one depended
/// upon; the target is the dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependenceEdge {
    /// Target reads a value produced (or possibly produced) by the source.
    Data,
    /// Whether the target executes is decided by the source.
    Control,
    /// Direct SSA def-use link: the source is an operand of the target.
    DefUse,
}
