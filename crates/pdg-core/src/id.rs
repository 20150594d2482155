//! Stable ID newtypes for dependence-graph and IR entities.
//!
//! IR-side identities ([`FunctionId`], [`ArgumentId`], [`ValueId`],
//! [`InstructionId`]) are handed out by the IR front-end and compared purely by
//! identity. The store never owns or inspects the objects they name.
//!
//! [`NodeId`] is the handle of a node in the [`DependenceGraph`] arena.
//!
//! [`DependenceGraph`]: crate::graph::DependenceGraph

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Handle of a node in the dependence-graph arena. Maps to a petgraph
/// `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Identity of an IR function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionId(pub u32);

/// Identity of a formal argument of an IR function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgumentId(pub u32);

/// Identity of an IR value (instruction result, constant operand, global...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueId(pub u32);

/// Identity of an IR instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionId(pub u32);

macro_rules! display_inner {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }
        )*
    };
}

display_inner!(NodeId, FunctionId, ArgumentId, ValueId, InstructionId);

// Arena handles are petgraph indices.

impl From<NodeIndex<u32>> for NodeId {
    fn from(idx: NodeIndex<u32>) -> Self {
        NodeId(idx.index() as u32)
    }
}

impl From<NodeId> for NodeIndex<u32> {
    fn from(id: NodeId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}
