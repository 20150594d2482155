//! Error types for pdg-core.
//!
//! Every variant is a contract violation by the calling traversal: asking for
//! a node that was never recorded, or resolving a handle the arena never
//! issued. Duplicate insertions are not errors; they are
//! reported through the `bool` returned by the insertion methods.

use crate::id::{ArgumentId, FunctionId, NodeId, ValueId};
use thiserror::Error;

/// Errors produced by the dependence-graph store and its node arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdgError {
    /// No formal-argument node has been recorded for this argument.
    #[error("no formal argument node for ArgumentId({arg}) in FunctionId({function})")]
    FormalArgNotFound { function: FunctionId, arg: ArgumentId },

    /// No node has been recorded for this value.
    #[error("no node for ValueId({value}) in FunctionId({function})")]
    ValueNotFound { function: FunctionId, value: ValueId },

    /// A node handle does not resolve in the arena.
    #[error("node not found: NodeId({id})")]
    NodeNotFound { id: NodeId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_identity() {
        let err = PdgError::ValueNotFound {
            function: FunctionId(2),
            value: ValueId(17),
        };
        assert_eq!(err.to_string(), "no node for ValueId(17) in FunctionId(2)");

        let err = PdgError::NodeNotFound { id: NodeId(5) };
        assert_eq!(err.to_string(), "node not found: NodeId(5)");
    }
}
