//! Dependence-graph node payloads.
//!
//! A [`PdgNode`] records what a node stands for. The store only constructs
//! [`PdgNode::FormalArgument`] and [`PdgNode::VarArg`] itself; every other node
//! is built by the caller and handed to the store as a [`NodeId`].
//!
//! [`NodeId`]: crate::id::NodeId

use serde::{Deserialize, Serialize};

use crate::id::{ArgumentId, FunctionId, ValueId};

/// A node in the dependence graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdgNode {
    /// A declared input of `function`.
    FormalArgument {
        function: FunctionId,
        arg: ArgumentId,
    },
    /// An IR value: instruction result, constant operand, global, etc.
    Value { value: ValueId },
    /// The variable argument list of a variadic function, as one entity.
    VarArg { function: FunctionId },
    /// A node with no canonical owning value (e.g. a merged phantom node
    /// created by an edge builder).
    Synthetic { label: String },
}

impl PdgNode {
    /// Creates a formal-argument node.
    pub fn formal_argument(function: FunctionId, arg: ArgumentId) -> Self {
        PdgNode::FormalArgument { function, arg }
    }

    /// Creates a value node.
    pub fn value(value: ValueId) -> Self {
        PdgNode::Value { value }
    }

    /// Creates the vararg-pack node of `function`.
    pub fn var_arg(function: FunctionId) -> Self {
        PdgNode::VarArg { function }
    }

    /// Creates a synthetic node.
    pub fn synthetic(label: impl Into<String>) -> Self {
        PdgNode::Synthetic {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_the_matching_variant() {
        assert_eq!(
            PdgNode::formal_argument(FunctionId(1), ArgumentId(0)),
            PdgNode::FormalArgument {
                function: FunctionId(1),
                arg: ArgumentId(0),
            }
        );
        assert_eq!(
            PdgNode::var_arg(FunctionId(1)),
            PdgNode::VarArg {
                function: FunctionId(1)
            }
        );
        assert_eq!(PdgNode::value(ValueId(8)), PdgNode::Value { value: ValueId(8) });
        assert_ne!(PdgNode::synthetic("phi-merge"), PdgNode::synthetic("entry"));
    }
}
