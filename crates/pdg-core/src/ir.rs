//! The IR front-end as seen from the dependence-graph store.
//!
//! [`FunctionDecl`] is the front-end's description of a function: identity,
//! display name, declared parameters and variadic-ness. The store only ever
//! borrows it. [`CallSite`] names an invocation instruction inside a function
//! body together with its statically known callee, if any.

use serde::{Deserialize, Serialize};

use crate::id::{ArgumentId, FunctionId, InstructionId};

/// An IR function declaration, owned by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Unique identity for this function.
    pub id: FunctionId,
    /// Display name.
    pub name: String,
    /// Formal arguments in declaration order.
    pub params: Vec<ArgumentId>,
    /// `true` if the function accepts a variable argument list after its
    /// declared parameters.
    pub is_var_arg: bool,
}

impl FunctionDecl {
    /// Creates a non-variadic function declaration.
    pub fn new(id: FunctionId, name: impl Into<String>, params: Vec<ArgumentId>) -> Self {
        FunctionDecl {
            id,
            name: name.into(),
            params,
            is_var_arg: false,
        }
    }

    /// Creates a variadic function declaration.
    pub fn var_arg(id: FunctionId, name: impl Into<String>, params: Vec<ArgumentId>) -> Self {
        FunctionDecl {
            id,
            name: name.into(),
            params,
            is_var_arg: true,
        }
    }
}

/// A reference to an invocation instruction in a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    /// The call instruction.
    pub instruction: InstructionId,
    /// The statically known callee. `None` for indirect calls.
    pub callee: Option<FunctionId>,
}

impl CallSite {
    /// A call whose target is known statically.
    pub fn direct(instruction: InstructionId, callee: FunctionId) -> Self {
        CallSite {
            instruction,
            callee: Some(callee),
        }
    }

    /// A call through a function pointer.
    pub fn indirect(instruction: InstructionId) -> Self {
        CallSite {
            instruction,
            callee: None,
        }
    }
}
