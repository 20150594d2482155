pub mod id;
pub mod error;
pub mod ir;
pub mod node;
pub mod edge;
pub mod graph;
pub mod function;

// Re-export commonly used types
pub use id::{ArgumentId, FunctionId, InstructionId, NodeId, ValueId};
pub use error::PdgError;
pub use ir::{CallSite, FunctionDecl};
pub use node::PdgNode;
pub use edge::DependenceEdge;
pub use graph::DependenceGraph;
pub use function::{BuildState, FunctionPdg};
