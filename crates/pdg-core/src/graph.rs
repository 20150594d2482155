//! DependenceGraph: the arena owning every dependence-graph node.
//!
//! Per-function stores never own nodes. They hold [`NodeId`] handles into a
//! [`DependenceGraph`], so the same node can be indexed by several stores (or
//! referenced by outside structures) without shared-pointer bookkeeping.
//! Nodes are never removed: a handle stays valid for the lifetime of the arena.

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::edge::DependenceEdge;
use crate::error::PdgError;
use crate::id::NodeId;
use crate::node::PdgNode;

/// Arena of dependence-graph nodes and the edges collaborators attach
/// between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependenceGraph {
    graph: StableGraph<PdgNode, DependenceEdge, Directed, u32>,
}

impl DependenceGraph {
    /// Creates an empty arena.
    pub fn new() -> Self {
        DependenceGraph {
            graph: StableGraph::new(),
        }
    }

    /// Creates an empty arena with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        DependenceGraph {
            graph: StableGraph::with_capacity(nodes, edges),
        }
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    /// Moves `node` into the arena and returns its handle.
    pub fn add_node(&mut self, node: PdgNode) -> NodeId {
        NodeId::from(self.graph.add_node(node))
    }

    /// Resolves a handle.
    pub fn node(&self, id: NodeId) -> Option<&PdgNode> {
        let idx: NodeIndex<u32> = id.into();
        self.graph.node_weight(idx)
    }

    /// Resolves a handle, reporting a stale or foreign handle as an error.
    pub fn try_node(&self, id: NodeId) -> Result<&PdgNode, PdgError> {
        self.node(id).ok_or(PdgError::NodeNotFound { id })
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Records that `to` depends on `from`.
    ///
    /// Both nodes must exist. Parallel edges are kept; deduplication is the
    /// edge builder's business.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        kind: DependenceEdge,
    ) -> Result<(), PdgError> {
        if !self.contains_node(from) {
            return Err(PdgError::NodeNotFound { id: from });
        }
        if !self.contains_node(to) {
            return Err(PdgError::NodeNotFound { id: to });
        }
        self.graph.add_edge(from.into(), to.into(), kind);
        Ok(())
    }

    /// Returns the nodes `id` depends on, with the kind of each dependence.
    pub fn dependencies_of(&self, id: NodeId) -> Vec<(NodeId, DependenceEdge)> {
        self.graph
            .edges_directed(id.into(), Direction::Incoming)
            .map(|e| (NodeId::from(e.source()), *e.weight()))
            .collect()
    }

    /// Returns the nodes depending on `id`, with the kind of each dependence.
    pub fn dependents_of(&self, id: NodeId) -> Vec<(NodeId, DependenceEdge)> {
        self.graph
            .edges_directed(id.into(), Direction::Outgoing)
            .map(|e| (NodeId::from(e.target()), *e.weight()))
            .collect()
    }

    /// Returns the number of edges in the arena.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{ArgumentId, FunctionId, ValueId};

    #[test]
    fn handles_resolve_to_their_payload() {
        let mut arena = DependenceGraph::new();
        let a = arena.add_node(PdgNode::formal_argument(FunctionId(0), ArgumentId(0)));
        let v = arena.add_node(PdgNode::value(ValueId(3)));

        assert_eq!(arena.node_count(), 2);
        assert_ne!(a, v);
        assert_eq!(
            arena.node(a),
            Some(&PdgNode::formal_argument(FunctionId(0), ArgumentId(0)))
        );
        assert_eq!(arena.node(v), Some(&PdgNode::value(ValueId(3))));
    }

    #[test]
    fn unknown_handle_is_reported() {
        let arena = DependenceGraph::with_capacity(4, 4);
        assert!(arena.node(NodeId(0)).is_none());
        assert_eq!(
            arena.try_node(NodeId(0)),
            Err(PdgError::NodeNotFound { id: NodeId(0) })
        );
    }

    #[test]
    fn edges_are_visible_from_both_ends() {
        let mut arena = DependenceGraph::new();
        let def = arena.add_node(PdgNode::value(ValueId(1)));
        let cond = arena.add_node(PdgNode::value(ValueId(2)));
        let user = arena.add_node(PdgNode::value(ValueId(3)));

        arena.add_edge(def, user, DependenceEdge::DefUse).unwrap();
        arena.add_edge(cond, user, DependenceEdge::Control).unwrap();

        let mut deps = arena.dependencies_of(user);
        deps.sort_by_key(|(n, _)| *n);
        assert_eq!(
            deps,
            vec![(def, DependenceEdge::DefUse), (cond, DependenceEdge::Control)]
        );
        assert_eq!(arena.dependents_of(def), vec![(user, DependenceEdge::DefUse)]);
        assert_eq!(arena.edge_count(), 2);
    }

    #[test]
    fn edge_to_missing_node_is_rejected() {
        let mut arena = DependenceGraph::new();
        let n = arena.add_node(PdgNode::synthetic("entry"));

        let result = arena.add_edge(n, NodeId(42), DependenceEdge::Data);
        match result {
            Err(PdgError::NodeNotFound { id }) => assert_eq!(id, NodeId(42)),
            _ => panic!("expected NodeNotFound error"),
        }
        assert_eq!(arena.edge_count(), 0);
    }
}
