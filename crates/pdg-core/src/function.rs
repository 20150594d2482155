//! FunctionPdg: the dependence-graph node store of one function.
//!
//! A [`FunctionPdg`] is created by the dependence-graph builder when it starts
//! on a function, filled while the builder walks the function's parameters
//! and instructions, and marked built once the walk is over. Afterwards it is
//! the place downstream analyses ask "does value V already have a node, and
//! which one".
//!
//! # Indices
//!
//! - formal arguments: [`ArgumentId`] -> [`NodeId`], at most one node per
//!   argument;
//! - values: [`ValueId`] -> [`NodeId`], at most one node per value;
//! - enumeration list: every node added through an index (on first insertion
//!   only) or through [`add_unindexed_node`](FunctionPdg::add_unindexed_node),
//!   in insertion order;
//! - the vararg node, allocated by the constructor iff the function is
//!   variadic. It is not part of the enumeration list unless the builder adds
//!   it explicitly;
//! - call sites in discovery order, duplicates kept.
//!
//! Nodes live in a [`DependenceGraph`] arena; the store holds handles only.
//!
//! # Built milestone
//!
//! The built flag moves `Building -> Built` once and never back. Writes after
//! the flag is set are accepted but logged at `warn`, since readers may
//! already be relying on the node set.

use indexmap::map::Entry;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::error::PdgError;
use crate::graph::DependenceGraph;
use crate::id::{ArgumentId, FunctionId, NodeId, ValueId};
use crate::ir::{CallSite, FunctionDecl};
use crate::node::PdgNode;

/// Construction state of a [`FunctionPdg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// The builder is still walking the function body.
    Building,
    /// The node set is final.
    Built,
}

/// Per-function index of dependence-graph nodes and call sites.
///
/// Not `Clone`: collaborators share a store by borrowing it, never by copying
/// its indices.
#[derive(Debug)]
pub struct FunctionPdg<'ir> {
    function: &'ir FunctionDecl,
    state: BuildState,
    formal_arg_nodes: IndexMap<ArgumentId, NodeId>,
    var_arg_node: Option<NodeId>,
    value_nodes: IndexMap<ValueId, NodeId>,
    nodes: Vec<NodeId>,
    call_sites: SmallVec<[CallSite; 4]>,
}

impl<'ir> FunctionPdg<'ir> {
    /// Creates the store for `function`. For a variadic function the vararg
    /// node is allocated in `arena` right away.
    pub fn new(arena: &mut DependenceGraph, function: &'ir FunctionDecl) -> Self {
        let var_arg_node = function
            .is_var_arg
            .then(|| arena.add_node(PdgNode::var_arg(function.id)));

        debug!(
            function = %function.name,
            id = %function.id,
            var_arg = function.is_var_arg,
            "created function pdg"
        );

        FunctionPdg {
            function,
            state: BuildState::Building,
            formal_arg_nodes: IndexMap::new(),
            var_arg_node,
            value_nodes: IndexMap::new(),
            nodes: Vec::new(),
            call_sites: SmallVec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Function identity
    // -----------------------------------------------------------------------

    /// Returns the declaration this store describes.
    pub fn function(&self) -> &'ir FunctionDecl {
        self.function
    }

    pub fn function_id(&self) -> FunctionId {
        self.function.id
    }

    /// Returns the function's display name.
    pub fn name(&self) -> &'ir str {
        &self.function.name
    }

    /// The graph is named after its function.
    pub fn graph_name(&self) -> &'ir str {
        self.name()
    }

    pub fn is_var_arg(&self) -> bool {
        self.function.is_var_arg
    }

    // -----------------------------------------------------------------------
    // Built milestone
    // -----------------------------------------------------------------------

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_definition_built(&self) -> bool {
        self.state == BuildState::Built
    }

    /// Sets the built milestone.
    ///
    /// `true` moves the store to [`BuildState::Built`]. `false` on a built
    /// store is ignored: the milestone cannot be revoked.
    pub fn set_definition_built(&mut self, built: bool) {
        match (self.state, built) {
            (BuildState::Building, true) => {
                self.state = BuildState::Built;
                debug!(
                    function = %self.function.name,
                    nodes = self.nodes.len(),
                    call_sites = self.call_sites.len(),
                    "function pdg definition built"
                );
            }
            (BuildState::Built, false) => {
                warn!(
                    function = %self.function.name,
                    "ignoring attempt to reset built function pdg"
                );
            }
            _ => {}
        }
    }

    /// Shorthand for `set_definition_built(true)`.
    pub fn mark_definition_built(&mut self) {
        self.set_definition_built(true);
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Returns the vararg node. `None` iff the function is not variadic.
    pub fn var_arg_node(&self) -> Option<NodeId> {
        self.var_arg_node
    }

    pub fn has_formal_arg_node(&self, arg: ArgumentId) -> bool {
        self.formal_arg_nodes.contains_key(&arg)
    }

    pub fn try_formal_arg_node(&self, arg: ArgumentId) -> Result<NodeId, PdgError> {
        self.formal_arg_nodes
            .get(&arg)
            .copied()
            .ok_or(PdgError::FormalArgNotFound {
                function: self.function.id,
                arg,
            })
    }

    /// Returns the node recorded for `arg`.
    ///
    /// # Panics
    ///
    /// If no node was recorded. Check [`has_formal_arg_node`] first when
    /// absence is possible.
    ///
    /// [`has_formal_arg_node`]: FunctionPdg::has_formal_arg_node
    pub fn get_formal_arg_node(&self, arg: ArgumentId) -> NodeId {
        self.try_formal_arg_node(arg)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn has_node(&self, value: ValueId) -> bool {
        self.value_nodes.contains_key(&value)
    }

    pub fn try_node(&self, value: ValueId) -> Result<NodeId, PdgError> {
        self.value_nodes
            .get(&value)
            .copied()
            .ok_or(PdgError::ValueNotFound {
                function: self.function.id,
                value,
            })
    }

    /// Returns the node recorded for `value`.
    ///
    /// # Panics
    ///
    /// If no node was recorded. Check [`has_node`](FunctionPdg::has_node)
    /// first when absence is possible.
    pub fn get_node(&self, value: ValueId) -> NodeId {
        self.try_node(value).unwrap_or_else(|err| panic!("{err}"))
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Creates a formal-argument node for `arg` in `arena` and records it.
    ///
    /// `arg` is taken as an identity only; it is not checked against the
    /// declared parameters.
    ///
    /// Returns `false`, allocating nothing, if `arg` already has a node.
    pub fn add_formal_arg_node(&mut self, arena: &mut DependenceGraph, arg: ArgumentId) -> bool {
        self.warn_if_built("formal argument node");

        match self.formal_arg_nodes.entry(arg) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let node = arena.add_node(PdgNode::formal_argument(self.function.id, arg));
                slot.insert(node);
                self.nodes.push(node);
                trace!(function = %self.function.name, %arg, %node, "added formal argument node");
                true
            }
        }
    }

    /// Records an existing node for `arg`.
    ///
    /// Returns `false`, leaving the first node in place, if `arg` already has
    /// a node.
    pub fn add_formal_arg_node_with(&mut self, arg: ArgumentId, node: NodeId) -> bool {
        self.warn_if_built("formal argument node");

        match self.formal_arg_nodes.entry(arg) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.nodes.push(node);
                trace!(function = %self.function.name, %arg, %node, "added formal argument node");
                true
            }
        }
    }

    /// Creates formal-argument nodes for every declared parameter that does
    /// not have one yet, in declaration order. Returns how many were created.
    pub fn add_formal_arg_nodes(&mut self, arena: &mut DependenceGraph) -> usize {
        let function = self.function;
        let mut added = 0;
        for &arg in &function.params {
            if self.add_formal_arg_node(arena, arg) {
                added += 1;
            }
        }
        added
    }

    /// Records `node` as the node of `value`.
    ///
    /// Returns `false`, leaving the first node in place, if `value` already
    /// has a node.
    pub fn add_node(&mut self, value: ValueId, node: NodeId) -> bool {
        self.warn_if_built("value node");

        match self.value_nodes.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.nodes.push(node);
                trace!(function = %self.function.name, %value, %node, "added value node");
                true
            }
        }
    }

    /// Appends `node` to the enumeration list without indexing it.
    ///
    /// The node is then visible to [`nodes`](FunctionPdg::nodes) and counted
    /// by [`size`](FunctionPdg::size), but no identity lookup will find it.
    /// Adding the same node twice enumerates it twice.
    pub fn add_unindexed_node(&mut self, node: NodeId) {
        self.warn_if_built("unindexed node");
        self.nodes.push(node);
        trace!(function = %self.function.name, %node, "added unindexed node");
    }

    pub fn add_call_site(&mut self, call_site: CallSite) {
        self.warn_if_built("call site");
        trace!(
            function = %self.function.name,
            instruction = %call_site.instruction,
            "added call site"
        );
        self.call_sites.push(call_site);
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// Returns the call sites in discovery order.
    pub fn call_sites(&self) -> &[CallSite] {
        &self.call_sites
    }

    pub fn call_sites_iter(&self) -> impl Iterator<Item = &CallSite> + '_ {
        self.call_sites.iter()
    }

    /// Iterates over every enumerated node in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterates over `(argument, node)` entries. Order is unspecified.
    pub fn formal_arg_nodes(&self) -> impl Iterator<Item = (ArgumentId, NodeId)> + '_ {
        self.formal_arg_nodes.iter().map(|(&arg, &node)| (arg, node))
    }

    /// Iterates over `(value, node)` entries. Order is unspecified.
    pub fn value_nodes(&self) -> impl Iterator<Item = (ValueId, NodeId)> + '_ {
        self.value_nodes.iter().map(|(&value, &node)| (value, node))
    }

    /// Returns the number of enumerated nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn warn_if_built(&self, what: &str) {
        if self.state == BuildState::Built {
            warn!(function = %self.function.name, what, "write to built function pdg");
        }
    }
}

impl<'a, 'ir> IntoIterator for &'a FunctionPdg<'ir> {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
