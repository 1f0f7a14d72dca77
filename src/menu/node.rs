//! Screen nodes and the static menu tree
//!
//! The tree is an arena: every static node lives in [`ScreenTree`] and refers to its
//! parent and children through [`NodeId`] handles. Children are owned by the arena in
//! insertion order; the parent handle is only used to navigate back up.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Handle of a node stored in a [`ScreenTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an operation by group id and operation name.
///
/// Resolved against the [`Registry`](super::Registry) only when the node is dispatched,
/// so the tree can be built before any operation group exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationRef {
    pub group: &'static str,
    pub name: &'static str,
}

impl OperationRef {
    pub const fn new(group: &'static str, name: &'static str) -> Self {
        Self { group, name }
    }
}

impl fmt::Display for OperationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Fixed arguments handed verbatim to an operation on every invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(BTreeMap<String, Value>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn require_i64(&self, key: &str) -> Result<i64> {
        self.get(key)
            .and_then(Value::as_i64)
            .with_context(|| format!("Missing integer argument '{}'", key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One addressable menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenNode {
    pub name: String,
    pub operation: OperationRef,
    pub args: Args,
    /// Position among siblings, the number a user types to pick this node
    pub ordinal_id: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl ScreenNode {
    pub fn new(name: impl Into<String>, group: &'static str, operation: &'static str) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "screen node name must not be empty");
        Self {
            name,
            operation: OperationRef::new(group, operation),
            args: Args::new(),
            ordinal_id: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena holding the static navigation tree.
///
/// Built once at startup and never reshaped afterwards; operations only get `&ScreenTree`.
#[derive(Debug, Clone)]
pub struct ScreenTree {
    nodes: Vec<ScreenNode>,
}

impl ScreenTree {
    pub fn new(mut root: ScreenNode) -> Self {
        root.parent = None;
        root.ordinal_id = 0;
        root.children.clear();
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `child` under `parent`, numbering it after its existing siblings
    pub fn attach_child(&mut self, parent: NodeId, mut child: ScreenNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        child.ordinal_id = self.nodes[parent.0].children.len();
        child.parent = Some(parent);
        child.children.clear();
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &ScreenNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Find a direct child of `parent` by display name
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ScreenNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}
