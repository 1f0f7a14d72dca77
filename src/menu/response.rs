//! Response envelope returned by every operation

use super::node::{Args, NodeId, OperationRef, ScreenNode};

/// Operation wired to the conventional trailing "Previous" entry of dynamic menus
pub const PREVIOUS_OPERATION: OperationRef = OperationRef::new("utility", "previous_menu_item");

/// What the navigator should show after an operation ran.
///
/// `dynamic_items` wins over `override_parent`, which wins over the static tree.
#[derive(Debug, Default)]
pub struct Response {
    pub override_parent: Option<NodeId>,
    pub dynamic_items: Vec<ScreenNode>,
}

impl Response {
    /// Follow the static tree
    pub fn empty() -> Self {
        Self::default()
    }

    /// Jump to the children of `parent`; `None` behaves like [`Response::empty`]
    pub fn back_to(parent: Option<NodeId>) -> Self {
        Self {
            override_parent: parent,
            dynamic_items: Vec::new(),
        }
    }

    pub fn submenu(items: Vec<ScreenNode>) -> Self {
        Self {
            override_parent: None,
            dynamic_items: items,
        }
    }
}

/// Builder for a one-off list of screen nodes.
///
/// Every item is numbered by its position and points back at `parent`, the node the
/// user returns to when leaving the list.
#[derive(Debug)]
pub struct DynamicMenu {
    parent: Option<NodeId>,
    items: Vec<ScreenNode>,
}

impl DynamicMenu {
    pub fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            items: Vec::new(),
        }
    }

    pub fn item(mut self, name: impl Into<String>, operation: OperationRef, args: Args) -> Self {
        let mut node = ScreenNode::new(name, operation.group, operation.name).with_args(args);
        node.ordinal_id = self.items.len();
        node.parent = self.parent;
        self.items.push(node);
        self
    }

    pub fn with_previous(self) -> Self {
        self.item("Previous", PREVIOUS_OPERATION, Args::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Vec<ScreenNode> {
        self.items
    }
}
