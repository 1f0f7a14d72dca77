//! Operation registry and dispatch resolution
//!
//! Operation groups are constructed once at startup and registered explicitly. Screen
//! nodes name their operation by `(group, name)`; the registry turns that pair into a
//! live group or a [`DispatchError`].

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use super::node::{Args, NodeId, OperationRef, ScreenTree};
use super::response::Response;
use crate::ui::Console;

/// Everything an operation gets to see when it is invoked
pub struct Request<'a> {
    pub tree: &'a ScreenTree,
    /// Parent of the selected node, i.e. the screen the user came from
    pub parent: Option<NodeId>,
    pub args: &'a Args,
    pub console: &'a mut Console,
}

/// A named collection of related operations, instantiated once per process
#[async_trait]
pub trait OperationGroup: Send + Sync {
    fn id(&self) -> &'static str;

    /// Names of every operation this group can run
    fn operations(&self) -> &'static [&'static str];

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response>;
}

/// Configuration errors: a node refers to an operation that does not exist
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("component '{0}' does not exist")]
    ComponentNotFound(String),

    #[error("method '{method}' in component '{group}' does not exist")]
    MethodNotFound { group: String, method: String },

    #[error("component '{0}' is registered twice")]
    DuplicateComponent(String),
}

impl DispatchError {
    pub fn method_not_found(group: &str, method: &str) -> Self {
        Self::MethodNotFound {
            group: group.to_string(),
            method: method.to_string(),
        }
    }
}

#[derive(Default)]
pub struct Registry {
    groups: Vec<Box<dyn OperationGroup>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, group: Box<dyn OperationGroup>) -> Result<(), DispatchError> {
        if self.groups.iter().any(|g| g.id() == group.id()) {
            return Err(DispatchError::DuplicateComponent(group.id().to_string()));
        }
        log::debug!(
            "Registered component '{}' with {} operations",
            group.id(),
            group.operations().len()
        );
        self.groups.push(group);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find the group that can run `operation`
    pub fn resolve(&self, operation: &OperationRef) -> Result<&dyn OperationGroup, DispatchError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.id() == operation.group)
            .ok_or_else(|| DispatchError::ComponentNotFound(operation.group.to_string()))?;

        if !group.operations().contains(&operation.name) {
            return Err(DispatchError::method_not_found(operation.group, operation.name));
        }

        Ok(group.as_ref())
    }

    /// Resolve every node of a static tree once, so a broken tree fails before the first render
    pub fn validate(&self, tree: &ScreenTree) -> Result<(), DispatchError> {
        for (id, node) in tree.iter() {
            if let Err(err) = self.resolve(&node.operation) {
                log::error!("Screen '{}' ({}) is misconfigured: {}", node.name, id, err);
                return Err(err);
            }
        }
        Ok(())
    }
}
