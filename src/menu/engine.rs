//! Navigation engine
//!
//! Walks the static tree: renders the current candidate list, reads a selection,
//! dispatches the chosen node's operation and picks the next candidate list from the
//! returned [`Response`].

use anyhow::{Result, bail};
use log::{debug, info, warn};
use std::io::Write;

use super::node::{NodeId, ScreenNode, ScreenTree};
use super::registry::{Registry, Request};
use super::response::Response;
use crate::ui::Console;

const INVALID_CHOICE: &str = "Wrong choice, try again:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    AwaitingSelection,
    Dispatching,
    ErrorRecovery,
}

/// A selectable screen: either part of the static tree or a transient dynamic node
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Static(NodeId),
    Dynamic(ScreenNode),
}

impl Entry {
    pub fn node<'a>(&'a self, tree: &'a ScreenTree) -> &'a ScreenNode {
        match self {
            Entry::Static(id) => tree.node(*id),
            Entry::Dynamic(node) => node,
        }
    }
}

/// Parse a menu selection; anything but plain ASCII digits is no selection
pub fn parse_selection(line: &str) -> Option<usize> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

pub struct Navigator {
    registry: Registry,
    tree: ScreenTree,
    console: Console,
    current: Entry,
    state: NavigationState,
    clear_screen: bool,
}

impl Navigator {
    pub fn new(registry: Registry, tree: ScreenTree, console: Console) -> Self {
        let root = tree.root();
        Self {
            registry,
            tree,
            console,
            current: Entry::Static(root),
            state: NavigationState::AwaitingSelection,
            clear_screen: false,
        }
    }

    /// Clear the terminal before every operation runs
    pub fn with_screen_clearing(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn tree(&self) -> &ScreenTree {
        &self.tree
    }

    pub fn current(&self) -> &ScreenNode {
        self.current.node(&self.tree)
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Run until input is exhausted or an operation ends the process
    pub async fn run(&mut self) -> Result<()> {
        self.registry.validate(&self.tree)?;
        info!(
            "Starting navigation over {} screens and {} components",
            self.tree.len(),
            self.registry.len()
        );

        let mut candidates = self.static_entries(self.tree.root());
        loop {
            candidates = self.fill_empty(candidates)?;
            self.state = NavigationState::AwaitingSelection;
            self.render(&candidates)?;

            let Some(line) = self.console.read_line()? else {
                info!("Input closed, leaving navigation");
                return Ok(());
            };

            let selected = parse_selection(&line).and_then(|index| candidates.get(index));
            match selected {
                Some(entry) => {
                    self.current = entry.clone();
                    self.state = NavigationState::Dispatching;
                    if self.clear_screen {
                        self.console.clear()?;
                    }
                    candidates = self.dispatch().await?;
                }
                None => {
                    self.state = NavigationState::ErrorRecovery;
                    debug!("Rejected selection {:?} out of {} entries", line, candidates.len());
                    self.console.notice(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Substitute a usable list when the candidate list is empty
    fn fill_empty(&self, candidates: Vec<Entry>) -> Result<Vec<Entry>> {
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        let current = self.current();
        let fallback = match &self.current {
            Entry::Static(id) if current.has_children() => self.static_entries(*id),
            _ => self.static_entries(self.tree.root()),
        };
        if fallback.is_empty() {
            bail!("Menu '{}' has no entries to display", self.tree.node(self.tree.root()).name);
        }
        debug!("Empty candidate list, falling back to {} entries", fallback.len());
        Ok(fallback)
    }

    fn render(&mut self, candidates: &[Entry]) -> Result<()> {
        for entry in candidates {
            let node = entry.node(&self.tree);
            writeln!(self.console, "\n        {} | {}", node.ordinal_id, node.name)?;
        }
        self.console.flush()?;
        Ok(())
    }

    async fn dispatch(&mut self) -> Result<Vec<Entry>> {
        let Self {
            registry,
            tree,
            console,
            current,
            ..
        } = &mut *self;
        let node = current.node(tree);

        let group = registry.resolve(&node.operation)?;
        info!("Dispatching '{}' to {}", node.name, node.operation);
        let request = Request {
            tree,
            parent: node.parent,
            args: &node.args,
            console,
        };
        let response = group.invoke(node.operation.name, request).await?;

        Ok(self.next_candidates(response))
    }

    fn next_candidates(&self, response: Response) -> Vec<Entry> {
        if !response.dynamic_items.is_empty() {
            debug!("Showing {} dynamic entries", response.dynamic_items.len());
            return response.dynamic_items.into_iter().map(Entry::Dynamic).collect();
        }

        if let Some(parent) = response.override_parent {
            return self.static_entries(parent);
        }

        let current = self.current();
        if let Entry::Static(id) = &self.current {
            if current.has_children() {
                return self.static_entries(*id);
            }
        }

        match current.parent {
            Some(parent) => self.static_entries(parent),
            None => {
                warn!("Screen '{}' has no parent, returning to the top", current.name);
                self.static_entries(self.tree.root())
            }
        }
    }

    fn static_entries(&self, id: NodeId) -> Vec<Entry> {
        self.tree
            .children(id)
            .iter()
            .copied()
            .map(Entry::Static)
            .collect()
    }
}
