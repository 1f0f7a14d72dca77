/// Shared helpers: scripted navigators and transcript parsing
use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tictac_league::components;
use tictac_league::menu::{
    DynamicMenu, Navigator, OperationGroup, OperationRef, Request, Response, ScreenNode,
    ScreenTree, routes,
};
use tictac_league::ui::{Console, Transcript};

/// Split a transcript into the menus it rendered, one `Vec` of names per render.
///
/// A render is a run of `"<ordinal> | <name>"` lines starting at ordinal 0; any other
/// non-empty line ends it.
pub fn renders(transcript: &str) -> Vec<Vec<String>> {
    let mut renders = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in transcript.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let entry = trimmed.split_once(" | ").filter(|(ordinal, _)| {
            !ordinal.is_empty() && ordinal.bytes().all(|b| b.is_ascii_digit())
        });
        match entry {
            Some((ordinal, name)) => {
                if ordinal == "0" && !current.is_empty() {
                    renders.push(std::mem::take(&mut current));
                }
                current.push(name.to_string());
            }
            None if !current.is_empty() => renders.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        renders.push(current);
    }
    renders
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub const STUB: &str = "stub";

/// Test group that records every invocation
#[derive(Clone, Default)]
pub struct Stub {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OperationGroup for Stub {
    fn id(&self) -> &'static str {
        STUB
    }

    fn operations(&self) -> &'static [&'static str] {
        &["noop", "list", "empty_list", "unresolvable_list", "jump", "terminate"]
    }

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response> {
        self.calls.lock().unwrap().push(operation.to_string());
        writeln!(request.console, "> {}", operation)?;

        match operation {
            "noop" => Ok(Response::empty()),
            "list" => {
                let target = OperationRef::new(STUB, "noop");
                let items = DynamicMenu::new(request.parent)
                    .item("Alpha", target, Default::default())
                    .item("Beta", target, Default::default())
                    .build();
                Ok(Response::submenu(items))
            }
            "empty_list" => Ok(Response::submenu(Vec::new())),
            "unresolvable_list" => {
                let items = DynamicMenu::new(request.parent)
                    .item("Nowhere", OperationRef::new(STUB, "nope"), Default::default())
                    .build();
                Ok(Response::submenu(items))
            }
            "jump" => {
                let to = request
                    .args
                    .get("to")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let target = request.tree.find_child(request.tree.root(), to);
                Ok(Response::back_to(target))
            }
            "terminate" => bail!("process terminated"),
            other => bail!("unexpected operation {}", other),
        }
    }
}


pub fn stub_node(name: &str, operation: &'static str) -> ScreenNode {
    ScreenNode::new(name, STUB, operation)
}

/// Navigator over `tree` with a fresh [`Stub`], fed by `script`
pub fn stub_navigator(tree: ScreenTree, script: &str) -> (Navigator, Stub, Transcript) {
    let stub = Stub::default();
    let mut registry = tictac_league::menu::Registry::new();
    registry.register(Box::new(stub.clone())).unwrap();
    let (console, transcript) = Console::scripted(script);
    (Navigator::new(registry, tree, console), stub, transcript)
}

/// The real menu over `pool`, fed by `script`
pub fn league_navigator(pool: &SqlitePool, script: &str) -> (Navigator, Transcript) {
    let registry = components::build_registry(pool).unwrap();
    let (console, transcript) = Console::scripted(script);
    (Navigator::new(registry, routes::main_menu(), console), transcript)
}

#[test]
fn test_renders_splits_on_other_output() {
    let transcript = "\n        0 | A\n\n        1 | B\n> noop\n\n        0 | C\n\n        0 | D\n";
    assert_eq!(
        renders(transcript),
        vec![names(&["A", "B"]), names(&["C"]), names(&["D"])]
    );
}
