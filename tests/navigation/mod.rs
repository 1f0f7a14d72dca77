/// Navigation engine tests over stub trees
use tictac_league::menu::{Args, DispatchError, NavigationState, ScreenTree};

use crate::support::{names, renders, stub_navigator, stub_node};

/// Root with `[Start, Exit]`, Exit ending the process
fn start_exit_tree() -> ScreenTree {
    let mut tree = ScreenTree::new(stub_node("Main", "noop"));
    let root = tree.root();
    tree.attach_child(root, stub_node("Start", "noop"));
    tree.attach_child(root, stub_node("Exit", "terminate"));
    tree
}

/// Root with `[A[A0, A1, A2], B]`
fn nested_tree() -> ScreenTree {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    let a = tree.attach_child(root, stub_node("A", "noop"));
    tree.attach_child(root, stub_node("B", "noop"));
    tree.attach_child(a, stub_node("A0", "noop"));
    tree.attach_child(a, stub_node("A1", "noop"));
    tree.attach_child(a, stub_node("A2", "noop"));
    tree
}

#[tokio::test]
async fn test_selecting_exit_dispatches_and_stops_rendering() {
    let (mut navigator, stub, transcript) = stub_navigator(start_exit_tree(), "1\n0\n");

    let err = navigator.run().await.unwrap_err();
    assert_eq!(err.to_string(), "process terminated");
    assert_eq!(stub.calls(), ["terminate"]);
    assert_eq!(navigator.current().name, "Exit");
    assert_eq!(navigator.state(), NavigationState::Dispatching);

    let output = transcript.contents();
    assert_eq!(renders(&output), vec![names(&["Start", "Exit"])]);
    assert!(output.trim_end().ends_with("> terminate"));
}

#[tokio::test]
async fn test_out_of_range_and_non_numeric_redisplay_same_list() {
    let (mut navigator, stub, transcript) = stub_navigator(start_exit_tree(), "9\nx\n-1\n\n");

    navigator.run().await.unwrap();
    assert!(stub.calls().is_empty());
    assert_eq!(navigator.current().name, "Main");

    let output = transcript.contents();
    let start_exit = names(&["Start", "Exit"]);
    assert_eq!(renders(&output), vec![start_exit; 5]);
    assert_eq!(output.matches("Wrong choice, try again:").count(), 4);
}

#[tokio::test]
async fn test_selection_path_follows_tree() {
    let (mut navigator, stub, transcript) = stub_navigator(nested_tree(), "0\n2\n");

    navigator.run().await.unwrap();
    assert_eq!(navigator.current().name, "A2");
    assert_eq!(stub.calls(), ["noop", "noop"]);

    // A has children, so they are shown; A2 is a leaf, so its siblings are shown again
    assert_eq!(
        renders(&transcript.contents()),
        vec![
            names(&["A", "B"]),
            names(&["A0", "A1", "A2"]),
            names(&["A0", "A1", "A2"]),
        ]
    );
}

#[tokio::test]
async fn test_invalid_input_keeps_cursor() {
    let (mut navigator, _, transcript) = stub_navigator(nested_tree(), "0\n7\nfoo\n");

    navigator.run().await.unwrap();
    assert_eq!(navigator.current().name, "A");
    let rendered = renders(&transcript.contents());
    assert_eq!(rendered.len(), 4);
    assert!(rendered[1..].iter().all(|r| *r == names(&["A0", "A1", "A2"])));
}

#[tokio::test]
async fn test_dynamic_items_replace_static_children() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    let list = tree.attach_child(root, stub_node("List", "list"));
    tree.attach_child(list, stub_node("Hidden", "noop"));
    tree.attach_child(root, stub_node("Other", "noop"));

    let (mut navigator, stub, transcript) = stub_navigator(tree, "0\n1\n");
    navigator.run().await.unwrap();

    assert_eq!(stub.calls(), ["list", "noop"]);
    assert_eq!(navigator.current().name, "Beta");
    assert_eq!(
        renders(&transcript.contents()),
        vec![
            names(&["List", "Other"]),
            names(&["Alpha", "Beta"]),
            // Beta's parent is the root, where List lives
            names(&["List", "Other"]),
        ]
    );
}

#[tokio::test]
async fn test_invalid_input_redisplays_dynamic_list() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    tree.attach_child(root, stub_node("List", "list"));
    tree.attach_child(root, stub_node("Other", "noop"));

    let (mut navigator, stub, transcript) = stub_navigator(tree, "0\n9\nx\n");
    navigator.run().await.unwrap();

    assert_eq!(stub.calls(), ["list"]);
    assert_eq!(navigator.current().name, "List");
    let alpha_beta = names(&["Alpha", "Beta"]);
    assert_eq!(
        renders(&transcript.contents()),
        vec![
            names(&["List", "Other"]),
            alpha_beta.clone(),
            alpha_beta.clone(),
            alpha_beta,
        ]
    );
}

#[tokio::test]
async fn test_unresolvable_dynamic_item_fails_at_dispatch() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    tree.attach_child(tree.root(), stub_node("Broken list", "unresolvable_list"));

    // the static tree is valid, so the failure only shows once the item is picked
    let (mut navigator, stub, transcript) = stub_navigator(tree, "0\n0\n");
    let err = navigator.run().await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<DispatchError>(),
        Some(&DispatchError::method_not_found("stub", "nope"))
    );
    assert_eq!(stub.calls(), ["unresolvable_list"]);
    assert_eq!(navigator.current().name, "Nowhere");
    assert_eq!(
        renders(&transcript.contents()),
        vec![names(&["Broken list"]), names(&["Nowhere"])]
    );
}

#[tokio::test]
async fn test_override_parent_shows_its_children() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    let section = tree.attach_child(root, stub_node("Section", "noop"));
    tree.attach_child(section, stub_node("S0", "noop"));
    tree.attach_child(section, stub_node("S1", "noop"));
    tree.attach_child(
        root,
        stub_node("Go", "jump").with_args(Args::new().with("to", "Section")),
    );

    let (mut navigator, _, transcript) = stub_navigator(tree, "1\n");
    navigator.run().await.unwrap();

    assert_eq!(
        renders(&transcript.contents()),
        vec![names(&["Section", "Go"]), names(&["S0", "S1"])]
    );
}

#[tokio::test]
async fn test_empty_override_falls_back_to_root() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    tree.attach_child(root, stub_node("Leaf", "noop"));
    tree.attach_child(
        root,
        stub_node("Go", "jump").with_args(Args::new().with("to", "Leaf")),
    );

    let (mut navigator, _, transcript) = stub_navigator(tree, "1\n");
    navigator.run().await.unwrap();

    // Leaf has no children and neither has Go, so the root's children come back
    assert_eq!(
        renders(&transcript.contents()),
        vec![names(&["Leaf", "Go"]), names(&["Leaf", "Go"])]
    );
}

#[tokio::test]
async fn test_empty_dynamic_list_follows_static_tree() {
    let mut tree = ScreenTree::new(stub_node("Root", "noop"));
    let root = tree.root();
    let section = tree.attach_child(root, stub_node("Section", "empty_list"));
    tree.attach_child(section, stub_node("Inside", "noop"));

    let (mut navigator, _, transcript) = stub_navigator(tree, "0\n");
    navigator.run().await.unwrap();

    assert_eq!(
        renders(&transcript.contents()),
        vec![names(&["Section"]), names(&["Inside"])]
    );
}

#[tokio::test]
async fn test_unknown_operation_fails_before_first_render() {
    let mut tree = start_exit_tree();
    tree.attach_child(tree.root(), stub_node("Broken", "missing"));

    let (mut navigator, stub, transcript) = stub_navigator(tree, "0\n");
    let err = navigator.run().await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<DispatchError>(),
        Some(&DispatchError::method_not_found("stub", "missing"))
    );
    assert!(stub.calls().is_empty());
    assert!(transcript.contents().is_empty());
}

#[tokio::test]
async fn test_childless_root_is_an_error() {
    let tree = ScreenTree::new(stub_node("Lonely", "noop"));
    let (mut navigator, _, _) = stub_navigator(tree, "0\n");
    assert!(navigator.run().await.is_err());
}
