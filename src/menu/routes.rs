//! The application's static menu tree

use super::node::{ScreenNode, ScreenTree};
use super::response::PREVIOUS_OPERATION;
use crate::components::{game, main_menu, management};

/// Build the main menu, its management section and their leaves
pub fn main_menu() -> ScreenTree {
    let mut tree = ScreenTree::new(ScreenNode::new("Main menu", main_menu::ID, "welcome"));
    let root = tree.root();

    tree.attach_child(root, ScreenNode::new("Start new game", game::ID, "start_game"));
    tree.attach_child(root, ScreenNode::new("Ranking table", main_menu::ID, "ranking_table"));
    tree.attach_child(
        root,
        ScreenNode::new("Past games statistics", main_menu::ID, "player_statistic"),
    );
    let management_item =
        tree.attach_child(root, ScreenNode::new("Management", main_menu::ID, "management"));
    tree.attach_child(root, ScreenNode::new("Exit game", main_menu::ID, "exit_game"));

    tree.attach_child(
        management_item,
        ScreenNode::new("Player table", management::ID, "player_list"),
    );
    tree.attach_child(
        management_item,
        ScreenNode::new("Create player", management::ID, "player_create"),
    );
    tree.attach_child(
        management_item,
        ScreenNode::new("Delete player", management::ID, "player_delete"),
    );
    tree.attach_child(
        management_item,
        ScreenNode::new("Create new league season", management::ID, "new_league_season"),
    );
    tree.attach_child(
        management_item,
        ScreenNode::new("Previous", PREVIOUS_OPERATION.group, PREVIOUS_OPERATION.name),
    );

    tree
}
