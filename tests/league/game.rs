use tictac_league::db::{self, repository::games};

use super::add_player;
use crate::support::{league_navigator, names, renders};

/// Moves that let whoever starts win along x = 0, with an occupied cell and a typo on the way
const WINNING_MOVES: &str = "0,0\n0,0\n1,0\nzz\n0,1\n1,1\n0,2\n";

#[tokio::test]
async fn test_first_game_creates_season_and_players() {
    let pool = db::connect_test().await.unwrap();
    let script = format!(
        "0\nSpring\n\
         Ada\nLovelace\n\nada\n36\n\
         \n\n\nalan\n\n\
         0\n0\n{}",
        WINNING_MOVES
    );
    let (mut navigator, transcript) = league_navigator(&pool, &script);

    navigator.run().await.unwrap();

    let output = transcript.contents();
    assert!(output.contains("You don't have any league season"));
    assert!(output.contains("New league season Spring was created."));
    assert!(output.contains("You don't have enough players. You need to create 2 at least"));
    assert!(output.contains("You don't have enough players. You need to create 1 at least"));
    assert!(output.contains("This cell is filled, please, choose another"));
    assert!(output.contains("Wrong choice. Try again, please:"));
    assert!(output.contains(" wins!"));

    let info = db::get_db_info(&pool).await.unwrap();
    assert_eq!(info.player_count, 2);
    assert_eq!(info.season_count, 1);
    assert_eq!(info.game_count, 1);

    // Start new game is a leaf: back to the main menu afterwards
    assert_eq!(renders(&output).last().map(|r| r[0].as_str()), Some("Start new game"));
}

#[tokio::test]
async fn test_game_persists_moves_and_winner() {
    let pool = db::connect_test().await.unwrap();
    add_player(&pool, "ada").await;
    add_player(&pool, "alan").await;
    let script = format!("3\n3\nSummer\n4\n0\n0\n0\n{}", WINNING_MOVES);
    let (mut navigator, _) = league_navigator(&pool, &script);

    navigator.run().await.unwrap();

    let info = db::get_db_info(&pool).await.unwrap();
    assert_eq!(info.game_count, 1);

    let game_id = 1;
    let results = games::results(&pool, game_id).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results.iter().filter(|r| r.won()).count(), 1);
    assert!(results.iter().all(|r| r.is_winner.is_some()));

    let mut symbols: Vec<_> = results.iter().map(|r| r.symbol.clone()).collect();
    symbols.sort();
    assert_eq!(symbols, ["o", "x"]);

    // Rejected input never reaches the database
    let decisions = games::decisions(&pool, game_id).await.unwrap();
    assert_eq!(decisions.len(), 5);
    let winner = results.iter().find(|r| r.won()).unwrap();
    let winning_cells: Vec<_> = decisions
        .iter()
        .filter(|d| d.user_id == winner.user_id)
        .map(|d| (d.coordinate_x, d.coordinate_y))
        .collect();
    assert_eq!(winning_cells, [(0, 0), (0, 1), (0, 2)]);
}

#[tokio::test]
async fn test_wrong_player_index_is_retried() {
    let pool = db::connect_test().await.unwrap();
    add_player(&pool, "ada").await;
    add_player(&pool, "alan").await;
    add_player(&pool, "grace").await;
    let seasons_script = "3\n3\nAutumn\n4\n";
    let script = format!("{}0\n7\n2\nbob\n0\n{}", seasons_script, WINNING_MOVES);
    let (mut navigator, transcript) = league_navigator(&pool, &script);

    navigator.run().await.unwrap();

    let output = transcript.contents();
    assert_eq!(output.matches("Wrong choice. Try again, please:").count(), 3);

    let results = games::results(&pool, 1).await.unwrap();
    let mut players: Vec<_> = results.iter().map(|r| r.nickname.as_str()).collect();
    players.sort();
    assert_eq!(players, ["ada", "grace"]);
    assert_eq!(
        renders(&output).last(),
        Some(&names(&[
            "Start new game",
            "Ranking table",
            "Past games statistics",
            "Management",
            "Exit game"
        ]))
    );
}
