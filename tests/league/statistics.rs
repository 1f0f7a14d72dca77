use tictac_league::db::{
    self,
    repository::{games, seasons},
};

use super::add_player;
use crate::support::league_navigator;

#[tokio::test]
async fn test_statistics_without_season() {
    let pool = db::connect_test().await.unwrap();
    let (mut navigator, transcript) = league_navigator(&pool, "1\n2\n");

    navigator.run().await.unwrap();

    let output = transcript.contents();
    assert!(output.contains("Ranking table:"));
    assert!(output.contains("Past games statistics:"));
    assert_eq!(output.matches("You don't have any league season").count(), 2);
    assert!(!output.contains("Nickname"));
}

#[tokio::test]
async fn test_ranking_and_past_games_of_latest_season() {
    let pool = db::connect_test().await.unwrap();
    let ada = add_player(&pool, "ada").await;
    let alan = add_player(&pool, "alan").await;

    let old_season = seasons::insert(&pool, "Old").await.unwrap();
    let old_game = games::create(&pool, old_season, &[(ada, 'x'), (alan, 'o')])
        .await
        .unwrap();
    games::finish(&pool, old_game, Some(ada)).await.unwrap();

    let season = seasons::insert(&pool, "Current").await.unwrap();
    let won = games::create(&pool, season, &[(ada, 'x'), (alan, 'o')])
        .await
        .unwrap();
    games::finish(&pool, won, Some(alan)).await.unwrap();
    let drawn = games::create(&pool, season, &[(alan, 'x'), (ada, 'o')])
        .await
        .unwrap();
    games::finish(&pool, drawn, None).await.unwrap();
    // Still running, not counted anywhere
    games::create(&pool, season, &[(ada, 'x'), (alan, 'o')])
        .await
        .unwrap();

    let (mut navigator, transcript) = league_navigator(&pool, "1\n2\n");
    navigator.run().await.unwrap();

    let output = transcript.contents();
    let rows: Vec<Vec<String>> = output
        .lines()
        .filter(|line| line.starts_with('|'))
        .map(|line| {
            line.split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect();
    // Nickname, Total, Win, Loss, Pts
    assert_eq!(rows[0], ["Nickname", "Total", "Win", "Loss", "Pts"]);
    assert_eq!(rows[1], ["alan", "2", "1", "1", "3"]);
    assert_eq!(rows[2], ["ada", "2", "0", "2", "2"]);

    assert!(output.contains("Statistic for the games from league season: Current"));
    assert!(output.contains("ada vs alan"));
    assert!(output.contains("alan is winner"));
    assert!(output.contains("alan vs ada"));
    assert!(output.contains("Played a draw"));
    assert_eq!(output.matches(" vs ").count(), 2);
}
