//! League statistics: ranking table, past games and points growth
//!
//! Everything is computed over the latest league season. Results of games that were
//! never finished are ignored.

use anyhow::Result;
use sqlx::SqlitePool;
use std::io::Write;

use crate::db::models::{DbGameResult, DbLeagueSeason, DbUser};
use crate::db::repository::{games, seasons};
use crate::ui::{Console, Table, chart};

pub const POINTS_FOR_WIN: i64 = 2;
pub const POINTS_FOR_OTHER: i64 = 1;

const NO_SEASON: &str =
    "You don't have any league season. Create it and play some games before statistic will appear";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub user_id: i64,
    pub nickname: String,
    pub total: i64,
    pub wins: i64,
    pub losses: i64,
    pub points: i64,
}

impl RankingRow {
    fn empty(user_id: i64, nickname: &str) -> Self {
        Self {
            user_id,
            nickname: nickname.to_string(),
            total: 0,
            wins: 0,
            losses: 0,
            points: 0,
        }
    }

    fn record(&mut self, won: bool) {
        self.total += 1;
        if won {
            self.wins += 1;
            self.points += POINTS_FOR_WIN;
        } else {
            self.losses += 1;
            self.points += POINTS_FOR_OTHER;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: i64,
    pub players: Vec<String>,
    pub winner: Option<String>,
}

impl GameSummary {
    pub fn outcome(&self) -> String {
        match &self.winner {
            Some(nickname) => format!("{} is winner", nickname),
            None => "Played a draw".to_string(),
        }
    }
}

fn finished(results: &[DbGameResult]) -> impl Iterator<Item = &DbGameResult> {
    results.iter().filter(|r| r.is_winner.is_some())
}

/// Ranking of every player with a finished game, best first
pub fn ranking(results: &[DbGameResult]) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = Vec::new();
    for result in finished(results) {
        let position = match rows.iter().position(|row| row.user_id == result.user_id) {
            Some(position) => position,
            None => {
                rows.push(RankingRow::empty(result.user_id, &result.nickname));
                rows.len() - 1
            }
        };
        rows[position].record(result.won());
    }
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

/// Ranking row of a single player, zeroed when they have not played
pub fn ranking_for(results: &[DbGameResult], user: &DbUser) -> RankingRow {
    let mut row = RankingRow::empty(user.id, &user.nickname);
    for result in finished(results).filter(|r| r.user_id == user.id) {
        row.record(result.won());
    }
    row
}

/// One summary per finished game, in game order
pub fn past_games(results: &[DbGameResult]) -> Vec<GameSummary> {
    let mut summaries: Vec<GameSummary> = Vec::new();
    for result in finished(results) {
        if summaries.last().map(|s| s.game_id) != Some(result.game_id) {
            summaries.push(GameSummary {
                game_id: result.game_id,
                players: Vec::new(),
                winner: None,
            });
        }
        if let Some(summary) = summaries.last_mut() {
            summary.players.push(result.nickname.clone());
            if result.won() {
                summary.winner = Some(result.nickname.clone());
            }
        }
    }
    summaries
}

/// Cumulative points of `user_id` after each of their finished games
pub fn points_growth(results: &[DbGameResult], user_id: i64) -> Vec<i64> {
    finished(results)
        .filter(|r| r.user_id == user_id)
        .scan(0, |points, result| {
            *points += if result.won() { POINTS_FOR_WIN } else { POINTS_FOR_OTHER };
            Some(*points)
        })
        .collect()
}

pub fn ranking_table(rows: &[RankingRow]) -> Table {
    let mut table = Table::new(["Nickname", "Total", "Win", "Loss", "Pts"]);
    for row in rows {
        table.add_row([
            row.nickname.clone(),
            row.total.to_string(),
            row.wins.to_string(),
            row.losses.to_string(),
            row.points.to_string(),
        ]);
    }
    table
}

pub fn past_games_table(summaries: &[GameSummary]) -> Table {
    let mut table = Table::new(["Players", "Result"]);
    for summary in summaries {
        table.add_row([summary.players.join(" vs "), summary.outcome()]);
    }
    table
}

/// Latest season, telling the user when there is none
pub async fn latest_season_or_notice(
    pool: &SqlitePool,
    console: &mut Console,
) -> Result<Option<DbLeagueSeason>> {
    let season = seasons::latest(pool).await?;
    if season.is_none() {
        console.notice(NO_SEASON)?;
    }
    Ok(season)
}

/// Print the ranking of the latest season, or only `user`'s row when given
pub async fn show_ranking_table(
    pool: &SqlitePool,
    console: &mut Console,
    user: Option<&DbUser>,
) -> Result<()> {
    let Some(season) = latest_season_or_notice(pool, console).await? else {
        return Ok(());
    };
    let results = games::season_results(pool, season.id).await?;

    let rows = match user {
        Some(user) => vec![ranking_for(&results, user)],
        None => ranking(&results),
    };
    writeln!(console, "{}", ranking_table(&rows))?;
    Ok(())
}

pub async fn show_past_games_statistic(pool: &SqlitePool, console: &mut Console) -> Result<()> {
    let Some(season) = latest_season_or_notice(pool, console).await? else {
        return Ok(());
    };
    let results = games::season_results(pool, season.id).await?;

    writeln!(
        console,
        "\n        Statistic for the games from league season: {}\n",
        season.display_name()
    )?;
    writeln!(console, "{}", past_games_table(&past_games(&results)))?;
    Ok(())
}

/// Points growth chart of `user` in the latest season, `None` when they have no games
pub async fn points_growth_chart(pool: &SqlitePool, user: &DbUser) -> Result<Option<String>> {
    let Some(season) = seasons::latest(pool).await? else {
        return Ok(None);
    };
    let results = games::season_results(pool, season.id).await?;
    let growth = points_growth(&results, user.id);
    if growth.is_empty() {
        return Ok(None);
    }
    Ok(Some(chart::render(&growth)))
}
