//! One interactive game between two players of the league

use anyhow::{Result, bail};
use rand::Rng;
use sqlx::SqlitePool;
use std::io::Write;

use super::board::{Board, Outcome, Symbol, parse_cell};
use crate::db::models::{DbLeagueSeason, DbUser};
use crate::db::repository::{games, users};
use crate::menu::parse_selection;
use crate::ui::Console;

pub const REQUIRED_PLAYERS: usize = 2;

const WRONG_CHOICE: &str = "Wrong choice. Try again, please:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub user: DbUser,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game_id: i64,
    /// `None` for a draw
    pub winner: Option<DbUser>,
    pub moves: usize,
}

/// Pick the players, then play turns until someone wins or the board is full
pub async fn play<R: Rng + Send>(
    pool: &SqlitePool,
    console: &mut Console,
    season: &DbLeagueSeason,
    rng: &mut R,
) -> Result<GameReport> {
    let players = choose_players(pool, console).await?;
    let seats = assign_symbols(players, rng);

    let entrants: Vec<(i64, char)> = seats
        .iter()
        .map(|seat| (seat.user.id, seat.symbol.as_char()))
        .collect();
    let game_id = games::create(pool, season.id, &entrants).await?;

    let mut board = Board::new();
    let mut turn = rng.gen_range(0..seats.len());
    let mut moves = 0;
    loop {
        let seat = &seats[turn];
        writeln!(
            console,
            "\n        {} turn. Please, fill the cell:\n",
            seat.user.nickname
        )?;
        write!(console, "{}", board)?;

        let answer = console.prompt("Select field with two digits and comma between:")?;
        let Some((x, y)) = parse_cell(&answer) else {
            console.notice(WRONG_CHOICE)?;
            continue;
        };

        let outcome = match board.place(x, y, seat.symbol) {
            Ok(outcome) => outcome,
            Err(err) => {
                console.notice(&err.to_string())?;
                continue;
            }
        };
        games::record_decision(pool, game_id, seat.user.id, x, y).await?;
        moves += 1;

        let winner = match outcome {
            Outcome::InProgress => {
                turn = (turn + 1) % seats.len();
                continue;
            }
            Outcome::Win(_) => {
                writeln!(console, "\n        {} wins!", seat.user.nickname)?;
                Some(seat.user.clone())
            }
            Outcome::Draw => {
                writeln!(console, "\n        Played a draw!")?;
                None
            }
        };
        write!(console, "{}", board)?;

        games::finish(pool, game_id, winner.as_ref().map(|user| user.id)).await?;
        return Ok(GameReport {
            game_id,
            winner,
            moves,
        });
    }
}

/// Ask for players one at a time from those not chosen yet
pub async fn choose_players(pool: &SqlitePool, console: &mut Console) -> Result<Vec<DbUser>> {
    let mut chosen: Vec<DbUser> = Vec::with_capacity(REQUIRED_PLAYERS);

    while chosen.len() < REQUIRED_PLAYERS {
        let chosen_ids: Vec<i64> = chosen.iter().map(|user| user.id).collect();
        let available = users::list_excluding(pool, &chosen_ids).await?;
        if available.is_empty() {
            bail!("Not enough players to start a game");
        }

        writeln!(
            console,
            "\n        Choose the players. {} left:\n",
            REQUIRED_PLAYERS - chosen.len()
        )?;
        for (index, user) in available.iter().enumerate() {
            writeln!(console, "        {} {}", index, user.nickname)?;
        }

        let answer = console.prompt("Enter user id:")?;
        match parse_selection(&answer).and_then(|index| available.get(index)) {
            Some(user) => chosen.push(user.clone()),
            None => console.notice(WRONG_CHOICE)?,
        }
    }

    Ok(chosen)
}

/// First player gets a random symbol, the second one the other
pub fn assign_symbols<R: Rng + ?Sized>(players: Vec<DbUser>, rng: &mut R) -> Vec<Seat> {
    let mut symbol = if rng.gen_bool(0.5) { Symbol::X } else { Symbol::O };
    players
        .into_iter()
        .map(|user| {
            let seat = Seat { user, symbol };
            symbol = symbol.other();
            seat
        })
        .collect()
}
