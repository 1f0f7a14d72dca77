//! Player management flows shared by the management and game screens

use anyhow::Result;
use rand::Rng;
use sqlx::SqlitePool;
use std::io::Write;

use super::statistics;
use super::validation::{
    PlayerField, ValidationError, validate_age, validate_email, validate_name, validate_nickname,
};
use crate::db::models::DbUser;
use crate::db::repository::users::{self, NewUser};
use crate::menu::{Args, DynamicMenu, NodeId, OperationRef, ScreenNode};
use crate::ui::Console;

const RULE: &str = "--------------------------------------------------";

/// Ask every field of a new player, re-asking a field until its answer is valid
pub async fn create_player<R: Rng + Send>(
    pool: &SqlitePool,
    console: &mut Console,
    rng: &mut R,
) -> Result<DbUser> {
    writeln!(console, "\n        Field marked with * is required")?;

    let mut player = NewUser::default();
    for field in PlayerField::ALL {
        loop {
            let answer = console.prompt(&field.prompt())?;
            match apply_field(&mut player, field, answer.trim(), rng) {
                Ok(()) => break,
                Err(err) => console.notice(&err.to_string())?,
            }
        }
    }

    let id = users::insert(pool, &player).await?;
    writeln!(
        console,
        "\n        Player {} {} has been created with attributes:\n\n        Nickname: {}\n        Age: {}\n        Email: {}\n",
        player.first_name.as_deref().unwrap_or(""),
        player.last_name.as_deref().unwrap_or(""),
        player.nickname,
        player
            .age
            .map(|age| format!("{} years old", age))
            .unwrap_or_else(|| "-".to_string()),
        player.email.as_deref().unwrap_or("-"),
    )?;

    Ok(DbUser {
        id,
        first_name: player.first_name,
        last_name: player.last_name,
        email: player.email,
        nickname: player.nickname,
        age: player.age,
    })
}

fn apply_field<R: Rng + ?Sized>(
    player: &mut NewUser,
    field: PlayerField,
    value: &str,
    rng: &mut R,
) -> Result<(), ValidationError> {
    match field {
        PlayerField::FirstName => player.first_name = validate_name(field, value)?,
        PlayerField::LastName => player.last_name = validate_name(field, value)?,
        PlayerField::Email => player.email = validate_email(value)?,
        PlayerField::Nickname => player.nickname = validate_nickname(value, rng)?,
        PlayerField::Age => player.age = validate_age(value)?,
    }
    Ok(())
}

/// Create players until the league has at least `required` of them
pub async fn ensure_players<R: Rng + Send>(
    pool: &SqlitePool,
    console: &mut Console,
    required: usize,
    rng: &mut R,
) -> Result<()> {
    loop {
        let existing = users::count(pool).await? as usize;
        if existing >= required {
            return Ok(());
        }
        console.notice(&format!(
            "You don't have enough players. You need to create {} at least",
            required - existing
        ))?;
        create_player(pool, console, rng).await?;
    }
}

/// One entry per player targeting `destination`, followed by "Previous"
pub async fn player_menu(
    pool: &SqlitePool,
    parent: Option<NodeId>,
    destination: OperationRef,
) -> Result<Vec<ScreenNode>> {
    let menu = users::list(pool)
        .await?
        .into_iter()
        .fold(DynamicMenu::new(parent), |menu, user| {
            menu.item(user.nickname, destination, Args::new().with("user_id", user.id))
        });
    Ok(menu.with_previous().build())
}

/// Only the fields that were filled in
pub fn describe(user: &DbUser) -> String {
    let mut label =
        String::from("\n        Only completed fields will be displayed in the user's detailed information\n");
    if user.first_name.is_some() || user.last_name.is_some() {
        label.push_str(&format!(
            "\n        Detail of player {} {}:\n",
            user.first_name.as_deref().unwrap_or(""),
            user.last_name.as_deref().unwrap_or("")
        ));
    }
    label.push_str(&format!("\n        Nickname: {}", user.nickname));
    if let Some(age) = user.age {
        label.push_str(&format!("\n        Age: {} years old", age));
    }
    if let Some(email) = &user.email {
        label.push_str(&format!("\n        Email: {}", email));
    }
    label.push('\n');
    label
}

fn heading(console: &mut Console, title: &str) -> Result<()> {
    writeln!(console, "\n        {}\n        {}\n        {}", RULE, title, RULE)?;
    Ok(())
}

/// Details, ranking row and points growth of one player
pub async fn show_player_details(pool: &SqlitePool, console: &mut Console, user: &DbUser) -> Result<()> {
    heading(console, "User detail:")?;
    writeln!(console, "{}", describe(user))?;

    heading(console, "Ranking table:")?;
    statistics::show_ranking_table(pool, console, Some(user)).await?;

    if let Some(chart) = statistics::points_growth_chart(pool, user).await? {
        heading(console, "Points growth dynamics:")?;
        writeln!(console, "{}", chart)?;
    }
    Ok(())
}
