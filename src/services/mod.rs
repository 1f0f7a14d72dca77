//! Domain services behind the menu operations

pub mod game;
pub mod players;
pub mod seasons;
pub mod statistics;
pub mod validation;
