//! Query functions over the league tables, one module per aggregate

pub mod games;
pub mod seasons;
pub mod users;
