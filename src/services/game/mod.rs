//! Tic-tac-toe gameplay

pub mod board;
pub mod session;

pub use board::{Board, BoardError, Outcome, Symbol, parse_cell};
pub use session::{GameReport, REQUIRED_PLAYERS, Seat, play};
