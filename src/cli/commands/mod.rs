pub mod db;
pub mod play;

pub use db::{DbCommands, db_command};
pub use play::play_command;
