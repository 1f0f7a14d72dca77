pub mod chart;
pub mod console;
pub mod prompts;
pub mod table;

pub use console::{Console, Transcript};
pub use table::Table;
