pub mod cli;
pub mod components;
pub mod config;
pub mod db;
pub mod menu;
pub mod services;
pub mod ui;
