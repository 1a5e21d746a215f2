pub mod ai;
pub mod config;
pub mod debug;
pub mod game;
pub mod port;
pub mod session;
pub mod ui;
