pub mod game;
pub mod list;
pub mod types;
pub mod user;
