//! Staff front end of the chess lesson tracker.
//!
//! Lists games and users page by page, shows a game with its snapshots and
//! edits user records, all through the backend REST API.

pub mod client;
pub mod domain;
pub mod forms;
pub mod list;
pub mod models;
pub mod pagination;
pub mod render;
pub mod services;
pub mod surface;

/// Navigation target when the backend answers `401`.
pub const DEFAULT_LOGIN_PATH: &str = "/login";
