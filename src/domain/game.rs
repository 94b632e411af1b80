use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::list::Identified;
use crate::domain::types::{
    GameId, SnapshotId, TypeConstraintError, UserId, deserialize_timestamp,
};

/// Lifecycle of a lesson game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Finished,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
        }
    }

    /// Human readable badge text.
    pub const fn label(self) -> &'static str {
        match self {
            GameStatus::InProgress => "В процессе",
            GameStatus::Finished => "Завершена",
        }
    }

    /// Bootstrap badge class used for the status.
    pub const fn badge_class(self) -> &'static str {
        match self {
            GameStatus::InProgress => "bg-success",
            GameStatus::Finished => "bg-primary",
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in_progress" => Ok(GameStatus::InProgress),
            "finished" => Ok(GameStatus::Finished),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// One of the two people playing a game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub id: UserId,
    pub name: String,
}

/// Row of the games list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub status: GameStatus,
    pub player1: Participant,
    pub player2: Participant,
    #[serde(default)]
    pub snapshot_count: usize,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Identified for Game {
    fn id(&self) -> i32 {
        self.id.get()
    }
}

/// Board position captured at a move of a game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: SnapshotId,
    pub move_number: u32,
    /// Position in FEN piece-placement notation.
    pub position: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Identified for Snapshot {
    fn id(&self) -> i32 {
        self.id.get()
    }
}

/// Full game record returned by `GET /api/games/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: GameId,
    pub title: String,
    pub status: GameStatus,
    pub player1: Participant,
    pub player2: Participant,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl GameDetail {
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}
