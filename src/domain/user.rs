use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::list::Identified;
use crate::domain::types::{TypeConstraintError, UserEmail, UserId, UserName, deserialize_timestamp};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Ученик",
            UserRole::Teacher => "Учитель",
            UserRole::Admin => "Администратор",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            UserRole::Student => "bg-light text-dark",
            UserRole::Teacher => "bg-secondary",
            UserRole::Admin => "bg-primary",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Row of the users list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Identified for User {
    fn id(&self) -> i32 {
        self.id.get()
    }
}

/// Identity of the signed-in session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Payload for registering a user.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewUser {
    pub name: UserName,
    pub email: UserEmail,
    pub role: UserRole,
}

/// Payload for editing a user record.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: UserName,
    pub email: UserEmail,
    pub role: UserRole,
    pub is_active: bool,
}

/// One-time password issued on registration or reset.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryPassword {
    pub temporary_password: String,
}
