/// User domain types
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, a closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account (the default)
    #[default]
    User,
    /// Administrative account
    Admin,
    /// Moderation account
    Moderator,
}

impl Role {
    /// Parse a role from its wire form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            _ => None,
        }
    }

    /// Wire form of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }
}

/// User record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, immutable after creation
    pub id: UserId,

    /// Normalized email address, unique among live records
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh identity and both timestamps
    /// set to the same instant
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            email: email.into(),
            name: name.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated payload for creating a user
///
/// Produced only by [`crate::validation::validate_create`]; the email is
/// normalized and the name trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Normalized email address
    pub email: String,

    /// Trimmed display name
    pub name: String,

    /// Requested role; the store defaults it to [`Role::User`] when absent
    pub role: Option<Role>,
}

/// Validated payload for updating a user
///
/// Produced only by [`crate::validation::validate_update`]. Email and name
/// replace the stored values outright; the role falls back to the stored
/// value when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    /// Normalized email address
    pub email: String,

    /// Trimmed display name
    pub name: String,

    /// Replacement role, or `None` to keep the stored one
    pub role: Option<Role>,
}
