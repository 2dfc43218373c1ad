// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audience keys for channel routing
//!
//! An audience is either a whole role (every kitchen display shows the same
//! feed) or one specific user within a role (a courier's own assignments).
//! Each distinct audience owns exactly one channel in the bus.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Kitchen,
    Courier,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Kitchen => "kitchen",
            Role::Courier => "courier",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "kitchen" => Ok(Role::Kitchen),
            "courier" => Ok(Role::Courier),
            "customer" => Ok(Role::Customer),
            other => Err(ParseError::UnknownRole(other.to_string())),
        }
    }
}

/// Unique identifier for a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named recipient scope, the key of one bus channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    /// Every user holding the role
    Role(Role),
    /// One specific user within a role
    User(Role, UserId),
}

impl Audience {
    pub fn admins() -> Self {
        Audience::Role(Role::Admin)
    }

    pub fn kitchen() -> Self {
        Audience::Role(Role::Kitchen)
    }

    pub fn couriers() -> Self {
        Audience::Role(Role::Courier)
    }

    pub fn customers() -> Self {
        Audience::Role(Role::Customer)
    }

    pub fn courier(id: UserId) -> Self {
        Audience::User(Role::Courier, id)
    }

    pub fn customer(id: UserId) -> Self {
        Audience::User(Role::Customer, id)
    }

    /// The role this audience belongs to
    pub fn role(&self) -> Role {
        match self {
            Audience::Role(role) | Audience::User(role, _) => *role,
        }
    }

    /// The targeted user, if this audience is user-specific
    pub fn user(&self) -> Option<UserId> {
        match self {
            Audience::Role(_) => None,
            Audience::User(_, user) => Some(*user),
        }
    }

    /// True for role-wide channels, which are never reclaimed
    pub fn is_role_wide(&self) -> bool {
        matches!(self, Audience::Role(_))
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Role(role) => write!(f, "{role}"),
            Audience::User(role, user) => write!(f, "{role}/{user}"),
        }
    }
}

#[cfg(test)]
#[path = "audience_tests.rs"]
mod tests;
