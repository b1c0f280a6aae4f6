//! Role model.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Actor role, immutable once assigned to a session.
///
/// Serialized form matches the backend's `user_type` strings
/// (`"merchant"`, `"admin"`, `"clerk"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Business owner: manages stores, products, admin accounts, reports.
    Merchant,
    /// Store administrator: manages clerks, approves supply requests,
    /// settles payment status.
    Admin,
    /// Store clerk: records inventory, transactions, supply requests.
    Clerk,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Merchant, Role::Admin, Role::Clerk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Merchant => "merchant",
            Role::Admin => "admin",
            Role::Clerk => "clerk",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merchant" => Ok(Role::Merchant),
            "admin" => Ok(Role::Admin),
            "clerk" => Ok(Role::Clerk),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
