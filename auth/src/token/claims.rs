use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::errors::RoleParseError;

/// Subject role carried inside a token.
///
/// Closed set: there are exactly two roles in this system. Authorization
/// decisions match on the variant, never on free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Standard,
}

impl Role {
    /// Get the role as its canonical string form.
    ///
    /// # Returns
    /// "admin" or "standard"
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Standard => "standard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "standard" => Ok(Role::Standard),
            other => Err(RoleParseError::UnknownRole(other.to_string())),
        }
    }
}

/// Verified token claims.
///
/// Signature is computed over all four fields; a `Claims` value only ever
/// reaches application code after `TokenService::verify` has checked it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Subject role at issuance time
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check whether the claims are expired at the given instant.
    ///
    /// # Arguments
    /// * `current_timestamp` - Unix timestamp to evaluate against
    ///
    /// # Returns
    /// True if the expiry lies strictly before the given instant
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
