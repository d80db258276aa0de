//! Session token payload.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of identity a token was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims embedded in every session token.
///
/// - `sub`: owner or staff id
/// - `role`: which table `sub` lives in
/// - `iat` / `exp`: Unix timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    /// Claims issued now and expiring `ttl_seconds` from now.
    pub fn new(sub: Uuid, role: Role, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub,
            role,
            iat: now.max(0) as usize,
            exp: (now + ttl_seconds).max(0) as usize,
        }
    }
}
