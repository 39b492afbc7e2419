//! Caller identity for the hours engine API.
//!
//! Authentication happens upstream; the authenticated user id and role are
//! forwarded in request headers and read here.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::response::ApiErrorResponse;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the authenticated user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The two fixed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May act on any user's records.
    Admin,
    /// May only act on their own records.
    Member,
}

impl Role {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "member" => Some(Role::Member),
            _ => None,
        }
    }
}

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// The caller's own user id.
    pub user_id: u64,
    /// The caller's role.
    pub role: Role,
}

impl Caller {
    /// Reads the caller from the identity headers.
    ///
    /// A missing or malformed user id yields 401; an unknown role yields 403.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiErrorResponse> {
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| parse_user_id(value).ok())
            .ok_or_else(|| ApiErrorResponse::unauthenticated("Missing or invalid caller identity"))?;

        let role = headers
            .get(USER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiErrorResponse::unauthenticated("Missing caller role"))?;
        let role = Role::parse(role)
            .ok_or_else(|| ApiErrorResponse::forbidden(format!("Role '{}' is not allowed", role)))?;

        Ok(Self { user_id, role })
    }

    /// Decides whose records a request is about.
    ///
    /// Admins must name the target user; members always get their own id and
    /// any requested id is ignored.
    pub fn target_user(&self, requested: Option<&str>) -> EngineResult<u64> {
        match self.role {
            Role::Member => Ok(self.user_id),
            Role::Admin => parse_user_id(requested.unwrap_or_default()),
        }
    }
}

/// Parses a user id made only of ASCII digits.
pub fn parse_user_id(value: &str) -> EngineResult<u64> {
    let invalid = || EngineError::InvalidUserId {
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
