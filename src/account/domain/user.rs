//! User records as returned by the remote user API.

use super::UserId;
use serde::{Deserialize, Serialize};

/// User record held in the session and listed by the directory.
///
/// Read-only from this crate's perspective; the remote API is the source
/// of truth for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Login name, unique on the remote side.
    pub username: String,
    /// Contact email address.
    pub email: String,
}
