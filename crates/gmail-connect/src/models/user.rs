//! Authenticated user returned by the datastore identity service.

use serde::{Deserialize, Serialize};

/// Identity resolved from a bearer token.
///
/// Only `id` is relied upon; every other field is kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
