//! Writes against the remote `profiles` table.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Table holding one row per app user.
pub const PROFILES_TABLE: &str = "profiles";

/// Fields updated on a profile row when Gmail is connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GmailConnectionUpdate {
    pub gmail_connected: bool,

    pub gmail_access_token: String,

    /// Left out of the payload when the provider issued none, so an earlier
    /// refresh token stays in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmail_refresh_token: Option<String>,

    /// ISO-8601 UTC with millisecond precision.
    pub updated_at: String,
}

impl GmailConnectionUpdate {
    /// Build the update for a freshly exchanged token pair.
    #[must_use]
    pub fn connected(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            gmail_connected: true,
            gmail_access_token: access_token.into(),
            gmail_refresh_token: refresh_token,
            updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_payload_shape() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let update = GmailConnectionUpdate::connected("tok", Some("ref".to_string()), now);

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "gmail_connected": true,
                "gmail_access_token": "tok",
                "gmail_refresh_token": "ref",
                "updated_at": "2026-10-19T08:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_update_omits_absent_refresh_token() {
        let update = GmailConnectionUpdate::connected("tok", None, Utc::now());
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("gmail_refresh_token").is_none());
    }
}
