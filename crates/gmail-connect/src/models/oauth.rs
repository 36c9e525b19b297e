//! OAuth callback and token exchange models.

use serde::{Deserialize, Serialize};

/// Query parameters of the provider redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    /// Authorization code.
    pub code: Option<String>,

    /// Base64-encoded JSON [`StatePayload`].
    pub state: Option<String>,
}

impl CallbackQuery {
    /// Parse a raw query string. The first occurrence of a repeated key wins.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "code" if query.code.is_none() => query.code = Some(value.into_owned()),
                "state" if query.state.is_none() => query.state = Some(value.into_owned()),
                _ => {}
            }
        }

        query
    }
}

/// Caller context round-tripped through the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePayload {
    /// App user who started the connection flow.
    pub user_id: String,
}

/// Google token endpoint response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    /// Only issued on first consent or with `prompt=consent`.
    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub id_token: Option<String>,
}

impl TokenResponse {
    /// Access token, if present and non-empty.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
