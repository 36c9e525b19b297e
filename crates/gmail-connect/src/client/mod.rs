//! Outbound HTTP clients.
//!
//! - [`SupabaseClient`]: PostgREST table updates and GoTrue user lookup
//! - [`GoogleOAuthClient`]: consent URL and authorization code exchange
//!
//! Clients are cheap to build and hold no session state; every request
//! constructs the one it needs. Nothing here retries.

mod google;

use reqwest::Client;
use serde::Serialize;

use crate::config::{Config, SupabaseCredentials};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthenticatedUser, GmailConnectionUpdate, PROFILES_TABLE};

pub use google::GoogleOAuthClient;

/// Privilege level a [`SupabaseClient`] authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRole {
    /// Service role key: bypasses row level security, backend only.
    Service,
    /// Anonymous public key: subject to row level security.
    Anon,
}

/// Supabase REST client.
#[derive(Clone)]
pub struct SupabaseClient {
    /// HTTP client.
    client: Client,

    /// Project URL without trailing slash.
    base_url: String,

    /// Key sent as `apikey` (and as bearer for table access).
    api_key: String,

    role: ClientRole,
}

impl SupabaseClient {
    /// Create a client for the given role.
    ///
    /// # Errors
    ///
    /// Returns error if the role's credentials are not configured or the
    /// HTTP client fails to initialize.
    pub fn new(config: &Config, role: ClientRole) -> ClientResult<Self> {
        let SupabaseCredentials { url, key } = match role {
            ClientRole::Service => config.service_credentials()?,
            ClientRole::Anon => config.anon_credentials()?,
        };

        Ok(Self {
            client: build_http_client(config)?,
            base_url: url.trim_end_matches('/').to_string(),
            api_key: key.to_string(),
            role,
        })
    }

    /// Role this client authenticates as.
    #[must_use]
    pub const fn role(&self) -> ClientRole {
        self.role
    }

    /// `UPDATE {table} SET {body} WHERE {column} = {value}`.
    ///
    /// Matching no rows is not an error.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx PostgREST response.
    pub async fn update_eq<T>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        body: &T,
    ) -> ClientResult<()>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let filter = format!("eq.{value}");

        let response = self
            .client
            .patch(&url)
            .query(&[(column, filter.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;

        handle_response("Supabase", response).await?;
        Ok(())
    }

    /// Store a Gmail connection on the profile row `id = user_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the update is rejected.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &GmailConnectionUpdate,
    ) -> ClientResult<()> {
        self.update_eq(PROFILES_TABLE, "id", user_id, update).await
    }

    /// Resolve an access token into the user it was issued to.
    ///
    /// # Errors
    ///
    /// Returns error if the token is rejected or the response is malformed.
    pub async fn get_user(&self, access_token: &str) -> ClientResult<AuthenticatedUser> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let response = handle_response("Supabase auth", response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("role", &self.role)
            .finish()
    }
}

/// Build the shared HTTP client settings for outbound calls.
fn build_http_client(config: &Config) -> ClientResult<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .build()
        .map_err(ClientError::from)
}

/// Map non-success status codes to [`ClientError::Api`].
async fn handle_response(
    service: &'static str,
    response: reqwest::Response,
) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::api(service, status.as_u16(), error_message(&text)))
}

/// Pull a human-readable message out of a JSON error body.
///
/// PostgREST uses `message`, GoTrue uses `msg` or `error_description`, and
/// Google uses `error_description` / `error`. Falls back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
