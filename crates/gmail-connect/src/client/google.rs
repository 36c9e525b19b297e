//! Google OAuth client for Gmail access.

use reqwest::Client;

use super::{build_http_client, handle_response};
use crate::config::{Config, GoogleCredentials, api};
use crate::error::{ClientError, ClientResult, ConfigError};
use crate::models::TokenResponse;

/// Google OAuth 2.0 web-server flow client.
#[derive(Clone)]
pub struct GoogleOAuthClient {
    client: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
}

impl GoogleOAuthClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the Google credentials are not configured.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let GoogleCredentials { client_id, client_secret, redirect_uri } =
            config.google_credentials()?;

        Ok(Self {
            client: build_http_client(config)?,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: redirect_uri.to_string(),
            auth_url: config.google_auth_url.clone(),
            token_url: config.google_token_url.clone(),
        })
    }

    /// Consent screen URL carrying `state` back to the callback.
    ///
    /// Requests offline access and forces the consent prompt so Google
    /// issues a refresh token.
    ///
    /// # Errors
    ///
    /// Returns error if the configured auth URL is not a valid URL.
    pub fn authorization_url(&self, state: &str) -> ClientResult<String> {
        let scope = api::GMAIL_SCOPES.join(" ");
        let url = url::Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("access_type", "offline"),
                ("prompt", "consent"),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|source| ConfigError::InvalidUrl { name: "google_auth_url", source })?;

        Ok(url.into())
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Exchange an authorization code for tokens.
    ///
    /// A 2xx reply with an empty or `null` body yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx response (for example
    /// `invalid_grant` on a reused code), or an unparseable body.
    pub async fn exchange_code(&self, code: &str) -> ClientResult<Option<TokenResponse>> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.client.post(&self.token_url).form(&params).send().await?;
        let response = handle_response("Google", response).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for GoogleOAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthClient")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}
