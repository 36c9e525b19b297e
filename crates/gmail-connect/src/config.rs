//! Configuration for the Gmail connect backend.
//!
//! Values are read once from the environment at startup. Required pairs are
//! only validated when a client is constructed, so a process with partial
//! configuration still starts and serves the routes it can.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// External endpoint constants.
pub mod api {
    use std::time::Duration;

    /// Google OAuth consent screen.
    pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

    /// Google OAuth token endpoint.
    pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

    /// Scopes requested when connecting Gmail.
    pub const GMAIL_SCOPES: &[&str] = &[
        "https://www.googleapis.com/auth/gmail.readonly",
        "https://www.googleapis.com/auth/userinfo.email",
    ];

    /// Request timeout for outbound calls.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout for outbound calls.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Environment variable names.
pub mod vars {
    pub const SUPABASE_URL: &str = "NEXT_PUBLIC_SUPABASE_URL";
    pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
    pub const SUPABASE_ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
    pub const GOOGLE_REDIRECT_URI: &str = "GOOGLE_REDIRECT_URI";
}

/// Supabase URL and the key for one privilege level.
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseCredentials<'a> {
    pub url: &'a str,
    pub key: &'a str,
}

/// Google OAuth application credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct GoogleCredentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Supabase project URL.
    pub supabase_url: Option<String>,

    /// Service role key (elevated, backend only).
    pub supabase_service_role_key: Option<String>,

    /// Anonymous public key.
    pub supabase_anon_key: Option<String>,

    /// Google OAuth client ID.
    pub google_client_id: Option<String>,

    /// Google OAuth client secret.
    pub google_client_secret: Option<String>,

    /// Redirect URI registered with Google (points at the callback route).
    pub google_redirect_uri: Option<String>,

    /// Consent screen URL (overridable for mock servers).
    pub google_auth_url: String,

    /// Token endpoint URL (overridable for mock servers).
    pub google_token_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create an empty configuration with default endpoints and timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            supabase_url: None,
            supabase_service_role_key: None,
            supabase_anon_key: None,
            google_client_id: None,
            google_client_secret: None,
            google_redirect_uri: None,
            google_auth_url: api::GOOGLE_AUTH_URL.to_string(),
            google_token_url: api::GOOGLE_TOKEN_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as absent.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            supabase_url: get(vars::SUPABASE_URL),
            supabase_service_role_key: get(vars::SUPABASE_SERVICE_ROLE_KEY),
            supabase_anon_key: get(vars::SUPABASE_ANON_KEY),
            google_client_id: get(vars::GOOGLE_CLIENT_ID),
            google_client_secret: get(vars::GOOGLE_CLIENT_SECRET),
            google_redirect_uri: get(vars::GOOGLE_REDIRECT_URI),
            ..Self::new()
        }
    }

    /// Create a fully populated configuration pointing every external
    /// service at one mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            supabase_url: Some(base_url.to_string()),
            supabase_service_role_key: Some("test-service-role-key".to_string()),
            supabase_anon_key: Some("test-anon-key".to_string()),
            google_client_id: Some("test-client-id".to_string()),
            google_client_secret: Some("test-client-secret".to_string()),
            google_redirect_uri: Some(format!("{base_url}/api/gmail/callback")),
            google_auth_url: format!("{base_url}/o/oauth2/v2/auth"),
            google_token_url: format!("{base_url}/token"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Supabase credentials for the service role.
    pub fn service_credentials(&self) -> Result<SupabaseCredentials<'_>, ConfigError> {
        match (self.supabase_url.as_deref(), self.supabase_service_role_key.as_deref()) {
            (Some(url), Some(key)) => Ok(SupabaseCredentials { url, key }),
            (url, key) => Err(ConfigError::missing(
                "Supabase",
                [(vars::SUPABASE_URL, url.is_none()), (vars::SUPABASE_SERVICE_ROLE_KEY, key.is_none())],
            )),
        }
    }

    /// Supabase credentials for the anonymous role.
    pub fn anon_credentials(&self) -> Result<SupabaseCredentials<'_>, ConfigError> {
        match (self.supabase_url.as_deref(), self.supabase_anon_key.as_deref()) {
            (Some(url), Some(key)) => Ok(SupabaseCredentials { url, key }),
            (url, key) => Err(ConfigError::missing(
                "Supabase",
                [(vars::SUPABASE_URL, url.is_none()), (vars::SUPABASE_ANON_KEY, key.is_none())],
            )),
        }
    }

    /// Google OAuth application credentials.
    pub fn google_credentials(&self) -> Result<GoogleCredentials<'_>, ConfigError> {
        match (
            self.google_client_id.as_deref(),
            self.google_client_secret.as_deref(),
            self.google_redirect_uri.as_deref(),
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => {
                Ok(GoogleCredentials { client_id, client_secret, redirect_uri })
            }
            (id, secret, redirect) => Err(ConfigError::missing(
                "Google OAuth",
                [
                    (vars::GOOGLE_CLIENT_ID, id.is_none()),
                    (vars::GOOGLE_CLIENT_SECRET, secret.is_none()),
                    (vars::GOOGLE_REDIRECT_URI, redirect.is_none()),
                ],
            )),
        }
    }

    /// Names of all unset variables, for startup diagnostics.
    #[must_use]
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            (vars::SUPABASE_URL, self.supabase_url.is_none()),
            (vars::SUPABASE_SERVICE_ROLE_KEY, self.supabase_service_role_key.is_none()),
            (vars::SUPABASE_ANON_KEY, self.supabase_anon_key.is_none()),
            (vars::GOOGLE_CLIENT_ID, self.google_client_id.is_none()),
            (vars::GOOGLE_CLIENT_SECRET, self.google_client_secret.is_none()),
            (vars::GOOGLE_REDIRECT_URI, self.google_redirect_uri.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("has_service_role_key", &self.supabase_service_role_key.is_some())
            .field("has_anon_key", &self.supabase_anon_key.is_some())
            .field("google_client_id", &self.google_client_id)
            .field("has_google_client_secret", &self.google_client_secret.is_some())
            .field("google_redirect_uri", &self.google_redirect_uri)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl fmt::Debug for SupabaseCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseCredentials").field("url", &self.url).finish_non_exhaustive()
    }
}

impl fmt::Debug for GoogleCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleCredentials")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish_non_exhaustive()
    }
}
