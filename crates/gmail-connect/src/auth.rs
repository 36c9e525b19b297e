//! Datastore client construction and bearer token resolution.

use axum::http::{HeaderMap, header};

use crate::client::{ClientRole, SupabaseClient};
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::AuthenticatedUser;

/// Prefix stripped from the `authorization` header value.
const BEARER_PREFIX: &str = "Bearer ";

/// Number of token characters shown in logs.
const TOKEN_LOG_PREFIX: usize = 20;

/// Client with the service role key. Holds no session; callers build one
/// per request.
///
/// # Errors
///
/// Returns a configuration error if the URL or service role key is unset.
pub fn create_service_client(config: &Config) -> ClientResult<SupabaseClient> {
    SupabaseClient::new(config, ClientRole::Service)
}

/// Client with the anonymous public key.
///
/// # Errors
///
/// Returns a configuration error if the URL or anon key is unset.
pub fn create_anon_client(config: &Config) -> ClientResult<SupabaseClient> {
    SupabaseClient::new(config, ClientRole::Anon)
}

/// Token carried by an `authorization` header value.
///
/// A leading `"Bearer "` is stripped; values without it are taken as the
/// token itself. Returns `None` for an empty token.
#[must_use]
pub fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);
    (!token.is_empty()).then_some(token)
}

/// Resolve the request's bearer token into a user.
///
/// Never fails: a missing or empty token, a misconfigured anon client, and
/// a rejected token all yield `None`.
pub async fn get_user_from_request(
    headers: &HeaderMap,
    config: &Config,
) -> Option<AuthenticatedUser> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        tracing::debug!(header = "missing", "No authorization header found");
        return None;
    };

    let Ok(value) = value.to_str() else {
        tracing::debug!(header = "present", "Authorization header is not valid UTF-8");
        return None;
    };

    let Some(token) = bearer_token(value) else {
        tracing::debug!(header = "present", "Token is empty after extraction");
        return None;
    };

    tracing::debug!(
        header = "present",
        token_prefix = %token.chars().take(TOKEN_LOG_PREFIX).collect::<String>(),
        "Token extracted"
    );

    let client = match create_anon_client(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Error getting user from request");
            return None;
        }
    };

    match client.get_user(token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "User authenticated");
            Some(user)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Supabase auth error");
            None
        }
    }
}
