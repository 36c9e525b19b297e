//! Gmail connection endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::pages::{error_page, success_page};
use super::state::{decode_state, encode_state};
use crate::auth::{create_service_client, get_user_from_request};
use crate::client::GoogleOAuthClient;
use crate::config::Config;
use crate::error::{CallbackError, CallbackResult};
use crate::models::{CallbackQuery, GmailConnectionUpdate, StatePayload, TokenResponse};
use crate::server::transport::HttpState;

// ─── OAuth Callback ──────────────────────────────────────────────────────────

/// `GET /api/gmail/callback?code=..&state=..`
///
/// Finishes the Google consent flow and always answers with an HTML page
/// that deep-links back into the app.
pub async fn handle_gmail_callback(
    State(state): State<Arc<HttpState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = CallbackQuery::from_query(raw.as_deref());

    match connect_gmail(&state.config, query).await {
        Ok(user_id) => {
            tracing::info!(user_id = %user_id, "Gmail connected");
            html_response(StatusCode::OK, success_page())
        }
        Err(e) => e.into_response(),
    }
}

/// Run the callback steps in order; the first failure ends the flow.
async fn connect_gmail(config: &Config, query: CallbackQuery) -> CallbackResult<String> {
    let code = query.code.filter(|c| !c.is_empty()).ok_or(CallbackError::MissingCode)?;

    let StatePayload { user_id } = decode_state(query.state.as_deref())?;

    let google = GoogleOAuthClient::new(config).map_err(CallbackError::Unexpected)?;
    let tokens = google.exchange_code(&code).await.map_err(CallbackError::Unexpected)?;

    let Some(access_token) = tokens.as_ref().and_then(TokenResponse::access_token) else {
        return Err(CallbackError::MissingAccessToken);
    };

    let update = GmailConnectionUpdate::connected(
        access_token,
        tokens.as_ref().and_then(|t| t.refresh_token.clone()),
        chrono::Utc::now(),
    );

    let supabase = create_service_client(config).map_err(CallbackError::Unexpected)?;
    supabase.update_profile(&user_id, &update).await.map_err(CallbackError::Persistence)?;

    Ok(user_id)
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::InvalidState(e) => {
                tracing::warn!(kind = e.kind(), error = %self, "Error parsing state");
            }
            Self::Persistence(e) | Self::Unexpected(e) => {
                tracing::error!(upstream_status = ?e.status(), error = %self, "Gmail callback failed");
            }
            _ => tracing::warn!(error = %self, "Gmail callback rejected"),
        }

        html_response(status, error_page(self.user_message()))
    }
}

/// Build a `text/html` response.
pub fn html_response(status: StatusCode, body: String) -> Response {
    let mut response = (status, body).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    response
}

// ─── Consent URL ─────────────────────────────────────────────────────────────

/// `GET /api/gmail/connect`
///
/// Returns the Google consent URL for the authenticated caller. The URL's
/// `state` carries the caller's user id to the callback.
pub async fn handle_gmail_connect(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
) -> Response {
    let Some(user) = get_user_from_request(&headers, &state.config).await else {
        return (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "Unauthorized" })))
            .into_response();
    };

    let oauth_state = encode_state(&StatePayload { user_id: user.id.clone() });

    let auth_url = GoogleOAuthClient::new(&state.config)
        .and_then(|google| google.authorization_url(&oauth_state));

    match auth_url {
        Ok(auth_url) => {
            tracing::info!(user_id = %user.id, "Issued Gmail consent URL");
            Json(serde_json::json!({ "authUrl": auth_url })).into_response()
        }
        Err(e) => {
            tracing::error!(user_id = %user.id, error = %e, "Failed to build Gmail consent URL");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Gmail connection is not configured" })),
            )
                .into_response()
        }
    }
}
