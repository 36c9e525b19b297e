//! Encoding of the OAuth `state` parameter.
//!
//! The app sends `base64(JSON)` of a [`StatePayload`]. Decoding accepts the
//! standard and URL-safe alphabets with or without padding.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::StateError;
use crate::models::StatePayload;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode a payload for the `state` parameter.
#[must_use]
pub fn encode_state(payload: &StatePayload) -> String {
    // Serializing a struct of strings cannot fail.
    let json = serde_json::to_vec(payload).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decode the `state` parameter into the initiating user.
///
/// A `+` that arrived unescaped in the query string reads back as a space;
/// it is restored before decoding.
pub fn decode_state(state: Option<&str>) -> Result<StatePayload, StateError> {
    let state = state.map(str::trim).filter(|s| !s.is_empty()).ok_or(StateError::Missing)?;

    let normalized: String = state
        .chars()
        .map(|c| match c {
            ' ' | '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = LENIENT.decode(normalized)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;

    value
        .get("userId")
        .and_then(|v| v.as_str())
        .filter(|id| !id.is_empty())
        .map(|id| StatePayload { user_id: id.to_string() })
        .ok_or(StateError::MissingUserId)
}
