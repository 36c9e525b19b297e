//! Property-based tests for OAuth state decoding.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use proptest::prelude::*;

use gmail_connect::models::{CallbackQuery, StatePayload};
use gmail_connect::server::gmail::state::{decode_state, encode_state};

proptest! {
    /// Decoding never panics, whatever arrives in the query string.
    #[test]
    fn decode_arbitrary_input_never_panics(input in ".{0,200}") {
        let _ = decode_state(Some(input.as_str()));
    }

    /// Encoded payloads decode back to the same user.
    #[test]
    fn encoded_state_roundtrip(user_id in "[A-Za-z0-9_-]{1,64}") {
        let payload = StatePayload { user_id };
        prop_assert_eq!(decode_state(Some(encode_state(&payload).as_str())).unwrap(), payload);
    }

    /// URL-safe unpadded encodings from other clients are accepted.
    #[test]
    fn url_safe_state_accepted(user_id in "\\PC{1,40}") {
        let json = serde_json::json!({ "userId": user_id }).to_string();
        let state = URL_SAFE_NO_PAD.encode(json);
        prop_assert_eq!(decode_state(Some(state.as_str())).unwrap().user_id, user_id);
    }

    /// A state that survives query-string encoding decodes the same.
    #[test]
    fn state_survives_query_string(user_id in "[a-z0-9-]{1,36}") {
        let state = STANDARD.encode(serde_json::json!({ "userId": user_id }).to_string());
        let raw = serde_urlencoded::to_string([("code", "c"), ("state", state.as_str())]).unwrap();

        let query = CallbackQuery::from_query(Some(raw.as_str()));
        prop_assert_eq!(decode_state(query.state.as_deref()).unwrap().user_id, user_id);
    }
}
