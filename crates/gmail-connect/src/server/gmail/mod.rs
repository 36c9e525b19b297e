//! Gmail connection flow for the mobile app.
//!
//! 1. `GET /api/gmail/connect`: authenticated app user receives a Google
//!    consent URL whose `state` is `base64({"userId": ...})`.
//! 2. `GET /api/gmail/callback`: Google redirects here with `code` and
//!    `state`; tokens are exchanged and stored on the user's profile, and an
//!    HTML page deep-links back into the app.

pub mod handlers;
pub mod pages;
pub mod state;
