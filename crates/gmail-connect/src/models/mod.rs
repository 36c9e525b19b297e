//! Data models for the Gmail connect flow.
//!
//! Wire names follow the remote services: `snake_case` for Google and the
//! `profiles` table, `camelCase` for the app-produced state payload.

mod oauth;
mod profile;
mod user;

pub use oauth::{CallbackQuery, StatePayload, TokenResponse};
pub use profile::{GmailConnectionUpdate, PROFILES_TABLE};
pub use user::AuthenticatedUser;
