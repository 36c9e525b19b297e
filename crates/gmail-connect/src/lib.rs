//! Gmail Connect Backend
//!
//! Backend slice for the Found Money app's "Connect Gmail" feature: the
//! Google OAuth redirect callback plus helpers for building Supabase clients
//! and resolving bearer tokens into users.
//!
//! # Example
//!
//! ```no_run
//! use gmail_connect::{config::Config, server::GmailConnectServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     GmailConnectServer::new(config).run_http(3000).await
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use client::{GoogleOAuthClient, SupabaseClient};
pub use config::Config;
pub use error::{CallbackError, ClientError, ConfigError, StateError};
