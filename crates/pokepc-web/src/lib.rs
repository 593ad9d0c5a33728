//! HTTP layer for the Pokemon PC collection server.
//!
//! Exposes an axum [`Router`] implementing the login, signup, and
//! collection flows, backed by any credential + collection store.

pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use pokepc_core::store::{CollectionStore, CredentialStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{login, pc, signup};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` or
/// `POKEPC_`-prefixed environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the application.
///
/// Unmatched method+path combinations fall through to the 404 page; there
/// is no method-not-allowed distinction.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CredentialStore + CollectionStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(login::page).post(login::submit::<S>))
    .route("/signup", get(signup::page).post(signup::submit::<S>))
    .route("/pc", get(pc::page::<S>).post(pc::add::<S>))
    .route("/pc/delete", post(pc::delete::<S>))
    .fallback(handlers::not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
