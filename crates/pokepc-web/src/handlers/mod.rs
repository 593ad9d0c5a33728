//! Route handlers.
//!
//! Each POST route parses the form body into an explicit request struct
//! before touching the stores. Identity is whatever user id the form or
//! query string carries; there are no sessions.

pub mod login;
pub mod pc;
pub mod signup;

use axum::{
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::Error;

/// Query parameters for the pages that reflect an error message.
#[derive(Debug, Deserialize)]
pub struct ErrorParams {
  pub error: Option<String>,
}

/// Plain 302 redirect. axum's `Redirect` helpers emit 303/307; the login
/// and collection flows use 302.
pub(crate) fn found(location: &str) -> Response {
  (StatusCode::FOUND, [(header::LOCATION, location.to_string())])
    .into_response()
}

/// Fallback for unmatched method+path combinations.
pub async fn not_found() -> Error {
  Error::NotFound
}
