//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[from] pokepc_core::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => {
        (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
      }
      Error::BadRequest(message) => (
        StatusCode::BAD_REQUEST,
        Html(views::bad_request_page(&message)),
      )
        .into_response(),
      Error::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::server_error_page(&e.to_string())),
      )
        .into_response(),
    }
  }
}
