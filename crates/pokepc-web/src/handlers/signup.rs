//! `GET /signup` and `POST /signup` — account creation.

use axum::{
  Form,
  extract::{Query, State},
  response::{Html, Response},
};
use pokepc_core::store::CredentialStore;
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  handlers::{ErrorParams, found},
  views,
};

/// `GET /signup` — render the signup form, reflecting any `error` query
/// text.
pub async fn page(Query(params): Query<ErrorParams>) -> Html<String> {
  Html(views::signup_page(params.error.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
  #[serde(default)]
  pub user:     String,
  #[serde(default)]
  pub password: String,
}

/// `POST /signup` — register and redirect to the login page, or back to
/// the signup form when the username is taken.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<SignupForm>,
) -> Result<Response, Error>
where
  S: CredentialStore + Clone + Send + Sync + 'static,
{
  match state.store.register(&form.user, &form.password).await {
    Ok(_) => Ok(found("/")),
    Err(pokepc_core::Error::DuplicateUsername(_)) => {
      Ok(found("/signup?error=Username%20already%20exists"))
    }
    Err(e) => Err(Error::Store(e)),
  }
}
