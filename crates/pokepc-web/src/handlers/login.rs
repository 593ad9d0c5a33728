//! `GET /` and `POST /` — the login page and form.

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

/// `GET /` — render the login form, reflecting any `error` query text.
pub async fn page(Query(params): Query<ErrorParams>) -> Html<String> {
  Html(views::login_page(params.error.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
  #[serde(default)]
  pub user:     String,
  #[serde(default)]
  pub password: String,
}

/// `POST /` — authenticate and redirect to the owner's collection page,
/// or back to the login form with the error message.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<LoginForm>,
) -> Result<Response, Error>
where
  S: CredentialStore + Clone + Send + Sync + 'static,
{
  match state.store.authenticate(&form.user, &form.password).await {
    Ok(user) => Ok(found(&format!("/pc?ID={}", user.id))),
    Err(pokepc_core::Error::InvalidCredentials) => {
      Ok(found("/?error=Invalid%20credentials"))
    }
    Err(e) => Err(Error::Store(e)),
  }
}
