//! `/pc` — the collection page, record add, and record delete.

use axum::{
  Form,
  extract::{Query, State},
  response::{Html, IntoResponse, Response},
};
use pokepc_core::{
  creature::{CreatureId, NewCreature},
  store::CollectionStore,
  user::UserId,
};
use serde::Deserialize;

use crate::{AppState, error::Error, handlers::found, views};

// ─── Collection page ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PageParams {
  #[serde(rename = "ID")]
  pub id:    Option<String>,
  pub error: Option<String>,
}

/// `GET /pc?ID=<userId>` — redirect home unless `ID` is a numeric user id;
/// otherwise render the owner's records sorted by dex.
pub async fn page<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Response, Error>
where
  S: CollectionStore + Clone + Send + Sync + 'static,
{
  let Some(user_id) = params.id.and_then(|raw| raw.parse::<UserId>().ok())
  else {
    return Ok(found("/"));
  };

  let records = state.store.list_by_owner(user_id).await?;
  let html =
    views::collection_page(user_id, &records, params.error.as_deref());
  Ok(Html(html).into_response())
}

// ─── Add record ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddForm {
  #[serde(rename = "userID")]
  pub user_id: Option<String>,
  #[serde(default)]
  pub dex:     String,
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub level:   String,
  #[serde(default)]
  pub type1:   String,
  pub type2:   Option<String>,
}

impl AddForm {
  /// Validate the numeric fields into a store input. The original server
  /// stored `NaN` for unparseable numbers; here they are rejected up
  /// front as an explicit error.
  fn into_new_creature(self, owner: UserId) -> Result<NewCreature, Error> {
    let dex = self
      .dex
      .parse()
      .map_err(|_| Error::BadRequest(format!("dex is not a number: {:?}", self.dex)))?;
    let level = self
      .level
      .parse()
      .map_err(|_| Error::BadRequest(format!("level is not a number: {:?}", self.level)))?;

    Ok(NewCreature {
      dex,
      name: self.name,
      level,
      type1: self.type1,
      // An empty second type on the form means absent.
      type2: self.type2.filter(|t| !t.is_empty()),
      owner,
    })
  }
}

/// `POST /pc` — add a record and redirect back to the owner's page. A
/// missing `userID` bounces to the login page; the owner id is otherwise
/// taken on faith (no existence check).
pub async fn add<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<AddForm>,
) -> Result<Response, Error>
where
  S: CollectionStore + Clone + Send + Sync + 'static,
{
  let Some(raw_id) = form.user_id.clone().filter(|raw| !raw.is_empty())
  else {
    return Ok(found("/?error=Login%20required"));
  };
  let owner: UserId = raw_id.parse().map_err(|_| {
    Error::BadRequest(format!("userID is not a number: {raw_id:?}"))
  })?;

  state.store.add_creature(form.into_new_creature(owner)?).await?;
  Ok(found(&format!("/pc?ID={owner}")))
}

// ─── Delete record ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
  #[serde(rename = "PID")]
  pub pid:     Option<String>,
  #[serde(rename = "userID", default)]
  pub user_id: String,
}

/// `POST /pc/delete` — owner-scoped delete. Always redirects back to the
/// owner's page whatever the outcome; an unparseable `PID` or `userID` is
/// a no-op.
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<DeleteForm>,
) -> Result<Response, Error>
where
  S: CollectionStore + Clone + Send + Sync + 'static,
{
  let pid = form.pid.as_deref().unwrap_or("").parse::<CreatureId>();
  let owner = form.user_id.parse::<UserId>();
  if let (Ok(pid), Ok(owner)) = (pid, owner) {
    state.store.delete_creature(pid, owner).await?;
  }

  Ok(found(&format!("/pc?ID={}", form.user_id)))
}
