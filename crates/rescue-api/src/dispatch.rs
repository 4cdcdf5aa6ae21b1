//! Method-based routing of animal requests onto [`AnimalStore`] operations.
//!
//! | Method   | Id   | Operation |
//! |----------|------|-----------|
//! | `GET`    | yes  | get one |
//! | `GET`    | no   | list all |
//! | `POST`   | any  | create from body (the id is ignored) |
//! | `PATCH`  | yes  | replace from body |
//! | `DELETE` | yes  | delete |
//!
//! `PATCH` is a full replace: every attribute is overwritten, and optional
//! attributes missing from the body are cleared. It is not a merge-patch.
//!
//! An id that is present but not an integer is rejected before the store is
//! touched, as is a `PATCH` or `DELETE` without an id.

use axum::{http::Method, response::Response};
use bytes::Bytes;
use rescue_core::{AnimalId, AnimalStore};

use crate::{
  codec::decode_animal,
  error::{ApiError, Operation},
  response::{Outcome, render},
};

/// A transport-independent animal request.
#[derive(Debug, Clone)]
pub struct AnimalRequest {
  pub method: Method,
  /// The raw `{id}` path segment, if the path had one.
  pub id:     Option<String>,
  pub body:   Option<Bytes>,
}

/// Route `request` to the store and render the outcome.
pub async fn dispatch<S: AnimalStore>(
  store: &S,
  request: AnimalRequest,
) -> Response {
  render(route(store, request).await)
}

async fn route<S: AnimalStore>(
  store: &S,
  request: AnimalRequest,
) -> Result<Outcome, ApiError> {
  let AnimalRequest { method, id, body } = request;
  let id = id.as_deref();
  let body = body.as_deref();

  match method.as_str() {
    "GET" => match parse_id(id)? {
      Some(id) => store
        .get_animal(id)
        .await
        .map(Outcome::Fetched)
        .map_err(ApiError::store(Operation::Get)),
      None => store
        .list_animals()
        .await
        .map(Outcome::Listed)
        .map_err(ApiError::store(Operation::List)),
    },
    "POST" => {
      let input = decode_animal(body)?;
      store
        .create_animal(input)
        .await
        .map(Outcome::Created)
        .map_err(ApiError::store(Operation::Create))
    }
    "PATCH" => {
      let id = require_id(&method, id)?;
      let input = decode_animal(body)?;
      store
        .replace_animal(id, input)
        .await
        .map(Outcome::Replaced)
        .map_err(ApiError::store(Operation::Replace))
    }
    "DELETE" => {
      let id = require_id(&method, id)?;
      store
        .delete_animal(id)
        .await
        .map(|()| Outcome::Deleted)
        .map_err(ApiError::store(Operation::Delete))
    }
    _ => Err(ApiError::MethodNotAllowed(method)),
  }
}

/// Parse the path id, if there is one.
fn parse_id(raw: Option<&str>) -> Result<Option<AnimalId>, ApiError> {
  raw
    .map(|s| s.parse().map_err(|_| ApiError::InvalidId(s.to_owned())))
    .transpose()
}

fn require_id(method: &Method, raw: Option<&str>) -> Result<AnimalId, ApiError> {
  parse_id(raw)?.ok_or_else(|| ApiError::MissingId(method.clone()))
}
