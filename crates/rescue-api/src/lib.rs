//! HTTP front end for the animal rescue records service.
//!
//! Exposes an axum [`Router`] backed by any [`AnimalStore`]. Every method on
//! `/animals` and `/animals/{id}` is handed to [`dispatch`], so unsupported
//! methods are answered by the dispatcher rather than by axum.
//!
//! | Method   | Path            | Success |
//! |----------|-----------------|---------|
//! | `GET`    | `/animals`      | 200 + list |
//! | `GET`    | `/animals/{id}` | 200 + animal |
//! | `POST`   | `/animals`      | 201 + animal with its new id |
//! | `PATCH`  | `/animals/{id}` | 200 + animal (full replace) |
//! | `DELETE` | `/animals/{id}` | 204 |
//! | `GET`    | `/health`       | 200 + `{"caller":...,"status":"ok","database":...}` |

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod health;
pub mod response;

pub use config::ServerConfig;
pub use dispatch::{AnimalRequest, dispatch};
pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  extract::{Path, Request, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{any, get},
};
use bytes::Bytes;
use rescue_core::AnimalStore;

const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the service router for `store`.
///
/// The store is created once at startup and shared by every request.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: AnimalStore + 'static,
{
  Router::new()
    .route("/animals", any(collection_handler::<S>))
    .route("/animals/{id}", any(item_handler::<S>))
    .route("/health", get(health::handler::<S>))
    .with_state(store)
}

// ─── Route handlers ──────────────────────────────────────────────────────────

async fn collection_handler<S>(
  State(store): State<Arc<S>>,
  req: Request<Body>,
) -> Response
where
  S: AnimalStore + 'static,
{
  handle(store.as_ref(), None, req).await
}

async fn item_handler<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  req: Request<Body>,
) -> Response
where
  S: AnimalStore + 'static,
{
  handle(store.as_ref(), Some(id), req).await
}

async fn handle<S: AnimalStore>(
  store: &S,
  id: Option<String>,
  req: Request<Body>,
) -> Response {
  let method = req.method().clone();
  let body = match collect_body(req).await {
    Ok(b) => b,
    Err(e) => return e,
  };
  let body = (!body.is_empty()).then_some(body);

  dispatch(store, AnimalRequest { method, id, body }).await
}

async fn collect_body(req: Request<Body>) -> Result<Bytes, Response> {
  axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
    .await
    .map_err(|_| {
      (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response()
    })
}

// ─── Integration tests ────────────────────────────────────────────────────────
