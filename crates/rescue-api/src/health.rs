//! Handler for `GET /health`.
//!
//! Always answers 200 while the process is up; the `database` field reports
//! whether a trivial query against the store succeeded. `caller` is the peer
//! address when the server was started with connect info.

use std::{net::SocketAddr, sync::Arc};

use axum::{
  Json,
  body::Body,
  extract::{ConnectInfo, Request, State},
};
use rescue_core::AnimalStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caller:   Option<String>,
  pub status:   &'static str,
  /// `"ok"` or `"not_connected"`.
  pub database: &'static str,
}

/// `GET /health`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  req: Request<Body>,
) -> Json<HealthReport>
where
  S: AnimalStore,
{
  let caller = req
    .extensions()
    .get::<ConnectInfo<SocketAddr>>()
    .map(|ConnectInfo(addr)| addr.ip().to_string());

  let database = match store.ping().await {
    Ok(()) => "ok",
    Err(e) => {
      tracing::error!(error = %e, "database connectivity check failed");
      "not_connected"
    }
  };

  Json(HealthReport { caller, status: "ok", database })
}
