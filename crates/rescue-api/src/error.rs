//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The body of an error response is a fixed message per error kind. Details
//! such as store error text only reach the log.

use std::fmt;

use axum::{
  http::{Method, StatusCode},
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::codec::DecodeError;

/// The store operation a request was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  List,
  Create,
  Get,
  Replace,
  Delete,
}

impl Operation {
  pub fn name(self) -> &'static str {
    match self {
      Self::List => "list",
      Self::Create => "create",
      Self::Get => "get",
      Self::Replace => "replace",
      Self::Delete => "delete",
    }
  }

  fn store_failure_message(self) -> &'static str {
    match self {
      Self::List => "Failed to fetch animals",
      Self::Create => "Failed to create animal",
      Self::Get => "Failed to fetch animal by ID",
      Self::Replace => "Failed to update animal",
      Self::Delete => "Failed to delete animal",
    }
  }

  fn encode_failure_message(self) -> &'static str {
    match self {
      Self::List => "Failed to marshal animals",
      Self::Create => "Failed to marshal created animal",
      Self::Get => "Failed to marshal animal",
      Self::Replace => "Failed to marshal updated animal",
      // Delete responses have no body.
      Self::Delete => "Failed to delete animal",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid request body: {0}")]
  InvalidBody(#[from] DecodeError),

  #[error("invalid id: {0:?}")]
  InvalidId(String),

  #[error("id not provided for {0} request")]
  MissingId(Method),

  #[error("method not allowed: {0}")]
  MethodNotAllowed(Method),

  #[error("{op} failed: {source}")]
  Store {
    op:     Operation,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("failed to encode {op} response: {source}")]
  Encode {
    op:     Operation,
    #[source]
    source: serde_json::Error,
  },
}

impl ApiError {
  pub fn store<E>(op: Operation) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| Self::Store { op, source: Box::new(e) }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidBody(_) | Self::InvalidId(_) | Self::MissingId(_) => {
        StatusCode::BAD_REQUEST
      }
      Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
      Self::Store { .. } | Self::Encode { .. } => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  /// The message sent to the caller.
  pub fn public_message(&self) -> &'static str {
    match self {
      Self::InvalidBody(_) => "Invalid request body",
      Self::InvalidId(_) => "Invalid ID",
      Self::MissingId(_) => "ID not provided",
      Self::MethodNotAllowed(_) => "Method not allowed",
      Self::Store { op, .. } => op.store_failure_message(),
      Self::Encode { op, .. } => op.encode_failure_message(),
    }
  }

  fn operation(&self) -> Option<Operation> {
    match self {
      Self::Store { op, .. } | Self::Encode { op, .. } => Some(*op),
      _ => None,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let op = self.operation().map(Operation::name);
    if status.is_server_error() {
      tracing::error!(status = status.as_u16(), op, error = %self, "request failed");
    } else {
      tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
    }
    (status, self.public_message()).into_response()
  }
}
