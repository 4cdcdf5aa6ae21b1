//! Turns the result of a dispatched request into an HTTP response.

use axum::{
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use rescue_core::Animal;
use serde::Serialize;

use crate::{
  codec,
  error::{ApiError, Operation},
};

const CONTENT_TYPE_JSON: &str = "application/json";

/// The successful result of each store operation.
#[derive(Debug)]
pub enum Outcome {
  Listed(Vec<Animal>),
  Fetched(Animal),
  Created(Animal),
  Replaced(Animal),
  Deleted,
}

/// Render a dispatch result. This is the only place responses are built.
pub fn render(result: Result<Outcome, ApiError>) -> Response {
  match result.and_then(into_response) {
    Ok(response) => response,
    Err(e) => e.into_response(),
  }
}

fn into_response(outcome: Outcome) -> Result<Response, ApiError> {
  let (status, body) = match outcome {
    Outcome::Listed(animals) => {
      (StatusCode::OK, encode(Operation::List, &animals)?)
    }
    Outcome::Fetched(animal) => {
      (StatusCode::OK, encode(Operation::Get, &animal)?)
    }
    Outcome::Created(animal) => {
      (StatusCode::CREATED, encode(Operation::Create, &animal)?)
    }
    Outcome::Replaced(animal) => {
      (StatusCode::OK, encode(Operation::Replace, &animal)?)
    }
    Outcome::Deleted => return Ok(StatusCode::NO_CONTENT.into_response()),
  };

  Ok((status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response())
}

fn encode<T: Serialize + ?Sized>(
  op: Operation,
  value: &T,
) -> Result<Vec<u8>, ApiError> {
  codec::encode(value).map_err(|source| ApiError::Encode { op, source })
}
