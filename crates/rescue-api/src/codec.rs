//! JSON codec for animal payloads.
//!
//! Decoding is structural only: anything `serde_json` can map onto
//! [`NewAnimal`] is accepted, including payloads whose required attributes
//! are empty or missing. A `null` payload decodes as an animal with every
//! attribute empty, and a repeated key keeps its last value. Encoding omits
//! optional attributes that are null.

use rescue_core::NewAnimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("request body is missing")]
  MissingBody,

  #[error("malformed animal payload: {0}")]
  Malformed(#[from] serde_json::Error),
}

/// Decode a request body into the attributes of an animal.
pub fn decode_animal(body: Option<&[u8]>) -> Result<NewAnimal, DecodeError> {
  let bytes = body.ok_or(DecodeError::MissingBody)?;
  // Parsing through `Value` first collapses duplicate keys (last one wins)
  // before the struct sees them.
  let value: serde_json::Value = serde_json::from_slice(bytes)?;
  let animal: Option<NewAnimal> = serde_json::from_value(value)?;
  Ok(animal.unwrap_or_default())
}

/// Encode an animal, or a list of animals, as a response body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
  serde_json::to_vec(value)
}
