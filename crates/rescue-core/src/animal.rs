//! The animal record, the only entity the service manages.
//!
//! Required attributes are plain `String`s; optional ones are `Option<T>`, and
//! `None` is stored as SQL `NULL` and omitted from encoded output. An optional
//! attribute is never coerced to an empty string or zero.

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned identifier of an [`Animal`].
pub type AnimalId = i64;

// ─── NewAnimal ───────────────────────────────────────────────────────────────

/// Every attribute of an animal except its id.
///
/// This is the input to both create and replace. A replace writes every field,
/// so a `None` here clears whatever the stored record held.
///
/// Decoding is permissive: a required attribute that is absent or `null`
/// becomes an empty string, and unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name:                    String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub species:                 String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub breed:                   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub age:                     Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sex:                     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description:             Option<String>,
  /// Free text; no date format is enforced.
  #[serde(default, deserialize_with = "null_as_empty")]
  pub arrival_date:            String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub health_status:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sterilisation_status:    Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub chip_number:             Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub internal_notes:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reason_onboarded:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub latest_vaccination_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_location:        Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub status:                  String,
}

impl NewAnimal {
  /// Convenience constructor with every optional attribute left null.
  pub fn new(
    name: impl Into<String>,
    species: impl Into<String>,
    arrival_date: impl Into<String>,
    status: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      species: species.into(),
      arrival_date: arrival_date.into(),
      status: status.into(),
      ..Self::default()
    }
  }

  /// Bind this record to a store-assigned id.
  pub fn with_id(self, id: AnimalId) -> Animal { Animal { id, details: self } }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Animal ──────────────────────────────────────────────────────────────────

/// A persisted animal. `id` is assigned once by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
  pub id:      AnimalId,
  #[serde(flatten)]
  pub details: NewAnimal,
}
