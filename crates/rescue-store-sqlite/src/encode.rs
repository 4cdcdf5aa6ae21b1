//! Positional mapping between [`Animal`] and the `animals` table.
//!
//! The attribute order here is the column order of every statement in the
//! store: `id` first, then the fifteen attributes as declared on
//! [`NewAnimal`]. Optional attributes bind as nullable parameters, so `None`
//! is written as `NULL` and read back as `None`.

use rescue_core::{Animal, NewAnimal};
use rusqlite::{Row, ToSql};

/// Result columns of every `SELECT`, in positional order.
pub const COLUMNS: &str = "id, name, species, breed, age, sex, description, \
   arrival_date, health_status, sterilisation_status, chip_number, \
   internal_notes, reason_onboarded, latest_vaccination_date, \
   current_location, status";

/// Statement parameters for every attribute except `id`, in column order
/// (`?1` to `?15` of the insert and update statements).
pub fn attribute_params(a: &NewAnimal) -> [&dyn ToSql; 15] {
  [
    &a.name,
    &a.species,
    &a.breed,
    &a.age,
    &a.sex,
    &a.description,
    &a.arrival_date,
    &a.health_status,
    &a.sterilisation_status,
    &a.chip_number,
    &a.internal_notes,
    &a.reason_onboarded,
    &a.latest_vaccination_date,
    &a.current_location,
    &a.status,
  ]
}

/// Decode one row selected with [`COLUMNS`].
pub fn decode_row(row: &Row<'_>) -> rusqlite::Result<Animal> {
  Ok(Animal {
    id:      row.get(0)?,
    details: NewAnimal {
      name:                    row.get(1)?,
      species:                 row.get(2)?,
      breed:                   row.get(3)?,
      age:                     row.get(4)?,
      sex:                     row.get(5)?,
      description:             row.get(6)?,
      arrival_date:            row.get(7)?,
      health_status:           row.get(8)?,
      sterilisation_status:    row.get(9)?,
      chip_number:             row.get(10)?,
      internal_notes:          row.get(11)?,
      reason_onboarded:        row.get(12)?,
      latest_vaccination_date: row.get(13)?,
      current_location:        row.get(14)?,
      status:                  row.get(15)?,
    },
  })
}
