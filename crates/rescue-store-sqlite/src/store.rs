//! [`SqliteStore`] — the SQLite implementation of [`AnimalStore`].

use std::path::Path;

use rescue_core::{Animal, AnimalId, AnimalStore, NewAnimal};

use crate::{
  Result,
  encode::{COLUMNS, attribute_params, decode_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An animal store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── AnimalStore impl ────────────────────────────────────────────────────────

impl AnimalStore for SqliteStore {
  type Error = crate::Error;

  async fn list_animals(&self) -> Result<Vec<Animal>> {
    let animals = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM animals"))?;
        let rows = stmt
          .query_map([], decode_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(animals)
  }

  async fn create_animal(&self, input: NewAnimal) -> Result<Animal> {
    let animal = self
      .conn
      .call(move |conn| {
        let id: AnimalId = conn.query_row(
          "INSERT INTO animals (
             name, species, breed, age, sex, description, arrival_date,
             health_status, sterilisation_status, chip_number, internal_notes,
             reason_onboarded, latest_vaccination_date, current_location, status
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
           RETURNING id",
          rusqlite::params_from_iter(attribute_params(&input)),
          |row| row.get(0),
        )?;
        Ok(input.with_id(id))
      })
      .await?;

    tracing::debug!(id = animal.id, "created animal");
    Ok(animal)
  }

  async fn get_animal(&self, id: AnimalId) -> Result<Animal> {
    // No `.optional()`: a missing row surfaces as `QueryReturnedNoRows`.
    let animal = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!("SELECT {COLUMNS} FROM animals WHERE id = ?1"),
          rusqlite::params![id],
          decode_row,
        )?)
      })
      .await?;

    Ok(animal)
  }

  async fn replace_animal(
    &self,
    id:    AnimalId,
    input: NewAnimal,
  ) -> Result<Animal> {
    let (animal, affected) = self
      .conn
      .call(move |conn| {
        let params = attribute_params(&input)
          .into_iter()
          .chain(std::iter::once(&id as &dyn rusqlite::ToSql));
        let affected = conn.execute(
          "UPDATE animals SET
             name = ?1, species = ?2, breed = ?3, age = ?4, sex = ?5,
             description = ?6, arrival_date = ?7, health_status = ?8,
             sterilisation_status = ?9, chip_number = ?10,
             internal_notes = ?11, reason_onboarded = ?12,
             latest_vaccination_date = ?13, current_location = ?14,
             status = ?15
           WHERE id = ?16",
          rusqlite::params_from_iter(params),
        )?;
        Ok((input.with_id(id), affected))
      })
      .await?;

    tracing::debug!(id, affected, "updated animal");
    Ok(animal)
  }

  async fn delete_animal(&self, id: AnimalId) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM animals WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    tracing::debug!(id, affected, "deleted animal");
    Ok(())
  }

  async fn ping(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
