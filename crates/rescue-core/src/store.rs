//! The `AnimalStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rescue-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend, and
//! receives a ready store at startup; how the backend obtains its connection
//! is not its concern.

use std::future::Future;

use crate::animal::{Animal, AnimalId, NewAnimal};

/// Abstraction over an animal record store.
///
/// Each method is one round trip to the backend with no surrounding
/// transaction. Backends report every failure, including a missing row, as
/// `Self::Error`; there is no separate not-found outcome.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait AnimalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every stored animal, in backend-defined order.
  fn list_animals(
    &self,
  ) -> impl Future<Output = Result<Vec<Animal>, Self::Error>> + Send + '_;

  /// Persist a new animal and return it with its newly assigned id.
  fn create_animal(
    &self,
    input: NewAnimal,
  ) -> impl Future<Output = Result<Animal, Self::Error>> + Send + '_;

  /// Fetch one animal. A missing row is an error.
  fn get_animal(
    &self,
    id: AnimalId,
  ) -> impl Future<Output = Result<Animal, Self::Error>> + Send + '_;

  /// Overwrite every attribute of the animal with `id`.
  ///
  /// This is a full replace, not a merge: optional attributes that are `None`
  /// in `input` become null. The id is not checked for existence; replacing a
  /// missing id affects no rows and still returns `input` bound to `id`.
  fn replace_animal(
    &self,
    id: AnimalId,
    input: NewAnimal,
  ) -> impl Future<Output = Result<Animal, Self::Error>> + Send + '_;

  /// Delete the animal with `id`. Deleting a missing id succeeds.
  fn delete_animal(
    &self,
    id: AnimalId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Round-trip a trivial query to check the backend is reachable.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
